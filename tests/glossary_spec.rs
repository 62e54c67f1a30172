//! Glossary loading, stack resolution, and candidate expansion specs.

use std::path::PathBuf;
use std::str::FromStr;

use gloss_merger::merge::glossary::stack::GlossaryStack;
use gloss_merger::merge::resolve::{CandidateKeys, Resolver};
use gloss_merger::{EngineConfig, MergeError, SourceFormat, SourceSpec};

fn fixture_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    p.push("tests");
    p.push("fixtures_src");
    p.push(name);
    p
}

/// EDICT first, Japanese3 second: EDICT wins ties.
fn sample_config(merge_all: bool) -> EngineConfig {
    EngineConfig {
        sources: vec![
            SourceSpec::new(SourceFormat::Edict, fixture_path("edict_sample.txt")),
            SourceSpec::new(SourceFormat::Japanese3, fixture_path("japanese3_sample.txt")),
        ],
        merge_all,
    }
}

fn sample_stack(merge_all: bool) -> GlossaryStack {
    GlossaryStack::load(&sample_config(merge_all)).expect("load stack")
}

#[test]
fn edict_gloss_is_trimmed_of_slashes_and_sequence_tag() {
    let stack = sample_stack(false);
    let edict = &stack.tables()[0];
    assert_eq!(edict.lookup("食べる"), Some("to eat"));
    assert_eq!(edict.lookup("食う"), Some("to eat/to consume"));
}

#[test]
fn edict_registers_every_headword_and_strips_priority_marker() {
    let stack = sample_stack(false);
    let edict = &stack.tables()[0];
    // 食べる, 食う, 木, 樹, 素晴らしい; bad lines skipped, kana never keyed
    assert_eq!(edict.len(), 5);
    assert_eq!(edict.lookup("樹"), Some("tree/wood"));
    assert_eq!(edict.lookup("樹(P)"), None);
    assert_eq!(edict.lookup("たべる"), None);
}

#[test]
fn edict_skips_short_lines_and_empty_glosses() {
    let stack = sample_stack(false);
    let edict = &stack.tables()[0];
    assert_eq!(edict.lookup("short"), None);
    assert_eq!(edict.lookup("見る"), None);
}

#[test]
fn japanese3_skips_lines_missing_headword_or_gloss() {
    let stack = sample_stack(false);
    let japanese3 = &stack.tables()[1];
    assert_eq!(japanese3.len(), 3);
    assert_eq!(japanese3.lookup("木"), Some("arbre"));
    assert_eq!(japanese3.lookup("走る"), Some("to run"));
    assert_eq!(japanese3.lookup("欠け"), None);
}

#[test]
fn priority_order_breaks_ties() {
    let stack = sample_stack(false);
    let resolution = stack.resolve("木").expect("match");
    assert_eq!(resolution.gloss, "tree/wood");
    assert_eq!(resolution.sources, vec!["edict_sample".to_string()]);
    // Only the answering table counts the hit.
    assert_eq!(stack.tables()[0].usage_count(), 1);
    assert_eq!(stack.tables()[1].usage_count(), 0);
}

#[test]
fn merge_mode_joins_all_matches_in_priority_order() {
    let stack = sample_stack(true);
    let resolution = stack.resolve("木").expect("match");
    assert_eq!(resolution.gloss, "tree/wood<br/>arbre");
    assert_eq!(
        resolution.sources,
        vec!["edict_sample".to_string(), "japanese3_sample".to_string()]
    );
    assert_eq!(stack.tables()[0].usage_count(), 1);
    assert_eq!(stack.tables()[1].usage_count(), 1);
}

#[test]
fn no_match_is_a_valid_empty_result() {
    let stack = sample_stack(false);
    assert!(stack.resolve("存在しない語").is_none());
    assert!(stack.resolve("").is_none());
}

#[test]
fn candidates_without_parentheses_are_just_the_variant() {
    let keys: Vec<String> = CandidateKeys::new("岳").map(|k| k.into_owned()).collect();
    assert_eq!(keys, vec!["岳".to_string()]);
}

#[test]
fn candidates_expand_elidable_kana_in_trial_order() {
    let keys: Vec<String> = CandidateKeys::new("素晴（ら）しい")
        .map(|k| k.into_owned())
        .collect();
    assert_eq!(
        keys,
        vec![
            "素晴（ら）しい".to_string(),
            "素晴らしい".to_string(),
            "素晴しい".to_string(),
        ]
    );
}

#[test]
fn candidates_handle_ascii_parentheses() {
    let keys: Vec<String> = CandidateKeys::new("素晴(ら)しい")
        .map(|k| k.into_owned())
        .collect();
    assert_eq!(
        keys,
        vec![
            "素晴(ら)しい".to_string(),
            "素晴らしい".to_string(),
            "素晴しい".to_string(),
        ]
    );
}

#[test]
fn candidates_are_restartable() {
    let keys = CandidateKeys::new("素晴（ら）しい");
    let first: Vec<String> = keys.clone().map(|k| k.into_owned()).collect();
    let second: Vec<String> = keys.map(|k| k.into_owned()).collect();
    assert_eq!(first, second);
}

#[test]
fn resolver_walks_variants_outer_then_candidates_inner() {
    let stack = sample_stack(false);
    let resolver = Resolver::new(&stack);

    // 岳 is in no table; the second variant 嶽 answers from Japanese3.
    let resolution = resolver.resolve(&["岳", "嶽"]).expect("match");
    assert_eq!(resolution.gloss, "mountain peak");
    assert_eq!(resolution.sources, vec!["japanese3_sample".to_string()]);

    // An earlier variant's match wins even when a later variant also matches.
    let resolution = resolver.resolve(&["木", "嶽"]).expect("match");
    assert_eq!(resolution.gloss, "tree/wood");

    assert!(resolver.resolve(&[]).is_none());
    assert!(resolver.resolve(&["存在しない語"]).is_none());
}

#[test]
fn empty_configuration_is_fatal() {
    let config = EngineConfig::default();
    assert!(matches!(
        GlossaryStack::load(&config),
        Err(MergeError::NoGlossaries)
    ));
}

#[test]
fn unreadable_glossary_is_fatal() {
    let config = EngineConfig {
        sources: vec![SourceSpec::new(
            SourceFormat::Edict,
            fixture_path("does_not_exist.txt"),
        )],
        merge_all: false,
    };
    assert!(matches!(
        GlossaryStack::load(&config),
        Err(MergeError::GlossaryFile { .. })
    ));
}

#[test]
fn source_format_names_parse() {
    assert_eq!(SourceFormat::from_str("edict").unwrap(), SourceFormat::Edict);
    assert_eq!(
        SourceFormat::from_str("EDICT2").unwrap(),
        SourceFormat::Edict
    );
    assert_eq!(
        SourceFormat::from_str("japanese3").unwrap(),
        SourceFormat::Japanese3
    );
    assert!(matches!(
        SourceFormat::from_str("webster"),
        Err(MergeError::UnknownFormat(_))
    ));
}
