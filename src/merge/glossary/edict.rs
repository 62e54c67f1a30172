//! EDICT2 line format parser.
//!
//! One entry per newline-terminated line:
//!
//! ```text
//! 食べる;食う(P) [たべる;くう] /to eat/to consume/EntL1234567X/
//! ```
//!
//! - First whitespace-separated field: semicolon-separated headword list, a
//!   trailing `(P)` priority marker stripped from each headword.
//! - Optional `[…]` kana list. Kana readings are not registered as lookup
//!   keys; the resolver works on kanji variants only.
//! - From the first `/` onward: the slash-delimited gloss, trimmed of its
//!   leading `/`, one trailing `EntL<digits>[X]/` tag, and a trailing `/`.

use std::collections::HashMap;
use std::sync::OnceLock;

use log::warn;
use regex::Regex;

/// Trailing sequence-number tag on an EDICT2 gloss, e.g. `EntL1234567X/`.
fn entry_tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"EntL[0-9]+X?/$").expect("fixed pattern"))
}

/// Parses one EDICT2 line into the table, last write winning on duplicate
/// headwords. Lines with fewer than 2 whitespace-separated fields or an
/// empty trimmed gloss are skipped with a warning.
pub(super) fn parse_line(line: &str, line_number: usize, entries: &mut HashMap<String, String>) {
    let mut fields = line.split_whitespace();
    let (Some(headwords), Some(_)) = (fields.next(), fields.next()) else {
        warn!("edict line {line_number}: fewer than 2 fields, skipped: {line}");
        return;
    };

    let Some(gloss) = trim_gloss(line) else {
        warn!("edict line {line_number}: empty gloss, skipped: {line}");
        return;
    };

    for headword in headwords.split(';') {
        let headword = headword.strip_suffix("(P)").unwrap_or(headword);
        if headword.is_empty() {
            continue;
        }
        entries.insert(headword.to_string(), gloss.clone());
    }
}

/// Extracts and trims the gloss portion of a line. Returns `None` when no
/// gloss remains after trimming.
fn trim_gloss(line: &str) -> Option<String> {
    let slash = line.find('/')?;
    let gloss = line[slash..].strip_prefix('/').unwrap_or(&line[slash..]);
    let gloss = match entry_tag_re().find(gloss) {
        Some(tag) => &gloss[..tag.start()],
        None => gloss,
    };
    let gloss = gloss.strip_suffix('/').unwrap_or(gloss);
    if gloss.trim().is_empty() {
        None
    } else {
        Some(gloss.to_string())
    }
}
