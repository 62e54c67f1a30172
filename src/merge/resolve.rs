//! Candidate-key expansion and gloss resolution.
//!
//! A kanji-variant field carries alternate written forms ("岳／嶽") and
//! elidable-kana compounds ("素晴（ら）しい"). Each variant expands into an
//! ordered fallback chain of candidate lookup keys, and the resolver walks
//! variants (outer) then candidates (inner) against the glossary stack until
//! one answers. Ties break purely by that nesting order, never by match
//! quality.

use std::borrow::Cow;

use log::trace;

use super::glossary::stack::GlossaryStack;
use super::types::models::Resolution;

const OPEN_PARENS: [char; 2] = ['(', '（'];
const CLOSE_PARENS: [char; 2] = [')', '）'];

fn is_paren(c: char) -> bool {
    OPEN_PARENS.contains(&c) || CLOSE_PARENS.contains(&c)
}

/// Lazy, finite, restartable (`Clone` before consuming) iterator over the
/// candidate lookup keys of one kanji variant, in trial order:
///
/// 1. the variant unchanged;
/// 2. the variant with all parenthesis characters removed — only when that
///    changes it ("素晴（ら）しい" → "素晴らしい");
/// 3. the variant with whole parenthetical groups removed — only when that
///    changes it and differs from stage 2 ("素晴（ら）しい" → "素晴しい").
///
/// Pure generator: performs no lookups.
#[derive(Debug, Clone)]
pub struct CandidateKeys<'a> {
    variant: &'a str,
    stage: u8,
}

impl<'a> CandidateKeys<'a> {
    pub fn new(variant: &'a str) -> Self {
        Self { variant, stage: 0 }
    }
}

impl<'a> Iterator for CandidateKeys<'a> {
    type Item = Cow<'a, str>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.stage += 1;
            match self.stage {
                1 => return Some(Cow::Borrowed(self.variant)),
                2 => {
                    let stripped = strip_paren_chars(self.variant);
                    if stripped != self.variant {
                        return Some(Cow::Owned(stripped));
                    }
                }
                3 => {
                    let cut = strip_paren_groups(self.variant);
                    if cut != self.variant && cut != strip_paren_chars(self.variant) {
                        return Some(Cow::Owned(cut));
                    }
                }
                _ => return None,
            }
        }
    }
}

/// Removes parenthesis characters, keeping enclosed text.
fn strip_paren_chars(s: &str) -> String {
    s.chars().filter(|c| !is_paren(*c)).collect()
}

/// Removes whole parenthetical groups, enclosed text included.
fn strip_paren_groups(s: &str) -> String {
    let mut depth = 0usize;
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if OPEN_PARENS.contains(&c) {
            depth += 1;
        } else if CLOSE_PARENS.contains(&c) {
            depth = depth.saturating_sub(1);
        } else if depth == 0 {
            out.push(c);
        }
    }
    out
}

/// Finds a gloss for one entry by walking its variants against the stack.
#[derive(Debug)]
pub struct Resolver<'a> {
    stack: &'a GlossaryStack,
}

impl<'a> Resolver<'a> {
    pub fn new(stack: &'a GlossaryStack) -> Self {
        Self { stack }
    }

    /// Resolves the first variant candidate the stack answers.
    ///
    /// An empty variant list attempts nothing — bare-reading-only entries
    /// are out of scope. `None` is the explicit no-match sentinel.
    pub fn resolve(&self, kanji_variants: &[&str]) -> Option<Resolution> {
        for variant in kanji_variants {
            for key in CandidateKeys::new(variant) {
                trace!("trying candidate '{key}' for variant '{variant}'");
                if let Some(resolution) = self.stack.resolve(&key) {
                    return Some(resolution);
                }
            }
        }
        None
    }
}
