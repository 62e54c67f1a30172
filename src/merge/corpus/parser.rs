//! Extracts structured fields from one raw entry.
//!
//! Fallback policy: an entry that does not match the grammar is returned as
//! [`ParsedEntry::Passthrough`] with a diagnostic — malformed entries are
//! expected at corpus scale and are never fatal. A passthrough entry is
//! emitted byte-identical by the merger.

use log::debug;

use super::grammar::Grammar;

/// Result of parsing one raw entry.
#[derive(Debug, PartialEq, Eq)]
pub enum ParsedEntry<'a> {
    Structured(StructuredEntry<'a>),
    /// The raw entry text, kept whole; body = raw text.
    Passthrough(&'a str),
}

impl<'a> ParsedEntry<'a> {
    /// The serialized form this entry re-emits as when nothing is merged.
    pub fn raw(&self) -> &'a str {
        match self {
            ParsedEntry::Structured(entry) => entry.raw,
            ParsedEntry::Passthrough(raw) => raw,
        }
    }
}

/// The structured fields of a well-formed entry. All slices borrow from the
/// raw entry text.
#[derive(Debug, PartialEq, Eq)]
pub struct StructuredEntry<'a> {
    pub raw: &'a str,
    /// The `name` attribute of the entry anchor. Unique within one blob,
    /// not globally.
    pub headword: &'a str,
    /// Content of the bold reading span, when present.
    pub reading: Option<&'a str>,
    /// Content of the `〔…〕` annotation span, when present.
    pub annotation: Option<&'a str>,
    /// Segments of the `【…】` span in written order, brackets stripped.
    /// Empty when the span is absent; such entries skip resolution.
    pub kanji_variants: Vec<&'a str>,
    /// Byte offset in `raw` where a merged gloss paragraph is spliced
    /// (directly after the variant span, else after the reading span).
    pub gloss_anchor: Option<usize>,
    /// Text after the paragraph break, verbatim.
    pub body: &'a str,
}

/// Parses one raw entry against the grammar.
pub fn parse_entry<'a>(grammar: &Grammar, raw: &'a str) -> ParsedEntry<'a> {
    let Some(caps) = grammar.captures(raw) else {
        debug!("structural mismatch near '{}'", context_snippet(raw));
        return ParsedEntry::Passthrough(raw);
    };

    let headword = caps.name("head").map(|m| m.as_str()).unwrap_or("");
    let kanji_variants = caps
        .name("variants")
        .map(|m| {
            m.as_str()
                .split(['／', '/'])
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .collect()
        })
        .unwrap_or_default();

    ParsedEntry::Structured(StructuredEntry {
        raw,
        headword,
        reading: caps.name("reading").map(|m| m.as_str()),
        annotation: caps.name("note").map(|m| m.as_str()),
        kanji_variants,
        gloss_anchor: Grammar::gloss_anchor(&caps),
        body: caps.name("body").map(|m| m.as_str()).unwrap_or(""),
    })
}

/// A short prefix of the entry for mismatch diagnostics.
fn context_snippet(raw: &str) -> &str {
    let limit = raw
        .char_indices()
        .nth(48)
        .map(|(i, _)| i)
        .unwrap_or(raw.len());
    &raw[..limit]
}
