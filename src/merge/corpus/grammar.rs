//! The fixed structural dialect of corpus entries.
//!
//! All structural knowledge lives here as one ordered, anchored pattern plus
//! the token literals, so a future dialect variant is a table edit rather
//! than scattered pattern matching. The policy on mismatch is documented in
//! [`parser`](super::parser): fall back to verbatim passthrough, never fail.
//!
//! # Entry Shape
//!
//! ```text
//! <p><a name="HEADWORD">DISPLAY</a><b>READING</b>〔NOTE〕【VARIANTS】LEAD<br/>BODY
//! ```
//!
//! DISPLAY is headword text optionally interleaved with inline `<img …/>`
//! placeholders; the reading, annotation, and variant spans are each
//! optional; LEAD is free text up to the first paragraph break; BODY is
//! everything after it, verbatim.

use regex::{Captures, Regex};

use crate::merge::types::error::Result;

/// Fixed literal marking the start of one entry within a blob.
pub const ENTRY_ANCHOR: &str = "<p><a name=";

/// Paragraph-break token: separates an entry head from its body, and joins
/// glosses in merge mode.
pub const PARAGRAPH_BREAK: &str = "<br/>";

/// Closing of the bold reading span.
const READING_CLOSE: &str = "</b>";

/// Closing bracket of the kanji-variant span (3 bytes in UTF-8).
const VARIANTS_CLOSE: &str = "】";

/// The compiled entry grammar. Built once and passed by reference into the
/// parser; compilation only fails on a defective pattern, not on user data.
#[derive(Debug)]
pub struct Grammar {
    entry: Regex,
}

impl Grammar {
    pub fn new() -> Result<Self> {
        let entry = Regex::new(concat!(
            r#"(?s)^<p><a name="(?P<head>[^"]*)">"#,
            r#"(?:[^<]|<img[^>]*/>)*</a>"#,
            r#"(?:\s*<b>(?P<reading>[^<]*)</b>)?"#,
            r#"(?:\s*〔(?P<note>[^〕]*)〕)?"#,
            r#"(?:\s*【(?P<variants>[^】]*)】)?"#,
            r#".*?<br/>(?P<body>.*)$"#,
        ))?;
        Ok(Self { entry })
    }

    /// Applies the entry pattern to one raw entry.
    pub(super) fn captures<'a>(&self, raw: &'a str) -> Option<Captures<'a>> {
        self.entry.captures(raw)
    }

    /// Byte offset in `raw` directly after the kanji-variant span, or after
    /// the reading span when no variant span exists. This is where a merged
    /// gloss paragraph is spliced.
    pub(super) fn gloss_anchor(caps: &Captures<'_>) -> Option<usize> {
        if let Some(variants) = caps.name("variants") {
            return Some(variants.end() + VARIANTS_CLOSE.len());
        }
        caps.name("reading")
            .map(|reading| reading.end() + READING_CLOSE.len())
    }
}
