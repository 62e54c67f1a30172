//! Byte-exact gloss insertion into a serialized entry.
//!
//! The merged gloss becomes a new paragraph directly after the kanji-variant
//! span (after the reading span when no variant span exists); every other
//! byte of the entry passes through unchanged.
//!
//! Re-merge safety is explicitly not guaranteed: running the engine over its
//! own output splices a second gloss paragraph. There is no detection of a
//! previously inserted gloss.

use std::borrow::Cow;

use super::corpus::grammar::PARAGRAPH_BREAK;
use super::corpus::parser::ParsedEntry;
use super::types::models::Resolution;

/// Emits the serialized form of one entry, splicing the resolution in when
/// there is one.
///
/// A `None` resolution, a passthrough entry, or a structured entry without
/// an insertion point all emit the raw entry unchanged.
pub fn merge_entry<'a>(
    parsed: &ParsedEntry<'a>,
    resolution: Option<&Resolution>,
) -> Cow<'a, str> {
    let (entry, resolution) = match (parsed, resolution) {
        (ParsedEntry::Structured(entry), Some(resolution)) => (entry, resolution),
        _ => return Cow::Borrowed(parsed.raw()),
    };
    let Some(at) = entry.gloss_anchor else {
        return Cow::Borrowed(entry.raw);
    };

    let mut out = String::with_capacity(
        entry.raw.len() + PARAGRAPH_BREAK.len() + resolution.gloss.len(),
    );
    out.push_str(&entry.raw[..at]);
    out.push_str(PARAGRAPH_BREAK);
    out.push_str(&resolution.gloss);
    out.push_str(&entry.raw[at..]);
    Cow::Owned(out)
}
