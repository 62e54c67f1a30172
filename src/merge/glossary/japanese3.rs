//! Japanese3 pipe-triple line format parser.
//!
//! One entry per line, up to 3 `|`-separated fields:
//!
//! ```text
//! 木|き|arbre
//! ```
//!
//! The middle field is a reading, reserved for future use and unused by the
//! resolver. Lines missing the headword or the gloss are skipped silently.

use std::collections::HashMap;

pub(super) fn parse_line(line: &str, entries: &mut HashMap<String, String>) {
    let mut fields = line.splitn(3, '|');
    let headword = fields.next().unwrap_or("").trim();
    let _reading = fields.next();
    let gloss = fields.next().map(str::trim).unwrap_or("");

    if headword.is_empty() || gloss.is_empty() {
        return;
    }
    entries.insert(headword.to_string(), gloss.to_string());
}
