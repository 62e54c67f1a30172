//! Glossary source loading and the prioritized lookup stack.
//!
//! # Module Organization
//!
//! - [`edict`]: EDICT2 line format parser
//! - [`japanese3`]: Japanese3 pipe-triple line format parser
//! - [`stack`]: Ordered set of loaded tables with priority resolution
//!
//! Both formats share one line-oriented loader: read the file bytes, decode
//! them with the declared encoding, and feed each line to the format's line
//! parser. Lines that fail a format's narrow grammar are skipped (EDICT2
//! logs a warning with the line number and raw text; Japanese3 skips
//! silently) — a bad line never aborts a load.

pub mod edict;
pub mod japanese3;
pub mod stack;

use std::collections::HashMap;
use std::fs;

use log::{info, warn};

use super::types::error::{MergeError, Result};
use super::types::models::{GlossaryTable, SourceFormat, SourceSpec};

/// Loads one declared glossary file into a read-only lookup table.
///
/// The source id is derived from the file stem and is what resolution
/// results and usage reports refer to.
///
/// # Errors
/// Returns [`MergeError::GlossaryFile`] when the path cannot be read;
/// declared dictionaries are expected to exist.
pub fn load(spec: &SourceSpec) -> Result<GlossaryTable> {
    let bytes = fs::read(&spec.path).map_err(|e| MergeError::GlossaryFile {
        path: spec.path.clone(),
        reason: e.to_string(),
    })?;

    let encoding = spec.encoding.unwrap_or(encoding_rs::UTF_8);
    let (text, _, had_errors) = encoding.decode(&bytes);
    if had_errors {
        warn!(
            "Glossary {} contained byte sequences invalid for {}; they were replaced",
            spec.path.display(),
            encoding.name()
        );
    }

    let mut entries = HashMap::new();
    for (idx, line) in text.lines().enumerate() {
        let line_number = idx + 1;
        match spec.format {
            SourceFormat::Edict => edict::parse_line(line, line_number, &mut entries),
            SourceFormat::Japanese3 => japanese3::parse_line(line, &mut entries),
        }
    }

    let source_id = spec
        .path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("glossary")
        .to_string();

    info!(
        "Loaded {} glossary '{}' from {}: {} headwords",
        spec.format,
        source_id,
        spec.path.display(),
        entries.len()
    );

    Ok(GlossaryTable::new(source_id, spec.path.clone(), entries))
}
