//! Core data structures for the merge engine.
//!
//! This module defines the fundamental types used throughout the library:
//! - Engine and glossary-source configuration
//! - The read-only glossary lookup table
//! - Resolution results and run statistics

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

use encoding_rs::Encoding;

use super::error::MergeError;

/// Supported glossary file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// EDICT2 line format: `headword[;headword…] [kana] /gloss/…/EntL…/`.
    Edict,
    /// Japanese3 pipe-triple format: `headword|reading|gloss`.
    Japanese3,
}

impl FromStr for SourceFormat {
    type Err = MergeError;
    fn from_str(s: &str) -> Result<Self, MergeError> {
        match s.to_ascii_lowercase().as_str() {
            "edict" | "edict2" => Ok(Self::Edict),
            "japanese3" => Ok(Self::Japanese3),
            other => Err(MergeError::UnknownFormat(other.to_string())),
        }
    }
}

impl std::fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            SourceFormat::Edict => write!(f, "edict"),
            SourceFormat::Japanese3 => write!(f, "japanese3"),
        }
    }
}

/// One declared glossary source: format, file path, and an optional text
/// encoding override.
///
/// Encoding priority (highest → lowest): explicit override, then UTF-8.
/// Real EDICT distributions ship as EUC-JP, so the override matters there.
#[derive(Debug, Clone)]
pub struct SourceSpec {
    pub format: SourceFormat,
    pub path: PathBuf,
    pub encoding: Option<&'static Encoding>,
}

impl SourceSpec {
    pub fn new(format: SourceFormat, path: impl Into<PathBuf>) -> Self {
        Self {
            format,
            path: path.into(),
            encoding: None,
        }
    }

    pub fn with_encoding(mut self, encoding: &'static Encoding) -> Self {
        self.encoding = Some(encoding);
        self
    }
}

/// Engine configuration supplied by the caller.
///
/// Source order is glossary priority: earlier sources win ties. With
/// `merge_all` set, the resolver concatenates matches from every source
/// instead of stopping at the first.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    pub sources: Vec<SourceSpec>,
    pub merge_all: bool,
}

/// A read-only headword → gloss lookup table loaded from one glossary file.
///
/// Keys are unique; when a source defines a headword twice, the last
/// definition wins. The usage counter is the only mutable state and uses
/// relaxed atomic increments, so tables may be shared across blob workers
/// by reference.
#[derive(Debug)]
pub struct GlossaryTable {
    source_id: String,
    path: PathBuf,
    entries: HashMap<String, String>,
    usage: AtomicU64,
}

impl GlossaryTable {
    pub(crate) fn new(source_id: String, path: PathBuf, entries: HashMap<String, String>) -> Self {
        Self {
            source_id,
            path,
            entries,
            usage: AtomicU64::new(0),
        }
    }

    /// Short identifier used in resolution results and usage reports.
    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up a headword, counting the hit on this table's usage counter.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        let hit = self.entries.get(key).map(String::as_str);
        if hit.is_some() {
            self.usage.fetch_add(1, Ordering::Relaxed);
        }
        hit
    }

    /// How many lookups this table has answered so far.
    pub fn usage_count(&self) -> u64 {
        self.usage.load(Ordering::Relaxed)
    }
}

/// A resolved gloss for one entry.
///
/// In merge mode `gloss` is the paragraph-break join of every matching
/// table's gloss, in priority order, and `sources` lists every contributing
/// table id. Otherwise both hold exactly one element's worth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub gloss: String,
    pub sources: Vec<String>,
}

/// Counters accumulated across all blobs of a run.
///
/// Per-glossary resolved counts live on the tables themselves; see
/// [`GlossaryTable::usage_count`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Raw entries produced by the scanner.
    pub entries_seen: u64,
    /// Entries for which a gloss was found and spliced.
    pub resolved: u64,
    /// Entries that failed the structural grammar and passed through verbatim.
    pub structural_mismatches: u64,
    /// Entries whose variant candidates matched no glossary. Entries without
    /// a kanji-variant span never attempt resolution and are not counted here.
    pub no_match: u64,
}
