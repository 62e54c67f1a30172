//! # gloss-merger
//!
//! Merges bilingual glossary data (EDICT2, Japanese3) into the per-entry
//! records of an e-reader dictionary corpus, splicing machine-readable
//! definitions alongside the existing native-language content.
//!
//! Archive unpacking and per-file compression are handled by external
//! collaborators; this crate consumes decompressed UTF-8 blob text keyed by
//! bucket and hands back the rewritten text.
pub mod merge;

// Re-export the main types for convenience
pub use merge::{
    engine::CorpusEngine,
    types::{
        error::{MergeError, Result},
        models::{EngineConfig, Resolution, RunStats, SourceFormat, SourceSpec},
    },
};
