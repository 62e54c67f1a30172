//! Custom error types for the gloss-merger crate.

use std::path::PathBuf;
use thiserror::Error;

/// The primary error type for all operations in this crate.
///
/// Only fatal conditions are represented here. Glossary lines or corpus
/// entries that fail their narrow grammar are recoverable findings: they are
/// logged, counted in the run statistics, and never surface as an error.
#[derive(Debug, Error)]
pub enum MergeError {
    /// An error originating from I/O operations.
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// A declared glossary file could not be read. Declared dictionaries are
    /// expected to exist, so this aborts the run.
    #[error("Glossary file unreadable: {path}: {reason}")]
    GlossaryFile { path: PathBuf, reason: String },

    /// The configuration declared no glossary sources at all.
    #[error("No glossary sources declared in the configuration.")]
    NoGlossaries,

    /// A glossary format name in the configuration was not recognized.
    #[error("Unknown glossary format: '{0}'. Expected 'edict' or 'japanese3'.")]
    UnknownFormat(String),

    /// A corpus blob is structurally unusable (no header text before the
    /// first entry anchor).
    #[error("Malformed corpus blob '{bucket}': {reason}")]
    MalformedBlob { bucket: String, reason: String },

    /// The entry grammar failed to compile. Indicates a defect in the fixed
    /// dialect patterns, not in user data.
    #[error("Entry grammar failed to compile: {0}")]
    Grammar(#[from] regex::Error),
}

/// A convenience `Result` type alias using the crate's `MergeError` type.
pub type Result<T> = std::result::Result<T, MergeError>;
