//! Glossary resolution and entry-merge engine.
//!
//! # Module Organization
//!
//! - [`types`]: Foundational data structures and error types
//! - [`glossary`]: Glossary source loaders and the prioritized lookup stack
//! - [`corpus`]: Blob scanning and entry parsing against the fixed dialect
//! - [`resolve`]: Candidate-key expansion and gloss resolution
//! - [`splice`]: Byte-exact gloss insertion into a serialized entry
//! - [`engine`]: Orchestration across corpus blobs, with run statistics
//!
//! # Pipeline
//!
//! ```text
//! glossary files ──► GlossaryStack ─────────────┐
//!                                               ▼
//! blob text ──► EntryScanner ──► EntryParser ──► Resolver ──► splice ──► rewritten blob
//! ```

pub mod corpus;
pub mod engine;
pub mod glossary;
pub mod resolve;
pub mod splice;
pub mod types;

pub use engine::CorpusEngine;
pub use types::error::{MergeError, Result};
