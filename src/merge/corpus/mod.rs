//! Corpus blob scanning and entry parsing.
//!
//! # Module Organization
//!
//! - [`grammar`]: The fixed structural dialect — token literals and the one
//!   compiled entry pattern
//! - [`scanner`]: Splits a blob into header + raw entries, byte-exactly
//! - [`parser`]: Extracts structured fields from one raw entry, falling back
//!   to verbatim passthrough on mismatch
//!
//! The dialect is narrow by design: anything the grammar does not name is
//! opaque payload and is copied through unchanged.

pub mod grammar;
pub mod parser;
pub mod scanner;
