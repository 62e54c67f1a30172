//! Orchestrates the scan → parse → resolve → splice pipeline across corpus
//! blobs and tracks run statistics.

use log::{debug, info};

use super::corpus::grammar::Grammar;
use super::corpus::parser::{parse_entry, ParsedEntry};
use super::corpus::scanner::EntryScanner;
use super::glossary::stack::GlossaryStack;
use super::resolve::Resolver;
use super::splice::merge_entry;
use super::types::error::Result;
use super::types::models::{EngineConfig, RunStats};

/// The merge engine: loaded glossary stack, compiled grammar, and counters.
///
/// Blobs are disjoint and the stack is read-only after load, so processing
/// is sequential per blob but may be sharded across blobs by a caller that
/// keeps each blob's output private to its worker (usage counters are
/// atomic).
#[derive(Debug)]
pub struct CorpusEngine {
    stack: GlossaryStack,
    grammar: Grammar,
    stats: RunStats,
}

impl CorpusEngine {
    /// Loads every declared glossary and compiles the entry grammar.
    ///
    /// # Errors
    /// Returns an error when the configuration declares no sources or when
    /// a declared source is unreadable — both abort before any blob is
    /// touched.
    pub fn new(config: &EngineConfig) -> Result<Self> {
        let stack = GlossaryStack::load(config)?;
        let grammar = Grammar::new()?;
        Ok(Self {
            stack,
            grammar,
            stats: RunStats::default(),
        })
    }

    /// Rewrites one corpus blob, splicing a gloss into every entry the stack
    /// can answer.
    ///
    /// No single entry's failure aborts the blob: entries failing the
    /// structural grammar pass through verbatim, entries without a match are
    /// counted and left unchanged. The returned text is handed back to the
    /// upstream collaborator for recompression.
    ///
    /// # Errors
    /// [`MergeError::MalformedBlob`](super::types::error::MergeError) when
    /// the blob carries no header text before its first entry anchor.
    pub fn rewrite_blob(&mut self, bucket: &str, blob: &str) -> Result<String> {
        let (header, scanner) = EntryScanner::new(bucket, blob)?;
        let resolver = Resolver::new(&self.stack);

        let mut out = String::with_capacity(blob.len());
        out.push_str(header);

        let mut entries = 0u64;
        for raw in scanner {
            entries += 1;
            self.stats.entries_seen += 1;

            let parsed = parse_entry(&self.grammar, raw);
            let resolution = match &parsed {
                ParsedEntry::Structured(entry) if !entry.kanji_variants.is_empty() => {
                    let resolution = resolver.resolve(&entry.kanji_variants);
                    match &resolution {
                        Some(r) => {
                            self.stats.resolved += 1;
                            debug!(
                                "entry '{}' resolved via {:?}",
                                entry.headword, r.sources
                            );
                        }
                        None => self.stats.no_match += 1,
                    }
                    resolution
                }
                ParsedEntry::Structured(_) => None,
                ParsedEntry::Passthrough(_) => {
                    self.stats.structural_mismatches += 1;
                    None
                }
            };

            out.push_str(&merge_entry(&parsed, resolution.as_ref()));
        }

        info!("Rewrote blob '{}': {} entries", bucket, entries);
        Ok(out)
    }

    /// Counters accumulated so far across every rewritten blob.
    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// Per-glossary resolved counts, in priority order.
    pub fn usage_report(&self) -> Vec<(&str, u64)> {
        self.stack
            .tables()
            .iter()
            .map(|table| (table.source_id(), table.usage_count()))
            .collect()
    }

    pub fn stack(&self) -> &GlossaryStack {
        &self.stack
    }
}
