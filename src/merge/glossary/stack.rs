//! Ordered set of loaded glossary tables with priority resolution.

use log::debug;

use crate::merge::corpus::grammar::PARAGRAPH_BREAK;
use crate::merge::types::error::{MergeError, Result};
use crate::merge::types::models::{EngineConfig, GlossaryTable, Resolution};

use super::load;

/// An ordered, read-only sequence of glossary tables.
///
/// Configuration order is priority order: in the default mode the first
/// table containing a key answers it and the rest are never consulted. In
/// merge mode every table is consulted and their glosses are joined with
/// the paragraph-break token, still in priority order.
#[derive(Debug)]
pub struct GlossaryStack {
    tables: Vec<GlossaryTable>,
    merge_all: bool,
}

impl GlossaryStack {
    /// Loads every declared source, preserving configuration order as
    /// priority.
    ///
    /// # Errors
    /// - [`MergeError::NoGlossaries`] when the configuration declares none
    /// - [`MergeError::GlossaryFile`] when a declared source is unreadable
    pub fn load(config: &EngineConfig) -> Result<Self> {
        if config.sources.is_empty() {
            return Err(MergeError::NoGlossaries);
        }
        let tables = config
            .sources
            .iter()
            .map(load)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            tables,
            merge_all: config.merge_all,
        })
    }

    /// Resolves one candidate key against the stack.
    ///
    /// Every answering table's usage counter is incremented. No match in any
    /// table is a valid `None`, never an error.
    pub fn resolve(&self, key: &str) -> Option<Resolution> {
        if self.merge_all {
            let mut glosses: Vec<&str> = Vec::new();
            let mut sources = Vec::new();
            for table in &self.tables {
                if let Some(gloss) = table.lookup(key) {
                    glosses.push(gloss);
                    sources.push(table.source_id().to_string());
                }
            }
            if glosses.is_empty() {
                return None;
            }
            debug!("key '{}' matched {} glossaries (merge mode)", key, glosses.len());
            return Some(Resolution {
                gloss: glosses.join(PARAGRAPH_BREAK),
                sources,
            });
        }

        self.tables.iter().find_map(|table| {
            table.lookup(key).map(|gloss| Resolution {
                gloss: gloss.to_string(),
                sources: vec![table.source_id().to_string()],
            })
        })
    }

    pub fn tables(&self) -> &[GlossaryTable] {
        &self.tables
    }

    pub fn merge_all(&self) -> bool {
        self.merge_all
    }
}
