//! Splits one corpus blob into its header and an ordered sequence of raw
//! entries.
//!
//! The scanner is a single-pass cursor over the blob text: no backtracking
//! beyond locating the next entry anchor. It yields borrowed slices, so
//! header + concatenation of every yielded entry reconstructs the original
//! blob byte-for-byte.

use crate::merge::types::error::{MergeError, Result};

use super::grammar::ENTRY_ANCHOR;

/// Lazy, finite, non-restartable iterator over the raw entries of one blob.
///
/// Created by [`EntryScanner::new`], which also splits off the header (the
/// text before the first anchor). Each item is one contiguous slice from an
/// anchor to the next anchor or end of blob, never empty.
#[derive(Debug)]
pub struct EntryScanner<'a> {
    blob: &'a str,
    pos: usize,
}

impl<'a> EntryScanner<'a> {
    /// Splits off the blob header and positions the scanner at the first
    /// entry anchor.
    ///
    /// A blob with no anchor at all holds zero entries; its header is the
    /// whole text and the scanner yields nothing.
    ///
    /// # Errors
    /// [`MergeError::MalformedBlob`] when the blob is empty or begins with
    /// an entry anchor — every corpus file carries header text before its
    /// first entry.
    pub fn new(bucket: &str, blob: &'a str) -> Result<(&'a str, Self)> {
        if blob.is_empty() {
            return Err(MergeError::MalformedBlob {
                bucket: bucket.to_string(),
                reason: "blob is empty".to_string(),
            });
        }
        let first = blob.find(ENTRY_ANCHOR).unwrap_or(blob.len());
        if first == 0 {
            return Err(MergeError::MalformedBlob {
                bucket: bucket.to_string(),
                reason: "no header text before the first entry anchor".to_string(),
            });
        }
        Ok((&blob[..first], Self { blob, pos: first }))
    }
}

impl<'a> Iterator for EntryScanner<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.blob.len() {
            return None;
        }
        // Search for the next anchor past the one this entry starts with.
        let search_from = self.pos + ENTRY_ANCHOR.len();
        let end = self.blob[search_from..]
            .find(ENTRY_ANCHOR)
            .map(|i| search_from + i)
            .unwrap_or(self.blob.len());
        let entry = &self.blob[self.pos..end];
        self.pos = end;
        Some(entry)
    }
}
