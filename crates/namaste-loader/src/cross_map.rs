//! Cross-map table.
//!
//! Parses tab-delimited concept map exports and holds the immutable table of
//! source→target correspondences, indexed by source code.

use std::collections::HashMap;

use csv::StringRecord;
use namaste_types::CrossMapEntry;

use crate::parser::{field, TableRecord};
use crate::types::LoadResult;

/// Expected columns in a cross-map file.
const CROSS_MAP_COLUMNS: &[&str] = &["source", "target", "targetDisplay", "equivalence"];

impl TableRecord for CrossMapEntry {
    const EXPECTED_COLUMNS: &'static [&'static str] = CROSS_MAP_COLUMNS;

    fn from_record(record: &StringRecord) -> LoadResult<Self> {
        Ok(CrossMapEntry {
            source: field::required(record, 0, "source")?,
            target: field::required(record, 1, "target")?,
            target_display: field::text(record, 2),
            equivalence: field::text(record, 3),
        })
    }
}

/// Immutable table of cross-map entries.
///
/// Entries keep their load order; one source may map to many targets.
#[derive(Debug, Clone, Default)]
pub struct CrossMapTable {
    entries: Vec<CrossMapEntry>,
    /// Source code -> positions in `entries`, ascending.
    by_source: HashMap<String, Vec<usize>>,
}

impl CrossMapTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from entries in table order.
    pub fn from_entries(entries: Vec<CrossMapEntry>) -> Self {
        let mut by_source: HashMap<String, Vec<usize>> = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            by_source.entry(entry.source.clone()).or_default().push(i);
        }
        Self { entries, by_source }
    }

    /// Returns every entry whose source equals `code`, in table order.
    pub fn matches<'a>(&'a self, code: &str) -> impl Iterator<Item = &'a CrossMapEntry> + 'a {
        self.by_source
            .get(code)
            .into_iter()
            .flatten()
            .map(move |&i| &self.entries[i])
    }

    /// Returns the first entry whose source equals `code`.
    pub fn first_match(&self, code: &str) -> Option<&CrossMapEntry> {
        self.matches(code).next()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of distinct source codes.
    pub fn source_count(&self) -> usize {
        self.by_source.len()
    }
}
