//! Duplicate resolution over cleaned records.
//!
//! Rows are keyed by `location|building|unit`. When a key collides, the
//! row with more populated fields wins; ties keep the first-seen row.
//! Every displaced row leaves a trace in the duplicates report.

use std::collections::HashMap;

use crate::domain::listing::CleanedProperty;
use crate::domain::report::DuplicateEntry;

/// Accumulates cleaned records, resolving key collisions as they arrive.
/// Surviving records keep first-seen key order.
pub struct Deduplicator {
    records: Vec<CleanedProperty>,
    index_by_key: HashMap<String, usize>,
    displaced: Vec<DuplicateEntry>,
}

impl Deduplicator {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            index_by_key: HashMap::new(),
            displaced: Vec::new(),
        }
    }

    /// Insert one cleaned record, displacing a less complete holder of
    /// the same key if there is one.
    pub fn insert(&mut self, property: CleanedProperty) {
        let key = property.duplicate_key();

        match self.index_by_key.get(&key).copied() {
            None => {
                self.index_by_key.insert(key, self.records.len());
                self.records.push(property);
            }
            Some(index) => {
                let existing = &self.records[index];
                if property.completeness() > existing.completeness() {
                    // Newcomer is more complete; existing row is displaced
                    self.displaced.push(DuplicateEntry {
                        row_number: existing.row_number,
                        duplicate_key: key,
                        kept_row_number: property.row_number,
                    });
                    self.records[index] = property;
                } else {
                    self.displaced.push(DuplicateEntry {
                        row_number: property.row_number,
                        duplicate_key: key,
                        kept_row_number: existing.row_number,
                    });
                }
            }
        }
    }

    pub fn duplicates_removed(&self) -> usize {
        self.displaced.len()
    }

    /// Consume the accumulator: surviving records and displaced entries.
    pub fn finish(self) -> (Vec<CleanedProperty>, Vec<DuplicateEntry>) {
        (self.records, self.displaced)
    }
}

impl Default for Deduplicator {
    fn default() -> Self {
        Self::new()
    }
}
