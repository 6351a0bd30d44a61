// ============================================================
// RUN REPORTS
// ============================================================
// Output shapes of one pipeline run: rejected rows, displaced
// duplicates, and the summary statistics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::listing::{CleanedProperty, RawListing};

/// A row that failed required-field validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorRow {
    /// 1-based data row number in the source file.
    pub row_number: usize,
    /// Human-readable rejection reason.
    pub reason: String,
    /// The raw row as captured, for manual review.
    pub raw: RawListing,
}

/// A row discarded because a more complete row shares its key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuplicateEntry {
    /// Row number of the discarded row.
    pub row_number: usize,
    /// The `location|building|unit` key both rows share.
    pub duplicate_key: String,
    /// Row number of the row that was kept instead.
    pub kept_row_number: usize,
}

/// Distinct raw labels and manager names seen during a run. Mirrors the
/// lookup-mapping sidecar of the original cleaning script; useful when
/// reconciling the lookup tables against new source data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LabelUsage {
    pub property_types: BTreeSet<String>,
    pub transaction_types: BTreeSet<String>,
    pub statuses: BTreeSet<String>,
    pub managers: BTreeSet<String>,
}

/// Summary statistics for one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunStats {
    pub total_rows: usize,
    pub cleaned: usize,
    pub duplicates_removed: usize,
    pub errors: usize,
    pub generated_at: DateTime<Utc>,
    pub labels: LabelUsage,
}

/// Everything one pipeline run produces.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineReport {
    pub cleaned: Vec<CleanedProperty>,
    pub errors: Vec<ErrorRow>,
    pub duplicates: Vec<DuplicateEntry>,
    pub stats: RunStats,
}
