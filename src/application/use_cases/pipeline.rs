//! The one-shot cleaning pipeline.
//!
//! Reads every row of one CSV export, validates and normalizes each in
//! file order, resolves duplicates, and produces the full run report.
//! Synchronous and single-pass; nothing is mutated after the run.

use chrono::Utc;
use std::path::Path;
use tracing::{debug, info};

use crate::application::use_cases::cleaner::RowCleaner;
use crate::application::use_cases::dedup::Deduplicator;
use crate::domain::error::Result;
use crate::domain::listing::RawListing;
use crate::domain::report::{ErrorRow, LabelUsage, PipelineReport, RunStats};
use crate::infrastructure::config::PipelineConfig;
use crate::infrastructure::csv::ListingCsvReader;

pub struct CleaningPipeline {
    config: PipelineConfig,
}

impl CleaningPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Run the pipeline over a CSV file. A read failure aborts before
    /// any output exists.
    pub fn run_file(&self, path: &Path) -> Result<PipelineReport> {
        info!(input = %path.display(), "reading listing CSV");

        let rows = match self.config.delimiter {
            Some(delimiter) => ListingCsvReader::new()
                .with_delimiter(delimiter as u8)
                .read_file(path)?,
            None => ListingCsvReader::read_file_auto_detect(path)?,
        };

        Ok(self.run_rows(rows))
    }

    /// Run the pipeline over already-parsed CSV content.
    pub fn run_content(&self, content: &str) -> Result<PipelineReport> {
        let delimiter = match self.config.delimiter {
            Some(delimiter) => delimiter as u8,
            None => ListingCsvReader::detect_delimiter(content),
        };
        let rows = ListingCsvReader::new()
            .with_delimiter(delimiter)
            .read_content(content)?;

        Ok(self.run_rows(rows))
    }

    /// Process raw rows in order: validate, clean, deduplicate.
    pub fn run_rows(&self, rows: Vec<RawListing>) -> PipelineReport {
        let cleaner = RowCleaner::new(&self.config.lookups, &self.config.managers);
        let mut dedup = Deduplicator::new();
        let mut errors = Vec::new();
        let mut labels = LabelUsage::default();
        let total_rows = rows.len();

        for raw in rows {
            match cleaner.clean(&raw) {
                Ok(property) => {
                    record_labels(&mut labels, &property);
                    dedup.insert(property);
                }
                Err(reason) => {
                    debug!(row = raw.row_number, %reason, "row rejected");
                    errors.push(ErrorRow {
                        row_number: raw.row_number,
                        reason,
                        raw,
                    });
                }
            }
        }

        let (cleaned, duplicates) = dedup.finish();
        let stats = RunStats {
            total_rows,
            cleaned: cleaned.len(),
            duplicates_removed: duplicates.len(),
            errors: errors.len(),
            generated_at: Utc::now(),
            labels,
        };

        info!(
            total = stats.total_rows,
            cleaned = stats.cleaned,
            duplicates = stats.duplicates_removed,
            errors = stats.errors,
            "pipeline run complete"
        );

        PipelineReport {
            cleaned,
            errors,
            duplicates,
            stats,
        }
    }
}

/// Collect the raw labels that resolved to a code, plus manager names.
/// Feeds the stats report so new spreadsheet vocabulary is visible when
/// reconciling lookup tables.
fn record_labels(labels: &mut LabelUsage, property: &crate::domain::listing::CleanedProperty) {
    if property.property_type.is_some() {
        if let Some(raw) = &property.property_type_raw {
            labels.property_types.insert(raw.clone());
        }
    }
    if property.transaction_type.is_some() {
        if let Some(raw) = &property.transaction_type_raw {
            labels.transaction_types.insert(raw.clone());
        }
    }
    if let Some(raw) = &property.status_raw {
        labels.statuses.insert(raw.clone());
    }
    if let Some(name) = &property.manager_name {
        labels.managers.insert(name.clone());
    }
}
