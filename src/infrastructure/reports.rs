// ============================================================
// REPORT WRITER
// ============================================================
// Write the four output files of a pipeline run. CSV reports get a
// UTF-8 BOM so Korean text opens correctly in Excel.

use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use crate::domain::error::{AppError, Result};
use crate::domain::report::{DuplicateEntry, ErrorRow, PipelineReport};

const BOM: &str = "\u{feff}";

pub const CLEANED_FILE: &str = "cleaned_properties.json";
pub const ERROR_FILE: &str = "error_report.csv";
pub const DUPLICATE_FILE: &str = "duplicate_report.csv";
pub const STATS_FILE: &str = "stats.json";

/// Flat CSV shape for one rejected row.
#[derive(Serialize)]
struct ErrorCsvRecord<'a> {
    row_number: usize,
    reason: &'a str,
    manager: Option<&'a str>,
    location: Option<&'a str>,
    property_name: Option<&'a str>,
    building: Option<&'a str>,
    unit: Option<&'a str>,
    property_type: Option<&'a str>,
    transaction_type: Option<&'a str>,
    status: Option<&'a str>,
    price: Option<&'a str>,
}

impl<'a> From<&'a ErrorRow> for ErrorCsvRecord<'a> {
    fn from(row: &'a ErrorRow) -> Self {
        Self {
            row_number: row.row_number,
            reason: &row.reason,
            manager: row.raw.manager.as_deref(),
            location: row.raw.location.as_deref(),
            property_name: row.raw.property_name.as_deref(),
            building: row.raw.building.as_deref(),
            unit: row.raw.unit.as_deref(),
            property_type: row.raw.property_type.as_deref(),
            transaction_type: row.raw.transaction_type.as_deref(),
            status: row.raw.status.as_deref(),
            price: row.raw.price.as_deref(),
        }
    }
}

/// Writes the report files of one run into an output directory.
pub struct ReportWriter {
    output_dir: PathBuf,
}

impl ReportWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Write all four report files. The output directory is created if
    /// it does not exist.
    pub fn write_all(&self, report: &PipelineReport) -> Result<()> {
        std::fs::create_dir_all(&self.output_dir).map_err(|e| {
            AppError::IoError(format!(
                "Failed to create output dir {}: {}",
                self.output_dir.display(),
                e
            ))
        })?;

        self.write_json(CLEANED_FILE, &report.cleaned)?;
        self.write_error_csv(&report.errors)?;
        self.write_duplicate_csv(&report.duplicates)?;
        self.write_json(STATS_FILE, &report.stats)?;

        Ok(())
    }

    pub fn path_of(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }

    fn write_json<T: Serialize>(&self, file_name: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        let mut file = self.create(file_name)?;
        file.write_all(json.as_bytes())?;
        file.write_all(b"\n")?;
        Ok(())
    }

    fn write_error_csv(&self, errors: &[ErrorRow]) -> Result<()> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        for row in errors {
            writer.serialize(ErrorCsvRecord::from(row))?;
        }
        self.write_csv_bytes(ERROR_FILE, writer)
    }

    fn write_duplicate_csv(&self, duplicates: &[DuplicateEntry]) -> Result<()> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        for entry in duplicates {
            writer.serialize(entry)?;
        }
        self.write_csv_bytes(DUPLICATE_FILE, writer)
    }

    fn write_csv_bytes(&self, file_name: &str, writer: csv::Writer<Vec<u8>>) -> Result<()> {
        let bytes = writer
            .into_inner()
            .map_err(|e| AppError::Internal(format!("CSV writer flush failed: {}", e)))?;

        let mut file = self.create(file_name)?;
        file.write_all(BOM.as_bytes())?;
        file.write_all(&bytes)?;
        Ok(())
    }

    fn create(&self, file_name: &str) -> Result<File> {
        let path = self.path_of(file_name);
        File::create(&path)
            .map_err(|e| AppError::IoError(format!("Failed to create {}: {}", path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::listing::RawListing;

    #[test]
    fn test_error_csv_record_projection() {
        let raw = RawListing::from_fields(4, vec![("담당자", "장민아"), ("금액", "28억")]);
        let row = ErrorRow {
            row_number: 4,
            reason: "missing required fields".to_string(),
            raw,
        };

        let record = ErrorCsvRecord::from(&row);
        assert_eq!(record.row_number, 4);
        assert_eq!(record.manager, Some("장민아"));
        assert_eq!(record.price, Some("28억"));
        assert_eq!(record.location, None);
    }
}
