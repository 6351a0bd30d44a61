// ============================================================
// CSV READER
// ============================================================
// Read listing CSV files into raw rows, with encoding and
// delimiter detection

use csv::{ReaderBuilder, Trim};
use std::path::Path;

use crate::domain::error::{AppError, Result};
use crate::domain::listing::RawListing;

/// CSV reader for listing exports. Source files come from Korean Excel
/// exports, so the bytes may be UTF-8 (with or without BOM) or EUC-KR.
pub struct ListingCsvReader {
    /// Delimiter character (default: comma)
    delimiter: u8,

    /// Whether to trim whitespace from values
    trim: bool,
}

impl Default for ListingCsvReader {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: true,
        }
    }
}

impl ListingCsvReader {
    /// Create a new reader with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set whether to trim whitespace
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Read a CSV file and return raw listing rows
    pub fn read_file(&self, path: &Path) -> Result<Vec<RawListing>> {
        let content = self.read_with_encoding_detection(path)?;
        self.read_content(&content)
    }

    /// Parse CSV content from a string
    pub fn read_content(&self, content: &str) -> Result<Vec<RawListing>> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(if self.trim { Trim::All } else { Trim::None })
            .flexible(true) // Allow rows with different lengths
            .from_reader(content.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| AppError::ParseError(format!("Failed to read CSV headers: {}", e)))?
            .clone();

        let mut rows = Vec::new();

        for (index, result) in reader.records().enumerate() {
            // Row numbers are 1-based over data rows, header excluded
            let row_number = index + 1;
            let record = result.map_err(|e| {
                AppError::ParseError(format!("Failed to parse CSV row {}: {}", row_number, e))
            })?;

            let fields = headers
                .iter()
                .enumerate()
                .map(|(idx, header)| (header, record.get(idx).unwrap_or("")));

            rows.push(RawListing::from_fields(row_number, fields));
        }

        Ok(rows)
    }

    /// Read file bytes and decode: UTF-8 first (stripping a BOM if
    /// present), EUC-KR as the fallback for legacy exports, lossy UTF-8
    /// as the last resort.
    fn read_with_encoding_detection(&self, path: &Path) -> Result<String> {
        let bytes = std::fs::read(path).map_err(|e| {
            AppError::IoError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let bytes = bytes
            .strip_prefix("\u{feff}".as_bytes())
            .unwrap_or(&bytes);

        if let Ok(content) = std::str::from_utf8(bytes) {
            return Ok(content.to_string());
        }

        let (decoded, _, had_errors) = encoding_rs::EUC_KR.decode(bytes);
        if !had_errors {
            return Ok(decoded.into_owned());
        }

        Ok(String::from_utf8_lossy(bytes).into_owned())
    }

    /// Detect delimiter from content (comma, semicolon, tab, pipe)
    pub fn detect_delimiter(content: &str) -> u8 {
        let candidates = [b',', b';', b'\t', b'|'];

        let mut best_delimiter = b',';
        let mut best_score = 0.0f32;

        for &delimiter in &candidates {
            let sample_lines: Vec<_> = content.lines().take(10).collect();

            if sample_lines.is_empty() {
                continue;
            }

            let field_counts: Vec<usize> = sample_lines
                .iter()
                .map(|line| line.bytes().filter(|&b| b == delimiter).count())
                .collect();

            // Score by consistency (low standard deviation) and frequency
            let avg = field_counts.iter().sum::<usize>() as f32 / field_counts.len() as f32;
            let variance = field_counts
                .iter()
                .map(|&x| (x as f32 - avg).powi(2))
                .sum::<f32>()
                / field_counts.len() as f32;

            let score = avg / (1.0 + variance.sqrt());

            if score > best_score {
                best_score = score;
                best_delimiter = delimiter;
            }
        }

        best_delimiter
    }

    /// Read a CSV file with automatic delimiter detection
    pub fn read_file_auto_detect(path: &Path) -> Result<Vec<RawListing>> {
        let sample = {
            use std::fs::File;
            use std::io::Read;

            let mut file = File::open(path).map_err(|e| {
                AppError::IoError(format!("Failed to open {}: {}", path.display(), e))
            })?;

            let mut buffer = vec![0u8; 4096];
            let n = file.read(&mut buffer).unwrap_or(0);
            buffer.truncate(n);
            String::from_utf8_lossy(&buffer).into_owned()
        };

        let delimiter = Self::detect_delimiter(&sample);

        Self::default().with_delimiter(delimiter).read_file(path)
    }
}
