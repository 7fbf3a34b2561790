//! CSV intake for bulk analysis
//!
//! Proper CSV parsing (quoted fields, embedded commas) with the header
//! row skipped and the first column of each data row taken as review
//! text. Rows beyond the per-request cap are excluded and reported via
//! the `truncated` flag instead of being dropped silently.

use crate::error::{AppError, AppResult};

/// Review rows extracted from an uploaded CSV
#[derive(Debug)]
pub struct CsvIntake {
    /// Review texts in row order, at most the cap
    pub rows: Vec<String>,
    /// True when data rows beyond the cap were excluded
    pub truncated: bool,
}

/// Parse CSV bytes into review rows.
///
/// Fails with `InsufficientData` unless the file holds a header row plus
/// at least one non-blank data row, and with `InvalidFormat` when the
/// bytes are not parseable CSV.
pub fn extract_review_rows(data: &[u8], cap: usize) -> AppResult<CsvIntake> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(data);

    let mut rows = Vec::new();
    let mut truncated = false;

    for record in reader.records() {
        let record = record.map_err(|e| {
            AppError::InvalidFormat(format!("Could not parse CSV: {}", e))
        })?;

        let text = record.get(0).unwrap_or("").trim();
        if text.is_empty() {
            continue;
        }

        if rows.len() == cap {
            truncated = true;
            break;
        }
        rows.push(text.to_string());
    }

    if rows.is_empty() {
        return Err(AppError::InsufficientData(
            "CSV must contain at least a header and one data row".to_string(),
        ));
    }

    Ok(CsvIntake { rows, truncated })
}
