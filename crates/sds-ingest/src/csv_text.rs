#![deny(unsafe_code)]

//! Parsing of raw comma-delimited text into a typed [`Dataset`].
//!
//! The first line defines the column names. Every cell of the target column
//! is coerced to a number at parse time; cells that do not represent a valid
//! finite number become [`CellValue::Missing`]. Structural problems (ragged
//! rows, decoding failures) abort the whole parse; there is no
//! partial-result recovery.

use std::collections::BTreeMap;

use sds_model::{CellValue, Dataset, Row};

use crate::error::{IngestError, Result};

/// Coerce one target-column cell to a numeric value.
///
/// Leading/trailing whitespace is ignored. Values that parse to a non-finite
/// float (`inf`, `nan` spellings) coerce to `Missing` as well, so the missing
/// marker stays the only non-number state downstream stages see.
pub fn coerce_numeric(value: &str) -> CellValue {
    match value.trim().parse::<f64>() {
        Ok(number) if number.is_finite() => CellValue::Number(number),
        _ => CellValue::Missing,
    }
}

/// Parse raw delimited text into a [`Dataset`] with `target` coerced.
///
/// # Errors
///
/// - [`IngestError::EmptyInput`] when the input is empty or whitespace-only,
///   before any parsing begins.
/// - [`IngestError::MissingTargetColumn`] when the header lacks `target`.
/// - [`IngestError::Csv`] when a record is structurally malformed; the whole
///   operation fails and no dataset is returned.
pub fn parse_dataset(raw: &str, target: &str) -> Result<Dataset> {
    if raw.trim().is_empty() {
        return Err(IngestError::EmptyInput);
    }
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(raw.as_bytes());
    let headers = reader.headers()?.clone();

    let columns: Vec<String> = headers.iter().map(str::to_string).collect();
    if !columns.iter().any(|column| column == target) {
        return Err(IngestError::MissingTargetColumn {
            column: target.to_string(),
        });
    }

    let mut dataset = Dataset::new(columns, target);
    for record in reader.records() {
        let record = record?;

        let mut cells: BTreeMap<String, CellValue> = BTreeMap::new();
        for (name, value) in headers.iter().zip(record.iter()) {
            let cell = if name == target {
                coerce_numeric(value)
            } else {
                CellValue::Text(value.to_string())
            };
            cells.insert(name.to_string(), cell);
        }
        dataset.push_row(Row { cells });
    }

    tracing::debug!(
        rows = dataset.len(),
        columns = dataset.columns.len(),
        "parsed dataset"
    );
    Ok(dataset)
}
