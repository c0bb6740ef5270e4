//! CSV reader with canonical column mapping.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use darcy_series::RawRow;
use tracing::debug;

use crate::error::IoError;

/// Mapping from import-specific column names to the canonical schema.
///
/// `time` and `pressure` are required; `rate` is optional and defaults to
/// absent (every row gets `rate = None`).
#[derive(Debug, Clone)]
pub struct ColumnMap {
    /// Header name of the elapsed-time column.
    time: String,
    /// Header name of the pressure column.
    pressure: String,
    /// Header name of the rate column, if the import has one.
    rate: Option<String>,
}

impl Default for ColumnMap {
    /// Returns the canonical mapping: `time`, `pressure`, no rate column.
    fn default() -> Self {
        Self {
            time: "time".to_string(),
            pressure: "pressure".to_string(),
            rate: None,
        }
    }
}

impl ColumnMap {
    /// Sets the time column name.
    pub fn with_time(mut self, name: impl Into<String>) -> Self {
        self.time = name.into();
        self
    }

    /// Sets the pressure column name.
    pub fn with_pressure(mut self, name: impl Into<String>) -> Self {
        self.pressure = name.into();
        self
    }

    /// Sets the rate column name.
    pub fn with_rate(mut self, name: impl Into<String>) -> Self {
        self.rate = Some(name.into());
        self
    }

    /// Returns the time column name.
    pub fn time(&self) -> &str {
        &self.time
    }

    /// Returns the pressure column name.
    pub fn pressure(&self) -> &str {
        &self.pressure
    }

    /// Returns the rate column name, if configured.
    pub fn rate(&self) -> Option<&str> {
        self.rate.as_deref()
    }
}

/// Reads raw rows from a CSV file.
///
/// # Errors
///
/// Returns [`IoError::MissingColumn`] if a required column is absent from
/// the header, [`IoError::Io`] / [`IoError::Csv`] for unreadable input.
pub fn read_rows(path: &Path, columns: &ColumnMap) -> Result<Vec<RawRow>, IoError> {
    let file = File::open(path)?;
    read_rows_from(file, columns)
}

/// Reads raw rows from any CSV source.
///
/// Header matching is case-insensitive after trimming whitespace. A
/// configured rate column that is absent from the header is tolerated
/// (rows get `rate = None`); missing time or pressure columns are not.
pub fn read_rows_from<R: Read>(source: R, columns: &ColumnMap) -> Result<Vec<RawRow>, IoError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    let find = |name: &str| {
        headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(name))
    };

    let time_idx = find(columns.time()).ok_or_else(|| IoError::MissingColumn {
        column: columns.time().to_string(),
    })?;
    let pressure_idx = find(columns.pressure()).ok_or_else(|| IoError::MissingColumn {
        column: columns.pressure().to_string(),
    })?;
    let rate_idx = columns.rate().and_then(find);

    let parse = |record: &csv::StringRecord, idx: usize| -> Option<f64> {
        record.get(idx).and_then(|cell| cell.parse::<f64>().ok())
    };

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(RawRow {
            time: parse(&record, time_idx),
            pressure: parse(&record, pressure_idx),
            rate: rate_idx.and_then(|idx| parse(&record, idx)),
        });
    }

    debug!(rows = rows.len(), "CSV import complete");
    Ok(rows)
}
