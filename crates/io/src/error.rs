//! Error types for the darcy-io crate.

/// Error type for CSV import.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when the file cannot be opened or read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Returned when the CSV is malformed (unreadable records or headers).
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Returned when a required column is absent from the header row.
    ///
    /// This is the structural "missing required column" failure: callers
    /// convert it into a zero-score validation report rather than a crash.
    #[error("required column '{column}' not found in header")]
    MissingColumn {
        /// The configured column name that was not found.
        column: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_missing_column() {
        let e = IoError::MissingColumn {
            column: "pressure".to_string(),
        };
        assert_eq!(e.to_string(), "required column 'pressure' not found in header");
    }
}
