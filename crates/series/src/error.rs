//! Error types for the darcy-series crate.

/// Error type for series construction and range validation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SeriesError {
    /// Returned when columns passed to the series constructor differ in length.
    #[error("{column} column has length {len}, expected {expected}")]
    ColumnLengthMismatch {
        /// Name of the offending column.
        column: &'static str,
        /// Length of the offending column.
        len: usize,
        /// Expected length (length of the time column).
        expected: usize,
    },

    /// Returned when a column contains NaN or infinity.
    #[error("non-finite value in {column} column at index {index}")]
    NonFiniteValue {
        /// Name of the offending column.
        column: &'static str,
        /// Index of the non-finite value.
        index: usize,
    },

    /// Returned when a time value is zero or negative.
    ///
    /// The logarithmic derivative is taken with respect to `ln(time)`, so
    /// non-positive elapsed times can never enter a series.
    #[error("non-positive time {value} at index {index}")]
    NonPositiveTime {
        /// Index of the offending value.
        index: usize,
        /// The offending time value.
        value: f64,
    },

    /// Returned when time values are not strictly increasing.
    #[error("time {value} at index {index} does not increase past {previous}")]
    NonMonotonicTime {
        /// Index of the offending value.
        index: usize,
        /// The time value at `index - 1`.
        previous: f64,
        /// The offending time value.
        value: f64,
    },

    /// Returned when an exclusion range is inverted or non-finite.
    #[error("invalid exclusion range [{start}, {end}]")]
    InvalidExclusionRange {
        /// Start of the range.
        start: f64,
        /// End of the range.
        end: f64,
    },
}
