//! Error types for the darcy-preprocess crate.

use darcy_series::SeriesError;

/// Error type for preprocessing.
///
/// All variants are precondition violations: the caller supplied a malformed
/// configuration. Data-quality problems in the rows themselves never error —
/// unusable rows are dropped.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PreprocessError {
    /// Returned when the smoothing window is even or smaller than 3.
    #[error("smoothing window must be odd and >= 3, got {window}")]
    InvalidWindow {
        /// The invalid window size.
        window: usize,
    },

    /// Returned when an exclusion range is inverted or non-finite, or the
    /// cleaned columns fail the series invariants.
    #[error(transparent)]
    Series(#[from] SeriesError),
}
