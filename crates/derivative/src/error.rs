//! Error types for the darcy-derivative crate.

use darcy_series::SeriesError;

/// Error type for derivative computation.
///
/// All variants are precondition violations. Numerical edge cases — missing
/// neighbors, series shorter than 3 points — are represented as `None`
/// derivatives, never as errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DerivativeError {
    /// Returned when the log-spacing parameter is non-finite or not positive.
    #[error("log-spacing parameter L must be finite and positive, got {l}")]
    InvalidSpacing {
        /// The invalid L value.
        l: f64,
    },

    /// Returned when smoothed pressure was requested but the series carries
    /// no smoothed column.
    #[error("smoothed pressure requested but the series has no smoothed column")]
    SmoothedColumnMissing,

    /// Returned when derivative smoothing was configured with an invalid
    /// window.
    #[error(transparent)]
    Smoothing(#[from] darcy_preprocess::PreprocessError),

    /// Returned when result columns fail the series invariants (construction
    /// from untrusted columns).
    #[error(transparent)]
    Series(#[from] SeriesError),
}
