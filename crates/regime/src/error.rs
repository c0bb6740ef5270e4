//! Error types for the darcy-regime crate.

/// Error type for regime classification.
///
/// All variants are precondition violations. A series too short to classify
/// is not an error — it yields an empty segment list.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ClassifyError {
    /// Returned when the slope window size is zero.
    #[error("window must be >= 1, got {window}")]
    InvalidWindow {
        /// The invalid window size.
        window: usize,
    },

    /// Returned when the anchor step is zero.
    #[error("step must be >= 1, got {step}")]
    InvalidStep {
        /// The invalid step.
        step: usize,
    },

    /// Returned when the minimum span fraction is outside `[0, 1)`.
    #[error("min span fraction must be in [0, 1), got {fraction}")]
    InvalidSpanFraction {
        /// The invalid fraction.
        fraction: f64,
    },

    /// Returned when a time-fraction boundary policy carries a fraction
    /// outside `[0, 1]`.
    #[error("boundary time fraction must be in [0, 1], got {fraction}")]
    InvalidBoundaryFraction {
        /// The invalid fraction.
        fraction: f64,
    },

    /// Returned when the smoothed derivative was requested but the series
    /// carries no smoothed column.
    #[error("smoothed derivative requested but the series has no smoothed column")]
    SmoothedColumnMissing,
}
