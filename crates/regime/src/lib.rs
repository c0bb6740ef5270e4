//! Flow regime segmentation of a Bourdet derivative curve.
//!
//! Slides a fixed-size window across the derivative series, estimates the
//! local log-log slope, maps each window to a named [`FlowRegime`] through a
//! fixed threshold ladder, merges contiguous same-label windows, and drops
//! segments too short to be diagnostic.
//!
//! Classification is a pure function of the derivative series and the
//! configuration: no randomness, no external state.
//!
//! # Quick start
//!
//! ```
//! use darcy_derivative::DerivativeSeries;
//! use darcy_regime::{ClassifyConfig, classify};
//!
//! let time: Vec<f64> = (0..40).map(|i| 10f64.powf(i as f64 * 0.05)).collect();
//! let pressure = vec![2000.0; 40];
//! let rate = vec![0.0; 40];
//! let derivative = vec![Some(10.0); 40]; // flat => radial flow
//! let series = DerivativeSeries::new(time, pressure, rate, derivative).unwrap();
//!
//! let segments = classify(&series, &ClassifyConfig::default()).unwrap();
//! assert_eq!(segments.len(), 1);
//! ```

pub mod config;
pub mod error;
pub mod segment;

pub(crate) mod classify;

use darcy_derivative::DerivativeSeries;
use tracing::debug;

pub use config::{BoundaryPolicy, ClassifyConfig};
pub use error::ClassifyError;
pub use segment::{FlowRegime, FlowRegimeSegment};

/// Classifies the derivative series into flow regime segments.
///
/// Returns an empty list — not an error — when the series is shorter than
/// the configured minimum (default 10 points). The result is a list of
/// non-overlapping, time-ordered segments; `Transition` spans are never
/// materialized.
///
/// # Errors
///
/// Only configuration misuse errors: a zero window or step, an
/// out-of-range span fraction or boundary fraction, or a request for the
/// smoothed derivative column when the series has none.
pub fn classify(
    series: &DerivativeSeries,
    config: &ClassifyConfig,
) -> Result<Vec<FlowRegimeSegment>, ClassifyError> {
    config.validate()?;

    let derivative: &[Option<f64>] = if config.use_smoothed_derivative() {
        series
            .derivative_smoothed()
            .ok_or(ClassifyError::SmoothedColumnMissing)?
    } else {
        series.derivative()
    };

    let n = series.len();
    // A slope needs two points even when min_points is configured lower.
    if n < config.min_points().max(2) {
        debug!(points = n, min = config.min_points(), "series too short to classify");
        return Ok(Vec::new());
    }

    let time = series.time();
    let windows = classify::label_windows(time, derivative, config);
    let segments = classify::merge_windows(&windows, time);

    let total_span = time[n - 1] - time[0];
    let min_span = config.min_span_fraction() * total_span;
    let kept: Vec<FlowRegimeSegment> = segments
        .into_iter()
        .filter(|s| s.span() >= min_span)
        .collect();

    debug!(windows = windows.len(), segments = kept.len(), "classification complete");
    Ok(kept)
}
