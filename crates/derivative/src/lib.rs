//! Bourdet logarithmic pressure derivative.
//!
//! The diagnostic curve of pressure-transient analysis: the derivative of
//! pressure with respect to the natural log of elapsed time, estimated at
//! each point from a pair of neighbors at least `L` log-cycles away on each
//! side and combined as a weighted central difference.
//!
//! # Quick start
//!
//! ```
//! use darcy_derivative::{DerivativeConfig, differentiate};
//! use darcy_series::TestSeries;
//!
//! let time: Vec<f64> = (0..30).map(|i| 10f64.powf(i as f64 * 0.1)).collect();
//! let pressure: Vec<f64> = time.iter().map(|t| 2500.0 - 40.0 * t.ln()).collect();
//! let rate = vec![0.0; 30];
//! let series = TestSeries::new(time, pressure, rate).unwrap();
//!
//! let result = differentiate(&series, &DerivativeConfig::default()).unwrap();
//! assert_eq!(result.len(), 30);
//! ```
//!
//! # Architecture
//!
//! ```text
//! differentiate()
//!   ├─ config.validate()
//!   ├─ precompute ln(time)            (sorted input, stays sorted)
//!   ├─ neighbor_left / neighbor_right (bourdet.rs, binary search)
//!   ├─ derivative_at()                (bourdet.rs, weighted difference)
//!   └─ optional moving_average_opt()  (darcy-preprocess)
//! ```

pub mod config;
pub mod error;
pub mod result;

pub(crate) mod bourdet;

use darcy_preprocess::moving_average_opt;
use darcy_series::TestSeries;
use tracing::debug;

pub use config::{DEFAULT_L, DerivativeConfig};
pub use error::DerivativeError;
pub use result::{DerivativePoint, DerivativeSeries};

/// Computes the Bourdet derivative at every point of the series.
///
/// The output has the same length and order as the input. A point's
/// derivative is `None` when no neighbor at least `l` log-cycles away exists
/// on either side; a series with fewer than 3 points gets `None` everywhere.
/// Reported values are magnitudes, so every `Some` value is non-negative.
///
/// # Errors
///
/// Returns [`DerivativeError::InvalidSpacing`] for a malformed `l`,
/// [`DerivativeError::SmoothedColumnMissing`] if the configuration selects
/// the smoothed pressure column and the series has none, and
/// [`DerivativeError::Smoothing`] for an invalid post-smoothing window.
pub fn differentiate(
    series: &TestSeries,
    config: &DerivativeConfig,
) -> Result<DerivativeSeries, DerivativeError> {
    config.validate()?;

    let pressure: &[f64] = if config.use_smoothed_pressure() {
        series
            .pressure_smoothed()
            .ok_or(DerivativeError::SmoothedColumnMissing)?
    } else {
        series.pressure()
    };

    let n = series.len();
    let derivative = if n < bourdet::MIN_POINTS {
        vec![None; n]
    } else {
        // Series time is strictly increasing, so log_t is sorted and the
        // neighbor lookups can binary-search it.
        let log_t: Vec<f64> = series.time().iter().map(|&t| t.ln()).collect();
        (0..n)
            .map(|i| bourdet::derivative_at(&log_t, pressure, i, config.l()))
            .collect()
    };

    let computed = derivative.iter().filter(|d| d.is_some()).count();
    debug!(
        points = n,
        computed,
        l = config.l(),
        "derivative computation complete"
    );

    let result = DerivativeSeries::new(
        series.time().to_vec(),
        pressure.to_vec(),
        series.rate().to_vec(),
        derivative,
    )?;
    if config.smoothing().enabled() {
        let smoothed = moving_average_opt(result.derivative(), config.smoothing().window());
        return Ok(result.with_derivative_smoothed(smoothed)?);
    }
    Ok(result)
}
