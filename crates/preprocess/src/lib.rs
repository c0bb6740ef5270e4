//! Preprocessing of raw well-test rows into a clean [`TestSeries`].
//!
//! Steps, in order:
//!
//! 1. drop rows with missing or non-finite `time`/`pressure`;
//! 2. drop rows with `time <= 0` (the derivative is taken with respect to
//!    `ln(time)`);
//! 3. sort ascending by time (stable), dropping duplicate timestamps
//!    (keep-first);
//! 4. drop every point inside any [`ExclusionRange`] (inclusive bounds);
//! 5. optionally write a moving-average `pressure_smoothed` sibling column —
//!    the original pressure column is never overwritten.
//!
//! The output always satisfies the [`TestSeries`] invariants, and the whole
//! step is idempotent: re-running with the same configuration on rows built
//! from an already-clean series drops nothing further.

pub mod config;
pub mod error;
pub mod smooth;

use std::cmp::Ordering;

use darcy_series::{ExclusionRange, RawRow, TestSeries};
use tracing::debug;

pub use config::SmoothingConfig;
pub use error::PreprocessError;
pub use smooth::{moving_average, moving_average_opt};

/// Cleans raw rows into a sorted, exclusion-filtered [`TestSeries`].
///
/// # Errors
///
/// Returns [`PreprocessError::InvalidWindow`] if smoothing is enabled with
/// an even or too-small window, and [`PreprocessError::Series`] if an
/// exclusion range is inverted or non-finite. Data problems in the rows
/// themselves never error; unusable rows are dropped.
pub fn preprocess(
    rows: &[RawRow],
    exclusions: &[ExclusionRange],
    smoothing: &SmoothingConfig,
) -> Result<TestSeries, PreprocessError> {
    smoothing.validate()?;
    for range in exclusions {
        range.validate()?;
    }

    // Keep only rows with finite time > 0 and finite pressure.
    let mut kept: Vec<(f64, f64, f64)> = rows
        .iter()
        .filter(|r| r.is_usable())
        .filter_map(|r| {
            let t = r.time?;
            let p = r.pressure?;
            if t <= 0.0 {
                return None;
            }
            let q = r.rate.filter(|q| q.is_finite()).unwrap_or(0.0);
            Some((t, p, q))
        })
        .collect();
    let usable = kept.len();

    kept.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
    kept.dedup_by(|next, prev| next.0 == prev.0);
    let deduped = kept.len();

    kept.retain(|&(t, _, _)| !exclusions.iter().any(|range| range.contains(t)));

    debug!(
        input = rows.len(),
        usable,
        duplicates = usable - deduped,
        excluded = deduped - kept.len(),
        retained = kept.len(),
        "preprocessing complete"
    );

    let mut time = Vec::with_capacity(kept.len());
    let mut pressure = Vec::with_capacity(kept.len());
    let mut rate = Vec::with_capacity(kept.len());
    for (t, p, q) in kept {
        time.push(t);
        pressure.push(p);
        rate.push(q);
    }

    let series = TestSeries::new(time, pressure, rate)?;
    if smoothing.enabled() {
        let smoothed = moving_average(series.pressure(), smoothing.window());
        return Ok(series.with_pressure_smoothed(smoothed)?);
    }
    Ok(series)
}
