//! Quality validation of raw well-test rows.
//!
//! A single pass over the imported rows counts three problem classes:
//!
//! - missing or non-numeric `time`/`pressure` values;
//! - `time` values that do not increase past the previous valid time;
//! - negative `pressure` values.
//!
//! The total error count maps to a 0–100 quality score
//! (`100 - 100 * errors / rows`, clamped); a series is accepted when the
//! score exceeds 50. Validation is pure and infallible: data problems are
//! report content, never `Err`.

mod report;

use darcy_series::RawRow;
use tracing::debug;

pub use report::{SeriesStats, ValidationReport};

/// Acceptance threshold on the quality score.
const SCORE_THRESHOLD: f64 = 50.0;

/// Validates a batch of raw rows.
///
/// Empty input yields the structural failure report (`is_valid = false`,
/// `score = 0`). Otherwise every row is scanned once and the report carries
/// a score, one issue message per problem class seen, and min/max stats.
pub fn validate(rows: &[RawRow]) -> ValidationReport {
    if rows.is_empty() {
        return ValidationReport::empty_input();
    }

    let mut missing = 0usize;
    let mut non_monotonic = 0usize;
    let mut negative_pressure = 0usize;

    let mut time_range: Option<(f64, f64)> = None;
    let mut pressure_range: Option<(f64, f64)> = None;
    let mut prev_valid_time: Option<f64> = None;

    for row in rows {
        let time = row.time.filter(|t| t.is_finite());
        let pressure = row.pressure.filter(|p| p.is_finite());

        if time.is_none() || pressure.is_none() {
            missing += 1;
        }

        if let Some(t) = time {
            if let Some(prev) = prev_valid_time {
                if t <= prev {
                    non_monotonic += 1;
                }
            }
            prev_valid_time = Some(t);
            time_range = Some(match time_range {
                Some((lo, hi)) => (lo.min(t), hi.max(t)),
                None => (t, t),
            });
        }

        if let Some(p) = pressure {
            if p < 0.0 {
                negative_pressure += 1;
            }
            pressure_range = Some(match pressure_range {
                Some((lo, hi)) => (lo.min(p), hi.max(p)),
                None => (p, p),
            });
        }
    }

    let mut issues = Vec::new();
    if missing > 0 {
        issues.push(format!(
            "{missing} row(s) with missing or non-numeric time/pressure"
        ));
    }
    if non_monotonic > 0 {
        issues.push(format!(
            "{non_monotonic} time value(s) not increasing past the previous valid time"
        ));
    }
    if negative_pressure > 0 {
        issues.push(format!("{negative_pressure} negative pressure value(s)"));
    }

    let errors = missing + non_monotonic + negative_pressure;
    let score = (100.0 - 100.0 * errors as f64 / rows.len() as f64).clamp(0.0, 100.0);
    let is_valid = score > SCORE_THRESHOLD;

    debug!(
        rows = rows.len(),
        missing, non_monotonic, negative_pressure, score, "validation scan complete"
    );

    ValidationReport {
        is_valid,
        score,
        issues,
        stats: SeriesStats {
            count: rows.len(),
            time_range,
            pressure_range,
            missing,
        },
    }
}
