//! Validation report structures.

use serde::Serialize;

/// Summary statistics over the scanned rows.
#[derive(Debug, Clone, Serialize)]
pub struct SeriesStats {
    /// Total number of rows scanned.
    pub count: usize,
    /// (min, max) of the valid time values, if any were seen.
    pub time_range: Option<(f64, f64)>,
    /// (min, max) of the valid pressure values, if any were seen.
    pub pressure_range: Option<(f64, f64)>,
    /// Number of rows with a missing or non-numeric time or pressure.
    pub missing: usize,
}

impl SeriesStats {
    pub(crate) fn empty() -> Self {
        Self {
            count: 0,
            time_range: None,
            pressure_range: None,
            missing: 0,
        }
    }
}

/// The outcome of validating a batch of raw rows.
///
/// Data-quality problems never fail the call; they accumulate as issue
/// messages and a score penalty. `is_valid` is `score > 50`, a fixed
/// threshold.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    /// True if the score exceeds the acceptance threshold.
    pub is_valid: bool,
    /// Quality score in 0–100: `100 - 100 * errors / rows`, clamped.
    pub score: f64,
    /// One human-readable message per detected problem class.
    pub issues: Vec<String>,
    /// Summary statistics over the scanned rows.
    pub stats: SeriesStats,
}

impl ValidationReport {
    /// Builds the structural-failure report for a schema missing a required
    /// column.
    ///
    /// Fatal to the run but not a crash: callers get `is_valid = false` and
    /// `score = 0` with the column named in the issue list, and should not
    /// start the pipeline.
    pub fn column_missing(column: &str) -> Self {
        Self {
            is_valid: false,
            score: 0.0,
            issues: vec![format!("required column '{column}' not found in input")],
            stats: SeriesStats::empty(),
        }
    }

    /// Builds the structural-failure report for empty input.
    pub fn empty_input() -> Self {
        Self {
            is_valid: false,
            score: 0.0,
            issues: vec!["input contains no rows".to_string()],
            stats: SeriesStats::empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_missing_report() {
        let report = ValidationReport::column_missing("pressure");
        assert!(!report.is_valid);
        assert_eq!(report.score, 0.0);
        assert_eq!(report.issues.len(), 1);
        assert!(report.issues[0].contains("'pressure'"));
        assert_eq!(report.stats.count, 0);
    }

    #[test]
    fn test_empty_input_report() {
        let report = ValidationReport::empty_input();
        assert!(!report.is_valid);
        assert_eq!(report.score, 0.0);
        assert!(report.stats.time_range.is_none());
        assert!(report.stats.pressure_range.is_none());
    }
}
