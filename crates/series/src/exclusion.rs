//! User-flagged time intervals to drop from a series.

use serde::Deserialize;

use crate::error::SeriesError;

/// A closed interval of elapsed time to exclude from analysis.
///
/// Rows whose `time` falls within `[start, end]` (inclusive bounds) are
/// dropped during preprocessing. Multiple ranges are OR-combined: a point is
/// dropped if any range contains it.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExclusionRange {
    /// Start of the interval (hours, inclusive).
    pub start: f64,
    /// End of the interval (hours, inclusive).
    pub end: f64,
}

impl ExclusionRange {
    /// Creates a new exclusion range.
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Validates this range.
    ///
    /// Returns an error if either bound is non-finite or `start > end`.
    pub fn validate(&self) -> Result<(), SeriesError> {
        if !self.start.is_finite() || !self.end.is_finite() || self.start > self.end {
            return Err(SeriesError::InvalidExclusionRange {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    /// Returns true if `time` falls within this range (inclusive bounds).
    pub fn contains(&self, time: f64) -> bool {
        time >= self.start && time <= self.end
    }
}
