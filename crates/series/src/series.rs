//! Column-oriented test series with enforced invariants.

use crate::error::SeriesError;
use crate::point::TestPoint;

/// An ordered pressure/rate series from a single well test.
///
/// Stored column-oriented: parallel vectors of time, pressure, and rate,
/// plus an optional smoothed-pressure sibling column written by the
/// preprocessor (the original pressure column is never overwritten).
///
/// Invariants, enforced by [`TestSeries::new`]:
///
/// - all columns have equal length;
/// - every time is finite and strictly positive;
/// - time is strictly increasing (no duplicate timestamps);
/// - every pressure and rate value is finite.
///
/// An empty series is valid; the invariants hold vacuously.
#[derive(Debug, Clone, PartialEq)]
pub struct TestSeries {
    time: Vec<f64>,
    pressure: Vec<f64>,
    rate: Vec<f64>,
    pressure_smoothed: Option<Vec<f64>>,
}

impl TestSeries {
    /// Creates a new series from its columns, checking all invariants.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::ColumnLengthMismatch`] if the columns differ in
    /// length, [`SeriesError::NonPositiveTime`] or
    /// [`SeriesError::NonMonotonicTime`] if the time column violates the
    /// ordering invariant, and [`SeriesError::NonFiniteValue`] if any value
    /// is NaN or infinite.
    pub fn new(time: Vec<f64>, pressure: Vec<f64>, rate: Vec<f64>) -> Result<Self, SeriesError> {
        let n = time.len();
        if pressure.len() != n {
            return Err(SeriesError::ColumnLengthMismatch {
                column: "pressure",
                len: pressure.len(),
                expected: n,
            });
        }
        if rate.len() != n {
            return Err(SeriesError::ColumnLengthMismatch {
                column: "rate",
                len: rate.len(),
                expected: n,
            });
        }

        for (i, &t) in time.iter().enumerate() {
            if !t.is_finite() {
                return Err(SeriesError::NonFiniteValue {
                    column: "time",
                    index: i,
                });
            }
            if t <= 0.0 {
                return Err(SeriesError::NonPositiveTime { index: i, value: t });
            }
            if i > 0 && t <= time[i - 1] {
                return Err(SeriesError::NonMonotonicTime {
                    index: i,
                    previous: time[i - 1],
                    value: t,
                });
            }
        }
        for (i, &p) in pressure.iter().enumerate() {
            if !p.is_finite() {
                return Err(SeriesError::NonFiniteValue {
                    column: "pressure",
                    index: i,
                });
            }
        }
        for (i, &q) in rate.iter().enumerate() {
            if !q.is_finite() {
                return Err(SeriesError::NonFiniteValue {
                    column: "rate",
                    index: i,
                });
            }
        }

        Ok(Self {
            time,
            pressure,
            rate,
            pressure_smoothed: None,
        })
    }

    /// Attaches a smoothed-pressure sibling column.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::ColumnLengthMismatch`] if the column length
    /// does not match, or [`SeriesError::NonFiniteValue`] if it contains
    /// NaN or infinity.
    pub fn with_pressure_smoothed(mut self, smoothed: Vec<f64>) -> Result<Self, SeriesError> {
        if smoothed.len() != self.time.len() {
            return Err(SeriesError::ColumnLengthMismatch {
                column: "pressure_smoothed",
                len: smoothed.len(),
                expected: self.time.len(),
            });
        }
        if let Some(i) = smoothed.iter().position(|v| !v.is_finite()) {
            return Err(SeriesError::NonFiniteValue {
                column: "pressure_smoothed",
                index: i,
            });
        }
        self.pressure_smoothed = Some(smoothed);
        Ok(self)
    }

    /// Returns the number of points.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// Returns true if the series has no points.
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Returns the time column (hours, strictly increasing).
    pub fn time(&self) -> &[f64] {
        &self.time
    }

    /// Returns the pressure column.
    pub fn pressure(&self) -> &[f64] {
        &self.pressure
    }

    /// Returns the rate column.
    pub fn rate(&self) -> &[f64] {
        &self.rate
    }

    /// Returns the smoothed-pressure column, if smoothing was applied.
    pub fn pressure_smoothed(&self) -> Option<&[f64]> {
        self.pressure_smoothed.as_deref()
    }

    /// Returns the point at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn point(&self, index: usize) -> TestPoint {
        TestPoint {
            time: self.time[index],
            pressure: self.pressure[index],
            rate: self.rate[index],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns() -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        (
            vec![1.0, 2.0, 4.0],
            vec![2500.0, 2400.0, 2350.0],
            vec![0.0, 0.0, 0.0],
        )
    }

    #[test]
    fn test_new_valid() {
        let (t, p, q) = columns();
        let series = TestSeries::new(t, p, q).unwrap();
        assert_eq!(series.len(), 3);
        assert!(!series.is_empty());
        assert_eq!(series.time(), &[1.0, 2.0, 4.0]);
        assert_eq!(series.point(1).pressure, 2400.0);
        assert!(series.pressure_smoothed().is_none());
    }

    #[test]
    fn test_new_empty_is_valid() {
        let series = TestSeries::new(vec![], vec![], vec![]).unwrap();
        assert!(series.is_empty());
        assert_eq!(series.len(), 0);
    }

    #[test]
    fn test_length_mismatch() {
        let result = TestSeries::new(vec![1.0, 2.0], vec![10.0], vec![0.0, 0.0]);
        assert!(matches!(
            result.unwrap_err(),
            SeriesError::ColumnLengthMismatch {
                column: "pressure",
                len: 1,
                expected: 2,
            }
        ));
    }

    #[test]
    fn test_zero_time_rejected() {
        let result = TestSeries::new(vec![0.0, 1.0], vec![1.0, 2.0], vec![0.0, 0.0]);
        assert!(matches!(
            result.unwrap_err(),
            SeriesError::NonPositiveTime { index: 0, .. }
        ));
    }

    #[test]
    fn test_duplicate_time_rejected() {
        let result = TestSeries::new(vec![1.0, 1.0], vec![1.0, 2.0], vec![0.0, 0.0]);
        assert!(matches!(
            result.unwrap_err(),
            SeriesError::NonMonotonicTime { index: 1, .. }
        ));
    }

    #[test]
    fn test_decreasing_time_rejected() {
        let result = TestSeries::new(vec![2.0, 1.0], vec![1.0, 2.0], vec![0.0, 0.0]);
        assert!(matches!(
            result.unwrap_err(),
            SeriesError::NonMonotonicTime {
                index: 1,
                previous,
                value,
            } if previous == 2.0 && value == 1.0
        ));
    }

    #[test]
    fn test_nan_pressure_rejected() {
        let result = TestSeries::new(vec![1.0, 2.0], vec![1.0, f64::NAN], vec![0.0, 0.0]);
        assert!(matches!(
            result.unwrap_err(),
            SeriesError::NonFiniteValue {
                column: "pressure",
                index: 1,
            }
        ));
    }

    #[test]
    fn test_with_pressure_smoothed() {
        let (t, p, q) = columns();
        let series = TestSeries::new(t, p, q)
            .unwrap()
            .with_pressure_smoothed(vec![2490.0, 2420.0, 2360.0])
            .unwrap();
        assert_eq!(series.pressure_smoothed().unwrap(), &[2490.0, 2420.0, 2360.0]);
        // original column untouched
        assert_eq!(series.pressure(), &[2500.0, 2400.0, 2350.0]);
    }

    #[test]
    fn test_with_pressure_smoothed_length_mismatch() {
        let (t, p, q) = columns();
        let result = TestSeries::new(t, p, q)
            .unwrap()
            .with_pressure_smoothed(vec![1.0]);
        assert!(matches!(
            result.unwrap_err(),
            SeriesError::ColumnLengthMismatch {
                column: "pressure_smoothed",
                ..
            }
        ));
    }
}
