//! Result types for derivative computation.

use serde::Serialize;

use darcy_series::SeriesError;

/// A single point of the derivative curve: the input measurement augmented
/// with its derivative estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivativePoint {
    /// Elapsed time in hours.
    pub time: f64,
    /// Pressure used for differentiation at this point.
    pub pressure: f64,
    /// Flow rate carried over from the input series.
    pub rate: f64,
    /// Magnitude of the Bourdet derivative, or `None` when no valid
    /// neighbor pair exists.
    pub derivative: Option<f64>,
}

/// The derivative curve, column-oriented like the input series.
///
/// Same length and order as the preprocessed series it was computed from.
/// Every derivative value is either `None` or non-negative (the standard
/// convention plots the derivative magnitude).
#[derive(Debug, Clone, PartialEq)]
pub struct DerivativeSeries {
    time: Vec<f64>,
    pressure: Vec<f64>,
    rate: Vec<f64>,
    derivative: Vec<Option<f64>>,
    derivative_smoothed: Option<Vec<Option<f64>>>,
}

impl DerivativeSeries {
    /// Creates a derivative series from its columns.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::ColumnLengthMismatch`] if the columns differ
    /// in length.
    pub fn new(
        time: Vec<f64>,
        pressure: Vec<f64>,
        rate: Vec<f64>,
        derivative: Vec<Option<f64>>,
    ) -> Result<Self, SeriesError> {
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
        if derivative.len() != n {
            return Err(SeriesError::ColumnLengthMismatch {
                column: "derivative",
                len: derivative.len(),
                expected: n,
            });
        }
        Ok(Self {
            time,
            pressure,
            rate,
            derivative,
            derivative_smoothed: None,
        })
    }

    /// Attaches a smoothed-derivative sibling column.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::ColumnLengthMismatch`] if the column length
    /// does not match.
    pub fn with_derivative_smoothed(
        mut self,
        smoothed: Vec<Option<f64>>,
    ) -> Result<Self, SeriesError> {
        if smoothed.len() != self.time.len() {
            return Err(SeriesError::ColumnLengthMismatch {
                column: "derivative_smoothed",
                len: smoothed.len(),
                expected: self.time.len(),
            });
        }
        self.derivative_smoothed = Some(smoothed);
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

    /// Returns the time column.
    pub fn time(&self) -> &[f64] {
        &self.time
    }

    /// Returns the pressure column used for differentiation.
    pub fn pressure(&self) -> &[f64] {
        &self.pressure
    }

    /// Returns the rate column carried over from the input series.
    pub fn rate(&self) -> &[f64] {
        &self.rate
    }

    /// Returns the derivative column.
    pub fn derivative(&self) -> &[Option<f64>] {
        &self.derivative
    }

    /// Returns the smoothed-derivative column, if post-smoothing was applied.
    pub fn derivative_smoothed(&self) -> Option<&[Option<f64>]> {
        self.derivative_smoothed.as_deref()
    }

    /// Returns the point at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn point(&self, index: usize) -> DerivativePoint {
        DerivativePoint {
            time: self.time[index],
            pressure: self.pressure[index],
            rate: self.rate[index],
            derivative: self.derivative[index],
        }
    }

    /// Returns an iterator over the derivative points.
    pub fn points(&self) -> impl Iterator<Item = DerivativePoint> + '_ {
        (0..self.len()).map(move |i| self.point(i))
    }
}
