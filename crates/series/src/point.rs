//! Measurement record types.

/// A single clean well-test measurement.
///
/// `time` is elapsed hours since the start of the flow or shut-in period and
/// is always positive in a constructed [`crate::TestSeries`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TestPoint {
    /// Elapsed time in hours.
    pub time: f64,
    /// Pressure measurement.
    pub pressure: f64,
    /// Flow rate; 0.0 when the import carried no rate column.
    pub rate: f64,
}

impl TestPoint {
    /// Creates a point with the given time and pressure and zero rate.
    pub fn new(time: f64, pressure: f64) -> Self {
        Self {
            time,
            pressure,
            rate: 0.0,
        }
    }

    /// Sets the flow rate.
    pub fn with_rate(mut self, rate: f64) -> Self {
        self.rate = rate;
        self
    }
}

/// An imported record before validation.
///
/// Fields are `None` when the source cell was absent or non-numeric. The
/// validator counts such rows; the preprocessor drops them.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RawRow {
    /// Elapsed time in hours, if parseable.
    pub time: Option<f64>,
    /// Pressure, if parseable.
    pub pressure: Option<f64>,
    /// Flow rate, if present and parseable.
    pub rate: Option<f64>,
}

impl RawRow {
    /// Creates a row with the given time and pressure and no rate.
    pub fn new(time: f64, pressure: f64) -> Self {
        Self {
            time: Some(time),
            pressure: Some(pressure),
            rate: None,
        }
    }

    /// Sets the flow rate.
    pub fn with_rate(mut self, rate: f64) -> Self {
        self.rate = Some(rate);
        self
    }

    /// Returns true if both `time` and `pressure` hold finite values.
    pub fn is_usable(&self) -> bool {
        matches!(self.time, Some(t) if t.is_finite())
            && matches!(self.pressure, Some(p) if p.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_defaults() {
        let p = TestPoint::new(1.0, 2500.0);
        assert_eq!(p.time, 1.0);
        assert_eq!(p.pressure, 2500.0);
        assert_eq!(p.rate, 0.0);

        let p = p.with_rate(150.0);
        assert_eq!(p.rate, 150.0);
    }

    #[test]
    fn test_raw_row_usable() {
        assert!(RawRow::new(1.0, 2500.0).is_usable());
        assert!(RawRow::new(1.0, 2500.0).with_rate(10.0).is_usable());
    }

    #[test]
    fn test_raw_row_unusable() {
        let missing_time = RawRow {
            time: None,
            pressure: Some(2500.0),
            rate: None,
        };
        assert!(!missing_time.is_usable());

        let missing_pressure = RawRow {
            time: Some(1.0),
            pressure: None,
            rate: None,
        };
        assert!(!missing_pressure.is_usable());

        let nan_time = RawRow::new(f64::NAN, 2500.0);
        assert!(!nan_time.is_usable());

        let inf_pressure = RawRow::new(1.0, f64::INFINITY);
        assert!(!inf_pressure.is_usable());
    }

    #[test]
    fn test_raw_row_default() {
        let row = RawRow::default();
        assert_eq!(row.time, None);
        assert_eq!(row.pressure, None);
        assert_eq!(row.rate, None);
        assert!(!row.is_usable());
    }
}
