//! Configuration for regime classification.

use crate::error::ClassifyError;

/// Policy deciding whether an anchor index counts as "late time".
///
/// Boundary regimes (closed or constant-pressure) are only plausible once
/// the transient has had time to reach the reservoir edge. The stock
/// heuristic is positional — the second half of the series — but it is a
/// policy, not physics, so alternative strategies plug in here without
/// touching the classifier loop.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum BoundaryPolicy {
    /// Anchor must lie in the second half of the series (`index >= len / 2`).
    #[default]
    SecondHalf,
    /// Anchor must lie past the given fraction of the series
    /// (`index >= len * fraction`).
    TimeFraction(f64),
    /// Boundary regimes are allowed anywhere.
    Always,
}

impl BoundaryPolicy {
    /// Returns true if `index` counts as late time in a series of `len`
    /// points.
    pub fn is_late(&self, index: usize, len: usize) -> bool {
        match self {
            BoundaryPolicy::SecondHalf => index >= len / 2,
            BoundaryPolicy::TimeFraction(fraction) => index as f64 >= len as f64 * fraction,
            BoundaryPolicy::Always => true,
        }
    }

    fn validate(&self) -> Result<(), ClassifyError> {
        if let BoundaryPolicy::TimeFraction(fraction) = self {
            if !fraction.is_finite() || !(0.0..=1.0).contains(fraction) {
                return Err(ClassifyError::InvalidBoundaryFraction {
                    fraction: *fraction,
                });
            }
        }
        Ok(())
    }
}

/// Configuration for the regime classifier.
///
/// # Example
///
/// ```
/// use darcy_regime::{BoundaryPolicy, ClassifyConfig};
///
/// let config = ClassifyConfig::default().with_boundary(BoundaryPolicy::TimeFraction(0.6));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct ClassifyConfig {
    /// Slope window size in points.
    window: usize,
    /// Anchor step in points.
    step: usize,
    /// Minimum series length; shorter input yields no segments.
    min_points: usize,
    /// Segments spanning less than this fraction of the total time range are
    /// discarded as noise.
    min_span_fraction: f64,
    /// Late-time predicate for boundary regimes.
    boundary: BoundaryPolicy,
    /// Classify the smoothed derivative column instead of the raw one.
    use_smoothed_derivative: bool,
}

impl Default for ClassifyConfig {
    /// Returns the default configuration: window 5, step 2, minimum 10
    /// points, 5% minimum span, second-half boundary policy, raw derivative.
    fn default() -> Self {
        Self {
            window: 5,
            step: 2,
            min_points: 10,
            min_span_fraction: 0.05,
            boundary: BoundaryPolicy::SecondHalf,
            use_smoothed_derivative: false,
        }
    }
}

impl ClassifyConfig {
    /// Sets the slope window size.
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    /// Sets the anchor step.
    pub fn with_step(mut self, step: usize) -> Self {
        self.step = step;
        self
    }

    /// Sets the minimum series length.
    pub fn with_min_points(mut self, min_points: usize) -> Self {
        self.min_points = min_points;
        self
    }

    /// Sets the minimum segment span as a fraction of the total time range.
    pub fn with_min_span_fraction(mut self, fraction: f64) -> Self {
        self.min_span_fraction = fraction;
        self
    }

    /// Sets the late-time boundary policy.
    pub fn with_boundary(mut self, boundary: BoundaryPolicy) -> Self {
        self.boundary = boundary;
        self
    }

    /// Selects the smoothed derivative column as the classifier input.
    pub fn with_use_smoothed_derivative(mut self, use_smoothed: bool) -> Self {
        self.use_smoothed_derivative = use_smoothed;
        self
    }

    /// Returns the slope window size.
    pub fn window(&self) -> usize {
        self.window
    }

    /// Returns the anchor step.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Returns the minimum series length.
    pub fn min_points(&self) -> usize {
        self.min_points
    }

    /// Returns the minimum span fraction.
    pub fn min_span_fraction(&self) -> f64 {
        self.min_span_fraction
    }

    /// Returns the boundary policy.
    pub fn boundary(&self) -> &BoundaryPolicy {
        &self.boundary
    }

    /// Returns true if the smoothed derivative column is the input.
    pub fn use_smoothed_derivative(&self) -> bool {
        self.use_smoothed_derivative
    }

    /// Validates this configuration.
    pub fn validate(&self) -> Result<(), ClassifyError> {
        if self.window == 0 {
            return Err(ClassifyError::InvalidWindow {
                window: self.window,
            });
        }
        if self.step == 0 {
            return Err(ClassifyError::InvalidStep { step: self.step });
        }
        if !self.min_span_fraction.is_finite() || !(0.0..1.0).contains(&self.min_span_fraction) {
            return Err(ClassifyError::InvalidSpanFraction {
                fraction: self.min_span_fraction,
            });
        }
        self.boundary.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = ClassifyConfig::default();
        assert_eq!(cfg.window(), 5);
        assert_eq!(cfg.step(), 2);
        assert_eq!(cfg.min_points(), 10);
        assert!((cfg.min_span_fraction() - 0.05).abs() < f64::EPSILON);
        assert_eq!(cfg.boundary(), &BoundaryPolicy::SecondHalf);
        assert!(!cfg.use_smoothed_derivative());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_builder_chaining() {
        let cfg = ClassifyConfig::default()
            .with_window(7)
            .with_step(3)
            .with_min_points(20)
            .with_min_span_fraction(0.1)
            .with_boundary(BoundaryPolicy::Always)
            .with_use_smoothed_derivative(true);
        assert_eq!(cfg.window(), 7);
        assert_eq!(cfg.step(), 3);
        assert_eq!(cfg.min_points(), 20);
        assert_eq!(cfg.boundary(), &BoundaryPolicy::Always);
        assert!(cfg.use_smoothed_derivative());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_window() {
        let result = ClassifyConfig::default().with_window(0).validate();
        assert!(matches!(
            result.unwrap_err(),
            ClassifyError::InvalidWindow { window: 0 }
        ));
    }

    #[test]
    fn test_validate_zero_step() {
        let result = ClassifyConfig::default().with_step(0).validate();
        assert!(matches!(
            result.unwrap_err(),
            ClassifyError::InvalidStep { step: 0 }
        ));
    }

    #[test]
    fn test_validate_span_fraction_bounds() {
        assert!(ClassifyConfig::default()
            .with_min_span_fraction(0.0)
            .validate()
            .is_ok());
        assert!(ClassifyConfig::default()
            .with_min_span_fraction(1.0)
            .validate()
            .is_err());
        assert!(ClassifyConfig::default()
            .with_min_span_fraction(-0.1)
            .validate()
            .is_err());
        assert!(ClassifyConfig::default()
            .with_min_span_fraction(f64::NAN)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_boundary_fraction() {
        let result = ClassifyConfig::default()
            .with_boundary(BoundaryPolicy::TimeFraction(1.5))
            .validate();
        assert!(matches!(
            result.unwrap_err(),
            ClassifyError::InvalidBoundaryFraction { .. }
        ));
    }

    #[test]
    fn test_second_half_policy() {
        let policy = BoundaryPolicy::SecondHalf;
        assert!(!policy.is_late(0, 10));
        assert!(!policy.is_late(4, 10));
        assert!(policy.is_late(5, 10));
        assert!(policy.is_late(9, 10));
    }

    #[test]
    fn test_time_fraction_policy() {
        let policy = BoundaryPolicy::TimeFraction(0.75);
        assert!(!policy.is_late(7, 10));
        assert!(policy.is_late(8, 10));
    }

    #[test]
    fn test_always_policy() {
        assert!(BoundaryPolicy::Always.is_late(0, 10));
    }
}
