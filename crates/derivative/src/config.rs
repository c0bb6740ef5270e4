//! Configuration for derivative computation.

use darcy_preprocess::SmoothingConfig;

use crate::error::DerivativeError;

/// Default Bourdet log-spacing parameter.
pub const DEFAULT_L: f64 = 0.2;

/// Configuration for the Bourdet derivative.
///
/// `l` is the minimum spacing, in natural-log cycles of elapsed time,
/// between a point and the neighbors used for its weighted central
/// difference. Larger values smooth more but lose resolution; the
/// recommended range is 0.1–0.5.
///
/// # Example
///
/// ```
/// use darcy_derivative::DerivativeConfig;
///
/// let config = DerivativeConfig::default().with_l(0.3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct DerivativeConfig {
    /// Minimum log-cycle spacing to the differentiation neighbors.
    l: f64,
    /// Differentiate the smoothed pressure column instead of the raw one.
    use_smoothed_pressure: bool,
    /// Optional post-smoothing of the derivative column.
    smoothing: SmoothingConfig,
}

impl Default for DerivativeConfig {
    /// Returns the default configuration: `l = 0.2`, raw pressure, no
    /// derivative smoothing.
    fn default() -> Self {
        Self {
            l: DEFAULT_L,
            use_smoothed_pressure: false,
            smoothing: SmoothingConfig::default(),
        }
    }
}

impl DerivativeConfig {
    /// Sets the log-spacing parameter.
    pub fn with_l(mut self, l: f64) -> Self {
        self.l = l;
        self
    }

    /// Selects the smoothed pressure column as the differentiation input.
    pub fn with_use_smoothed_pressure(mut self, use_smoothed: bool) -> Self {
        self.use_smoothed_pressure = use_smoothed;
        self
    }

    /// Sets the post-smoothing applied to the derivative column.
    pub fn with_smoothing(mut self, smoothing: SmoothingConfig) -> Self {
        self.smoothing = smoothing;
        self
    }

    /// Returns the log-spacing parameter.
    pub fn l(&self) -> f64 {
        self.l
    }

    /// Returns true if the smoothed pressure column is the input.
    pub fn use_smoothed_pressure(&self) -> bool {
        self.use_smoothed_pressure
    }

    /// Returns the derivative post-smoothing configuration.
    pub fn smoothing(&self) -> &SmoothingConfig {
        &self.smoothing
    }

    /// Validates this configuration.
    ///
    /// Returns an error if `l` is non-finite or not positive, or the
    /// smoothing window is invalid.
    pub fn validate(&self) -> Result<(), DerivativeError> {
        if !self.l.is_finite() || self.l <= 0.0 {
            return Err(DerivativeError::InvalidSpacing { l: self.l });
        }
        self.smoothing.validate()?;
        Ok(())
    }
}
