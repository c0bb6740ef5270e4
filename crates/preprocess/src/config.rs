//! Smoothing configuration.

use crate::error::PreprocessError;

/// Configuration for simple-moving-average smoothing.
///
/// Disabled by default. When enabled, the window must be odd and at least 3
/// so the average is centred on the point it replaces.
///
/// # Example
///
/// ```
/// use darcy_preprocess::SmoothingConfig;
///
/// let config = SmoothingConfig::default().with_enabled(true).with_window(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmoothingConfig {
    /// Whether smoothing is applied at all.
    enabled: bool,
    /// Window size in points (odd, >= 3).
    window: usize,
}

impl Default for SmoothingConfig {
    /// Returns the default configuration: disabled, window 5.
    fn default() -> Self {
        Self {
            enabled: false,
            window: 5,
        }
    }
}

impl SmoothingConfig {
    /// Enables or disables smoothing.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Sets the window size.
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    /// Returns true if smoothing is enabled.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Returns the window size.
    pub fn window(&self) -> usize {
        self.window
    }

    /// Validates this configuration.
    ///
    /// A disabled configuration is always valid. When enabled, the window
    /// must be odd and at least 3.
    pub fn validate(&self) -> Result<(), PreprocessError> {
        if self.enabled && (self.window < 3 || self.window % 2 == 0) {
            return Err(PreprocessError::InvalidWindow {
                window: self.window,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = SmoothingConfig::default();
        assert!(!cfg.enabled());
        assert_eq!(cfg.window(), 5);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_builder_chaining() {
        let cfg = SmoothingConfig::default().with_enabled(true).with_window(9);
        assert!(cfg.enabled());
        assert_eq!(cfg.window(), 9);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_validate_even_window() {
        let result = SmoothingConfig::default()
            .with_enabled(true)
            .with_window(4)
            .validate();
        assert!(matches!(
            result.unwrap_err(),
            PreprocessError::InvalidWindow { window: 4 }
        ));
    }

    #[test]
    fn test_validate_window_too_small() {
        let result = SmoothingConfig::default()
            .with_enabled(true)
            .with_window(1)
            .validate();
        assert!(matches!(
            result.unwrap_err(),
            PreprocessError::InvalidWindow { window: 1 }
        ));
    }

    #[test]
    fn test_disabled_config_skips_window_check() {
        let cfg = SmoothingConfig::default().with_window(2);
        assert!(cfg.validate().is_ok());
    }
}
