use std::path::PathBuf;

use darcy_series::ExclusionRange;
use serde::Deserialize;

/// Top-level Darcy project configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DarcyConfig {
    /// I/O settings.
    #[serde(default)]
    pub io: IoToml,

    /// Time intervals to exclude from analysis.
    #[serde(default)]
    pub exclusions: Vec<ExclusionRange>,

    /// Pressure smoothing settings.
    #[serde(default)]
    pub smoothing: SmoothingToml,

    /// Bourdet derivative settings.
    #[serde(default)]
    pub derivative: DerivativeToml,

    /// Regime classification settings.
    #[serde(default)]
    pub classify: ClassifyToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoToml {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    #[serde(default = "default_time_col")]
    pub time_col: String,
    #[serde(default = "default_pressure_col")]
    pub pressure_col: String,
    #[serde(default)]
    pub rate_col: Option<String>,
}

impl Default for IoToml {
    fn default() -> Self {
        Self {
            input: None,
            output: None,
            time_col: default_time_col(),
            pressure_col: default_pressure_col(),
            rate_col: None,
        }
    }
}

fn default_time_col() -> String {
    "time".to_string()
}
fn default_pressure_col() -> String {
    "pressure".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SmoothingToml {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_window")]
    pub window: usize,
}

impl Default for SmoothingToml {
    fn default() -> Self {
        Self {
            enabled: false,
            window: default_window(),
        }
    }
}

fn default_window() -> usize {
    5
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DerivativeToml {
    #[serde(default = "default_l")]
    pub l: f64,
    /// Differentiate the smoothed pressure column when smoothing is enabled.
    #[serde(default)]
    pub use_smoothed_pressure: bool,
    /// Apply the smoothing window to the derivative column as well.
    #[serde(default)]
    pub smooth_derivative: bool,
}

impl Default for DerivativeToml {
    fn default() -> Self {
        Self {
            l: default_l(),
            use_smoothed_pressure: false,
            smooth_derivative: false,
        }
    }
}

fn default_l() -> f64 {
    0.2
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassifyToml {
    #[serde(default = "default_classify_window")]
    pub window: usize,
    #[serde(default = "default_step")]
    pub step: usize,
    #[serde(default = "default_min_points")]
    pub min_points: usize,
    #[serde(default = "default_min_span_fraction")]
    pub min_span_fraction: f64,
    /// Late-time boundary policy: "second-half", "always", or "time-fraction".
    #[serde(default = "default_boundary")]
    pub boundary: String,
    /// Fraction for the "time-fraction" boundary policy.
    #[serde(default)]
    pub boundary_fraction: Option<f64>,
}

impl Default for ClassifyToml {
    fn default() -> Self {
        Self {
            window: default_classify_window(),
            step: default_step(),
            min_points: default_min_points(),
            min_span_fraction: default_min_span_fraction(),
            boundary: default_boundary(),
            boundary_fraction: None,
        }
    }
}

fn default_classify_window() -> usize {
    5
}
fn default_step() -> usize {
    2
}
fn default_min_points() -> usize {
    10
}
fn default_min_span_fraction() -> f64 {
    0.05
}
fn default_boundary() -> String {
    "second-half".to_string()
}
