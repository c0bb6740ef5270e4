//! Conversion from TOML configuration to library configs.

use anyhow::{Result, bail};

use darcy_derivative::DerivativeConfig;
use darcy_io::ColumnMap;
use darcy_preprocess::SmoothingConfig;
use darcy_regime::{BoundaryPolicy, ClassifyConfig};

use crate::config::{ClassifyToml, DerivativeToml, IoToml, SmoothingToml};

/// Builds the CSV column mapping.
pub fn build_column_map(io: &IoToml) -> ColumnMap {
    let mut map = ColumnMap::default()
        .with_time(&io.time_col)
        .with_pressure(&io.pressure_col);
    if let Some(rate_col) = &io.rate_col {
        map = map.with_rate(rate_col);
    }
    map
}

/// Builds the pressure smoothing config.
pub fn build_smoothing_config(smoothing: &SmoothingToml) -> SmoothingConfig {
    SmoothingConfig::default()
        .with_enabled(smoothing.enabled)
        .with_window(smoothing.window)
}

/// Builds the derivative config. `l_override` comes from the CLI and wins
/// over the config file.
pub fn build_derivative_config(
    derivative: &DerivativeToml,
    smoothing: &SmoothingToml,
    l_override: Option<f64>,
) -> DerivativeConfig {
    let mut config = DerivativeConfig::default()
        .with_l(l_override.unwrap_or(derivative.l))
        .with_use_smoothed_pressure(derivative.use_smoothed_pressure && smoothing.enabled);
    if derivative.smooth_derivative {
        config = config.with_smoothing(
            SmoothingConfig::default()
                .with_enabled(true)
                .with_window(smoothing.window),
        );
    }
    config
}

/// Builds the classifier config.
pub fn build_classify_config(classify: &ClassifyToml) -> Result<ClassifyConfig> {
    let boundary = match classify.boundary.as_str() {
        "second-half" => BoundaryPolicy::SecondHalf,
        "always" => BoundaryPolicy::Always,
        "time-fraction" => {
            let Some(fraction) = classify.boundary_fraction else {
                bail!("boundary = \"time-fraction\" requires classify.boundary_fraction");
            };
            BoundaryPolicy::TimeFraction(fraction)
        }
        other => bail!(
            "unknown boundary policy '{other}' (expected \"second-half\", \"always\", or \"time-fraction\")"
        ),
    };

    Ok(ClassifyConfig::default()
        .with_window(classify.window)
        .with_step(classify.step)
        .with_min_points(classify.min_points)
        .with_min_span_fraction(classify.min_span_fraction)
        .with_boundary(boundary))
}
