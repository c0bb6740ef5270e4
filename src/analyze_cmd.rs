//! Analyze command: run the full pipeline and write the JSON report.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{info, info_span, warn};

use darcy_derivative::differentiate;
use darcy_io::{IoError, read_rows};
use darcy_preprocess::preprocess;
use darcy_regime::classify;
use darcy_validate::{ValidationReport, validate};

use crate::cli::AnalyzeArgs;
use crate::config::DarcyConfig;
use crate::convert;
use crate::report::{AnalysisReport, ConfigSummary, derivative_entries};

/// Run the full analysis pipeline.
pub fn run(args: AnalyzeArgs) -> Result<()> {
    let _cmd = info_span!("analyze").entered();

    let config = load_config(&args.config)?;
    let input = resolve_input(args.input.as_ref(), &config)?;
    let output = args.output.clone().or_else(|| config.io.output.clone());

    // 1. Import
    let rows = match read_rows(&input, &convert::build_column_map(&config.io)) {
        Ok(rows) => rows,
        Err(IoError::MissingColumn { column }) => {
            // Structural failure: emit the zero-score report, then stop.
            let report = ValidationReport::column_missing(&column);
            write_json(output.as_deref(), &serde_json::to_string_pretty(&report)?)?;
            bail!("required column '{column}' not found in {}", input.display());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("failed to read CSV: {}", input.display()));
        }
    };
    info!(path = %input.display(), rows = rows.len(), "input loaded");

    // 2. Validate
    let validation = validate(&rows);
    info!(score = validation.score, valid = validation.is_valid, "validation complete");
    if !validation.is_valid {
        for issue in &validation.issues {
            warn!(%issue, "validation issue");
        }
        if !args.force {
            write_json(
                output.as_deref(),
                &serde_json::to_string_pretty(&validation)?,
            )?;
            bail!(
                "validation failed with score {:.0} (pass --force to analyze anyway)",
                validation.score
            );
        }
    }

    // 3. Preprocess
    let smoothing = convert::build_smoothing_config(&config.smoothing);
    let series =
        preprocess(&rows, &config.exclusions, &smoothing).context("preprocessing failed")?;
    info!(points = series.len(), "series preprocessed");

    // 4. Differentiate
    let derivative_config =
        convert::build_derivative_config(&config.derivative, &config.smoothing, args.l);
    let derivative =
        differentiate(&series, &derivative_config).context("derivative computation failed")?;

    // 5. Classify
    let classify_config = convert::build_classify_config(&config.classify)?;
    let regimes = classify(&derivative, &classify_config).context("classification failed")?;
    for segment in &regimes {
        info!(
            regime = %segment.regime,
            start_time = segment.start_time,
            end_time = segment.end_time,
            "regime identified"
        );
    }

    // 6. Assemble and write
    let report = AnalysisReport {
        config: ConfigSummary {
            n_input_rows: rows.len(),
            n_points: series.len(),
            l: derivative_config.l(),
            smoothing_enabled: smoothing.enabled(),
            n_exclusions: config.exclusions.len(),
        },
        validation,
        derivative: derivative_entries(&derivative),
        regimes,
    };
    write_json(output.as_deref(), &serde_json::to_string_pretty(&report)?)?;

    Ok(())
}

pub(crate) fn load_config(path: &Path) -> Result<DarcyConfig> {
    if !path.exists() {
        // Running without a project file is fine; all settings have defaults.
        return Ok(DarcyConfig::default());
    }
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}

pub(crate) fn resolve_input(arg: Option<&PathBuf>, config: &DarcyConfig) -> Result<PathBuf> {
    arg.cloned()
        .or_else(|| config.io.input.clone())
        .ok_or_else(|| anyhow::anyhow!("no input path: set [io].input in config or use --input"))
}

pub(crate) fn write_json(output: Option<&Path>, json: &str) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("failed to write report: {}", path.display()))?;
            info!(path = %path.display(), "report written");
        }
        None => println!("{json}"),
    }
    Ok(())
}
