//! Validate command: print the validation report for an input series.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use darcy_io::{IoError, read_rows};
use darcy_validate::{ValidationReport, validate};

use crate::analyze_cmd::{load_config, resolve_input};
use crate::cli::ValidateArgs;
use crate::convert;

/// Run standalone validation and print the JSON report to stdout.
pub fn run(args: ValidateArgs) -> Result<()> {
    let _cmd = info_span!("validate").entered();

    let config = load_config(&args.config)?;
    let input = resolve_input(args.input.as_ref(), &config)?;

    let report = match read_rows(&input, &convert::build_column_map(&config.io)) {
        Ok(rows) => {
            info!(path = %input.display(), rows = rows.len(), "input loaded");
            validate(&rows)
        }
        Err(IoError::MissingColumn { column }) => ValidationReport::column_missing(&column),
        Err(e) => {
            return Err(e).with_context(|| format!("failed to read CSV: {}", input.display()));
        }
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
