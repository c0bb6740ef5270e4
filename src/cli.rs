use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Darcy pressure-transient analysis toolkit.
#[derive(Parser)]
#[command(
    name = "darcy",
    version,
    about = "Pressure-transient (well test) analysis"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Run the full analysis pipeline and write a JSON report.
    Analyze(AnalyzeArgs),
    /// Validate the input series and print the validation report.
    Validate(ValidateArgs),
}

/// Arguments for the `analyze` subcommand.
#[derive(clap::Args)]
pub struct AnalyzeArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "darcy.toml")]
    pub config: PathBuf,

    /// Override input CSV path from config.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Override output JSON path from config (stdout if unset anywhere).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override the Bourdet log-spacing parameter L from config.
    #[arg(long)]
    pub l: Option<f64>,

    /// Run the pipeline even when validation fails.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `validate` subcommand.
#[derive(clap::Args)]
pub struct ValidateArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "darcy.toml")]
    pub config: PathBuf,

    /// Override input CSV path from config.
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}
