//! `darcy` — pressure-transient (well test) analysis CLI.

mod analyze_cmd;
mod cli;
mod config;
mod convert;
mod logging;
mod report;
mod validate_cmd;

use std::process::ExitCode;

use clap::Parser;

use crate::cli::{Cli, Command};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let outcome = match cli.command {
        Command::Analyze(args) => analyze_cmd::run(args),
        Command::Validate(args) => validate_cmd::run(args),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
