//! Tracing subscriber setup for the CLI.

use tracing_subscriber::EnvFilter;

/// Library crates whose logs the default filter enables alongside the
/// binary's own.
const LIB_TARGETS: &[&str] = &[
    "darcy_derivative",
    "darcy_io",
    "darcy_preprocess",
    "darcy_regime",
    "darcy_series",
    "darcy_validate",
];

/// Maps the `-v` flag count to a tracing level name.
fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the global tracing subscriber.
///
/// The verbosity flag sets a per-crate level for the workspace targets
/// (warn with no flag, then info, debug, trace). An explicit `RUST_LOG`
/// takes precedence over the flag entirely.
pub fn init(verbose: u8) {
    let level = level_for(verbose);
    let mut directives = vec![format!("darcy={level}")];
    directives.extend(LIB_TARGETS.iter().map(|t| format!("{t}={level}")));

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives.join(",")));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
