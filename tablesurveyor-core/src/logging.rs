//! Logging setup for tablesurveyor binaries.
//!
//! Keeps log configuration in one place so every tool built on the engine
//! reports diagnostics the same way.

use tracing_subscriber::EnvFilter;

use crate::Result;

/// Initializes structured logging.
///
/// The base level follows the verbosity flags (0=INFO, 1=DEBUG, 2+=TRACE),
/// or ERROR when `quiet` is set. A `RUST_LOG` environment filter, when
/// present and valid, takes precedence over the flags.
///
/// # Errors
/// Returns a configuration error when a global subscriber is already
/// installed.
pub fn init_logging(verbose: u8, quiet: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| {
            crate::error::TableSurveyorError::configuration(format!(
                "failed to initialize logging: {e}"
            ))
        })
}

/// Maps the verbosity flags to a filter directive.
fn default_directive(verbose: u8, quiet: bool) -> &'static str {
    match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "info",
        (false, 1) => "debug",
        (false, _) => "trace",
    }
}
