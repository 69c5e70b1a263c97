//! Diagnostic logging set-up
//!
//! Logs go to stderr so they never interleave with the calculator's own
//! stdout transcript.

use crate::config::Verbosity;
use crate::error::{CliError, CliResult};
use tracing_subscriber::EnvFilter;

/// Builds the filter for `verbosity`.
pub fn filter_for(verbosity: Verbosity) -> CliResult<EnvFilter> {
    EnvFilter::try_new(verbosity.log_filter()).map_err(|e| CliError::logging(e.to_string()))
}

/// Installs the global fmt subscriber writing to stderr.
pub fn init_logging(verbosity: Verbosity) -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter_for(verbosity)?)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| CliError::logging(e.to_string()))
}
