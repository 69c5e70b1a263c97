//! CalcApp CLI library
//!
//! Argument parsing, configuration, logging set-up and the session runner
//! behind the `calcapp` binary.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod config;
mod error;
pub mod logging;
pub mod runner;

pub use commands::{Cli, ColorArg, LocaleArg};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use logging::init_logging;
pub use runner::{run_interactive, run_with};
