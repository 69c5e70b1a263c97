//! CalcApp: interactive console calculator
//!
//! ## Usage
//!
//! ```bash
//! calcapp                     # dot decimal separator
//! calcapp --locale comma      # accept "3,5" (and still "3.5")
//! calcapp --color never -vv   # plain warnings, debug logs on stderr
//! ```

use calcapp_cli::{init_logging, run_interactive, Cli, CliConfig, CliResult, Verbosity};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = build_config(&cli);

    init_logging(config.verbosity)?;
    run_interactive(&config)?;
    Ok(())
}

fn build_config(cli: &Cli) -> CliConfig {
    CliConfig::new()
        .with_verbosity(Verbosity::from_flags(cli.quiet, cli.verbose))
        .with_color(cli.color.clone().into())
        .with_locale(cli.locale.clone().into())
}
