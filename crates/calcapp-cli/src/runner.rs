//! Session runner

use crate::config::{CliConfig, ColorChoice};
use crate::error::CliResult;
use calcapp::terminal::ConsoleIo;
use calcapp::{Session, SessionSummary};
use std::io::{BufRead, Write};
use std::time::Instant;
use tracing::{debug, info};

/// Runs an interactive session on the process stdin/stdout
pub fn run_interactive(config: &CliConfig) -> CliResult<SessionSummary> {
    let io = ConsoleIo::stdio(config.color.should_color());
    run_session(config, io).map(|(summary, _)| summary)
}

/// Runs a session over arbitrary streams and hands back the writer.
///
/// Only `ColorChoice::Always` highlights warnings here, since the writer
/// is never a terminal.
pub fn run_with<R: BufRead, W: Write>(
    config: &CliConfig,
    reader: R,
    writer: W,
) -> CliResult<(SessionSummary, W)> {
    let use_color = matches!(config.color, ColorChoice::Always);
    let (summary, io) = run_session(config, ConsoleIo::new(reader, writer, use_color))?;
    Ok((summary, io.into_writer()))
}

fn run_session<R: BufRead, W: Write>(
    config: &CliConfig,
    io: ConsoleIo<R, W>,
) -> CliResult<(SessionSummary, ConsoleIo<R, W>)> {
    let color = io.use_color;
    let mut session = Session::new(io, config.locale);
    debug!(locale = ?session.locale(), color, "starting session");
    let started = Instant::now();

    let summary = session.run()?;

    info!(
        calculations = summary.calculations,
        warnings = summary.warnings,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "session ended"
    );
    Ok((summary, session.into_io()))
}
