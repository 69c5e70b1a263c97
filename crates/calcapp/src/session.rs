//! Calculator session loop
//!
//! One iteration: menu, choice, two operands, result (or warning), then the
//! continue prompt. The loop only ends on an exit token or when the input
//! stream closes.

use crate::core::{
    evaluate, parse_decimal_flexible, parse_operation, CalcError, NumberLocale, Operation,
};
use rust_decimal::Decimal;
use std::io;
use thiserror::Error;
use tracing::debug;

/// Window title set when a session starts
pub const WINDOW_TITLE: &str = "CalculatorApp (Rust)";

/// Tokens that end the session, compared after trimming and lowercasing
pub const EXIT_TOKENS: [&str; 3] = ["x", "q", "exit"];

/// Result type for session operations
pub type SessionResult<T> = Result<T, SessionError>;

/// Failures that leave the read-compute-print cycle
#[derive(Debug, Error)]
pub enum SessionError {
    /// The input stream reached end of file
    #[error("input closed")]
    InputClosed,

    /// The console could not be read or written
    #[error("console I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Line-oriented console surface used by [`Session`]
pub trait LineIo {
    /// Writes `prompt` without a newline and reads one line.
    ///
    /// Returns `Ok(None)` at end of input. The returned line has its
    /// trailing newline removed.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Writes one line of text
    fn write_line(&mut self, text: &str) -> io::Result<()>;

    /// Writes one highlighted warning line
    fn warn(&mut self, text: &str) -> io::Result<()>;

    /// Sets the console window title, where supported
    fn set_title(&mut self, _title: &str) {}
}

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Accepting commands
    #[default]
    Running,
    /// Exit requested; no further prompts
    Terminated,
}

/// Counters reported when a session ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSummary {
    /// Calculations that printed a result line
    pub calculations: usize,
    /// Warning lines emitted
    pub warnings: usize,
}

/// Returns true if `text` is an exit token
#[must_use]
pub fn is_exit_token(text: &str) -> bool {
    let normalized = text.trim().to_lowercase();
    EXIT_TOKENS.contains(&normalized.as_str())
}

/// Interactive calculator session over a [`LineIo`]
#[derive(Debug)]
pub struct Session<I> {
    io: I,
    locale: NumberLocale,
    state: SessionState,
    summary: SessionSummary,
}

impl<I: LineIo> Session<I> {
    /// Creates a running session
    #[must_use]
    pub fn new(io: I, locale: NumberLocale) -> Self {
        Self {
            io,
            locale,
            state: SessionState::Running,
            summary: SessionSummary::default(),
        }
    }

    /// Current lifecycle state
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Locale used for parsing and formatting operands
    #[must_use]
    pub const fn locale(&self) -> NumberLocale {
        self.locale
    }

    /// Gives back the console surface
    pub fn into_io(self) -> I {
        self.io
    }

    /// Runs until an exit token is entered or the input closes.
    pub fn run(&mut self) -> SessionResult<SessionSummary> {
        self.greet()?;

        while self.state == SessionState::Running {
            match self.step() {
                Ok(()) => {}
                Err(SessionError::InputClosed) => {
                    debug!("input closed, ending session");
                    self.state = SessionState::Terminated;
                }
                Err(err) => return Err(err),
            }
        }

        self.io.write_line("")?;
        self.io
            .write_line("Thanks for using CalculatorApp. Goodbye!")?;
        debug!(
            calculations = self.summary.calculations,
            warnings = self.summary.warnings,
            "session finished"
        );
        Ok(self.summary)
    }

    /// Runs a single menu iteration.
    pub fn step(&mut self) -> SessionResult<()> {
        self.show_menu()?;

        let choice = self.prompt("Choose an option (1-4) or X to exit: ")?;
        if is_exit_token(&choice) {
            self.state = SessionState::Terminated;
            return Ok(());
        }

        let op = parse_operation(&choice);
        if !op.is_valid() {
            debug!(choice = choice.trim(), "rejected menu choice");
            return self.warn(&CalcError::InvalidSelection.to_string());
        }

        let a = self.read_decimal("Enter first number: ")?;
        let b = self.read_decimal("Enter second number: ")?;

        match evaluate(op, a, b) {
            Ok(result) => {
                debug!(?op, %a, %b, %result, "calculation succeeded");
                let line = format!(
                    "Result: {} {} {} = {}",
                    self.locale.format(a),
                    op.symbol(),
                    self.locale.format(b),
                    self.locale.format(result)
                );
                self.io.write_line("")?;
                self.io.write_line(&line)?;
                self.io.write_line("")?;
                self.summary.calculations += 1;
            }
            Err(err) => {
                debug!(?op, %a, %b, error = ?err, "calculation failed");
                self.warn(&err.to_string())?;
            }
        }

        self.io
            .write_line("Press Enter to continue, or type X to exit.")?;
        let answer = self.prompt("")?;
        if is_exit_token(&answer) {
            self.state = SessionState::Terminated;
        } else {
            self.io.write_line("")?;
        }
        Ok(())
    }

    /// Prompts until the reply parses as a decimal.
    pub fn read_decimal(&mut self, prompt: &str) -> SessionResult<Decimal> {
        loop {
            let reply = self.prompt(prompt)?;
            match parse_decimal_flexible(&reply, self.locale) {
                Ok(value) => return Ok(value),
                Err(err) => self.warn(&err.to_string())?,
            }
        }
    }

    fn greet(&mut self) -> SessionResult<()> {
        self.io.set_title(WINDOW_TITLE);
        self.io.write_line("=== CalculatorApp ===")?;
        self.io
            .write_line("Perform Add, Subtract, Multiply, Divide with input validation.")?;
        self.io.write_line("")?;
        Ok(())
    }

    fn show_menu(&mut self) -> SessionResult<()> {
        self.io.write_line("Menu:")?;
        for (index, op) in Operation::ALL.iter().enumerate() {
            let entry = format!("  {}) {} ({})", index + 1, op.label(), op.symbol());
            self.io.write_line(&entry)?;
        }
        self.io.write_line("  X) Exit")?;
        self.io.write_line("")?;
        Ok(())
    }

    fn prompt(&mut self, prompt: &str) -> SessionResult<String> {
        self.io.read_line(prompt)?.ok_or(SessionError::InputClosed)
    }

    fn warn(&mut self, message: &str) -> SessionResult<()> {
        self.summary.warnings += 1;
        self.io.warn(message)?;
        Ok(())
    }
}
