//! Console-backed [`LineIo`]

use crate::session::LineIo;
use console::{Style, Term};
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Reads lines from `R`, writes to `W`, highlights warnings in yellow
#[derive(Debug)]
pub struct ConsoleIo<R, W> {
    reader: R,
    writer: W,
    term: Option<Term>,
    /// Whether to use colors
    pub use_color: bool,
}

impl ConsoleIo<StdinLock<'static>, Stdout> {
    /// Console bound to the process stdin and stdout
    #[must_use]
    pub fn stdio(use_color: bool) -> Self {
        Self {
            reader: io::stdin().lock(),
            writer: io::stdout(),
            term: Some(Term::stdout()),
            use_color,
        }
    }
}

impl<R: BufRead, W: Write> ConsoleIo<R, W> {
    /// Console over arbitrary streams; the window title is never touched
    #[must_use]
    pub const fn new(reader: R, writer: W, use_color: bool) -> Self {
        Self {
            reader,
            writer,
            term: None,
            use_color,
        }
    }

    /// Gives back the underlying writer
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> LineIo for ConsoleIo<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        if !prompt.is_empty() {
            self.writer.write_all(prompt.as_bytes())?;
        }
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{text}")
    }

    fn warn(&mut self, text: &str) -> io::Result<()> {
        if self.use_color {
            let style = Style::new().yellow().force_styling(true);
            writeln!(self.writer, "{}", style.apply_to(text))
        } else {
            writeln!(self.writer, "{text}")
        }
    }

    fn set_title(&mut self, title: &str) {
        if let Some(term) = &self.term {
            term.set_title(title);
        }
    }
}
