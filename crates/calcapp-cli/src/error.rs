//! Error types for the CLI

use calcapp::SessionError;
use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that end the process with a failure exit code
#[derive(Debug, Error)]
pub enum CliError {
    /// Console read or write failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Logging could not be initialised
    #[error("Logging setup failed: {message}")]
    Logging {
        /// Error message
        message: String,
    },
}

impl CliError {
    /// Create a logging setup error
    #[must_use]
    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }
}

impl From<SessionError> for CliError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::Io(io) => Self::Io(io),
            // Session::run ends cleanly on closed input; kept for exhaustiveness.
            SessionError::InputClosed => Self::Io(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "input closed",
            )),
        }
    }
}
