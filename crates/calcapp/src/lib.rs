//! CalcApp - interactive two-operand decimal calculator
//!
//! Reads an operation and two numbers from a line-oriented console,
//! computes with exact fixed-point decimals and prints the result, until
//! the user types an exit token.
//!
//! # Example
//!
//! ```rust
//! use calcapp::prelude::*;
//! use rust_decimal::Decimal;
//!
//! let op = parse_operation(" Divide ");
//! assert_eq!(op, Operation::Divide);
//!
//! let a = parse_decimal_flexible("10", NumberLocale::Invariant).unwrap();
//! let b = parse_decimal_flexible("4", NumberLocale::Invariant).unwrap();
//! assert_eq!(evaluate(op, a, b), Ok(Decimal::new(25, 1)));
//! assert_eq!(evaluate(op, a, Decimal::ZERO), Err(CalcError::DivideByZero));
//!
//! // Scripted session: add 5 and 3, then exit
//! let input: &[u8] = b"1\n5\n3\nx\n";
//! let mut session = Session::new(ConsoleIo::new(input, Vec::new(), false), NumberLocale::Invariant);
//! session.run().unwrap();
//! let output = String::from_utf8(session.into_io().into_writer()).unwrap();
//! assert!(output.contains("5 + 3 = 8"));
//! ```

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod session;
pub mod terminal;

pub use crate::core::{
    evaluate, parse_decimal_flexible, parse_operation, CalcError, CalcResult, Calculator,
    NumberLocale, Operation,
};
pub use crate::session::{
    is_exit_token, LineIo, Session, SessionError, SessionResult, SessionState, SessionSummary,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::{
        evaluate, parse_decimal_flexible, parse_operation, CalcError, CalcResult, Calculator,
        NumberLocale, Operation,
    };
    pub use crate::session::{
        is_exit_token, LineIo, Session, SessionError, SessionResult, SessionState, SessionSummary,
        EXIT_TOKENS, WINDOW_TITLE,
    };
    pub use crate::terminal::ConsoleIo;
}
