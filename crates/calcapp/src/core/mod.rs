//! Core calculator module
//!
//! Error prevention: the operation set is a closed enum and every
//! arithmetic step is checked, so an out-of-range result is a value,
//! never a panic.

mod decimal;
mod operations;

pub use decimal::{parse_decimal_flexible, NumberLocale};
pub use operations::{evaluate, parse_operation, Calculator, Operation};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types - exhaustive enum ensures all cases handled
///
/// The `Display` text is the warning shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Menu choice did not name an operation
    #[error("Invalid option. Please choose 1/2/3/4 or X to exit.")]
    InvalidSelection,
    /// Operand text is not a number
    #[error("Invalid number. Please enter a valid numeric value (e.g., 12, -3.5).")]
    InvalidNumericInput,
    /// Division by zero attempted
    #[error("Cannot divide by zero. Please try again with a non-zero divisor.")]
    DivideByZero,
    /// Result does not fit the decimal type
    #[error("Number too large or too small to handle. Try smaller magnitudes.")]
    Overflow,
}
