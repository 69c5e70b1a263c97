//! Operation selection and checked decimal arithmetic

use crate::core::{CalcError, CalcResult};
use rust_decimal::Decimal;

/// Type-safe operation enum
///
/// `Invalid` is what an unrecognised menu choice resolves to; it has no
/// evaluation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
    /// Unrecognised selection
    Invalid,
}

impl Operation {
    /// The selectable operations, in menu order
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Returns the operator symbol for display
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Invalid => "?",
        }
    }

    /// Returns the menu label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Add => "Add",
            Self::Subtract => "Subtract",
            Self::Multiply => "Multiply",
            Self::Divide => "Divide",
            Self::Invalid => "Invalid",
        }
    }

    /// Returns true for every variant except `Invalid`
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        !matches!(self, Self::Invalid)
    }
}

/// Maps user text to an [`Operation`], ignoring case and surrounding
/// whitespace; anything unrecognised is `Invalid`.
#[must_use]
pub fn parse_operation(text: &str) -> Operation {
    match text.trim().to_lowercase().as_str() {
        "1" | "+" | "add" => Operation::Add,
        "2" | "-" | "sub" | "subtract" => Operation::Subtract,
        "3" | "*" | "mul" | "multiply" => Operation::Multiply,
        "4" | "/" | "div" | "divide" => Operation::Divide,
        _ => Operation::Invalid,
    }
}

/// Applies `op` to two operands.
pub fn evaluate(op: Operation, a: Decimal, b: Decimal) -> CalcResult<Decimal> {
    match op {
        Operation::Add => Calculator::add(a, b),
        Operation::Subtract => Calculator::subtract(a, b),
        Operation::Multiply => Calculator::multiply(a, b),
        Operation::Divide => Calculator::divide(a, b),
        Operation::Invalid => Err(CalcError::InvalidSelection),
    }
}

/// Checked arithmetic over [`Decimal`]
#[derive(Debug, Default, Clone, Copy)]
pub struct Calculator;

impl Calculator {
    /// Addition: a + b
    pub fn add(a: Decimal, b: Decimal) -> CalcResult<Decimal> {
        a.checked_add(b).ok_or(CalcError::Overflow)
    }

    /// Subtraction: a - b
    pub fn subtract(a: Decimal, b: Decimal) -> CalcResult<Decimal> {
        a.checked_sub(b).ok_or(CalcError::Overflow)
    }

    /// Multiplication: a * b
    pub fn multiply(a: Decimal, b: Decimal) -> CalcResult<Decimal> {
        a.checked_mul(b).ok_or(CalcError::Overflow)
    }

    /// Division: a / b
    pub fn divide(a: Decimal, b: Decimal) -> CalcResult<Decimal> {
        if b.is_zero() {
            return Err(CalcError::DivideByZero);
        }
        a.checked_div(b).ok_or(CalcError::Overflow)
    }
}
