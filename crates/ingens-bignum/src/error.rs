//! Error types for big number arithmetic.

use thiserror::Error;

/// Errors that can occur while constructing or combining big numbers.
///
/// No operation returns a partial result: on failure the operands are
/// left untouched and only the error is surfaced.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ArithmeticError {
    /// The input string does not match `-?[0-9]+`.
    #[error("malformed number: {0:?}")]
    MalformedNumber(String),

    /// Division or modulo with a zero divisor magnitude.
    #[error("division by zero")]
    DivisionByZero,

    /// Modulo requested with a negative divisor.
    #[error("modulus must be non-negative")]
    NegativeModulus,

    /// Square root of a negative number.
    #[error("square root of a negative number")]
    NegativeOperand,
}
