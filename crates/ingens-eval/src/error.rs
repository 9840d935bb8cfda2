//! Error types for expression evaluation.

use ingens_bignum::ArithmeticError;
use thiserror::Error;

/// Errors that can occur while converting or evaluating expressions.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    /// A token matched none of the recognized classes.
    #[error("invalid token in expression: {0:?}")]
    InvalidToken(String),

    /// A closing parenthesis had no matching open marker.
    #[error("unbalanced parentheses")]
    UnbalancedParentheses,

    /// An operator was applied with fewer than two operands available.
    #[error("operator with fewer than two operands")]
    StackUnderflow,

    /// The right operand of `^` does not fit in a native exponent.
    #[error("exponent does not fit in a native integer")]
    ExponentTooLarge,

    /// An arithmetic operation failed during evaluation.
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}
