//! # ingens-eval
//!
//! Expression evaluation over arbitrary precision integers.
//!
//! This crate provides:
//! - A [`Token`] classifier for pre-split expression tokens
//! - Shunting-yard conversion from infix to postfix notation
//! - Stack-machine evaluation of postfix token streams into
//!   [`ingens_bignum::BigNumber`] results
//!
//! Expressions carry only non-negative literals; negative values arise
//! solely from the binary `-` operator. There is no unary minus.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod infix;
pub mod postfix;
pub mod token;

#[cfg(test)]
mod proptests;

pub use error::EvalError;
pub use infix::{evaluate_infix, infix_to_postfix};
pub use postfix::evaluate_postfix;
pub use token::Token;
