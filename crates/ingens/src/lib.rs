//! # Ingens
//!
//! Arbitrary precision signed integer arithmetic with an infix/postfix
//! expression evaluator on top.
//!
//! ## Features
//!
//! - **Limb arithmetic in a configurable base**: carry/borrow
//!   propagation, schoolbook multiplication, exponentiation by squaring
//! - **Search-based division**: quotient, remainder, and floor square
//!   root found by binary search over the answer space, using monotonic
//!   multiplication as the oracle
//! - **Two-stage evaluation**: shunting-yard infix-to-postfix
//!   conversion followed by stack-machine reduction
//!
//! ## Quick Start
//!
//! ```rust
//! use ingens::prelude::*;
//!
//! let a = BigNumber::parse("999").unwrap();
//! let b = BigNumber::parse("8").unwrap();
//! assert_eq!((a + b).to_string(), "1007");
//!
//! let result = evaluate_infix(&["3", "+", "4", "*", "2"]).unwrap();
//! assert_eq!(result.to_string(), "11");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use ingens_bignum as bignum;
pub use ingens_eval as eval;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use ingens_bignum::{ArithmeticError, BigNumber, DEFAULT_BASE};
    pub use ingens_eval::{
        evaluate_infix, evaluate_postfix, infix_to_postfix, EvalError, Token,
    };
}
