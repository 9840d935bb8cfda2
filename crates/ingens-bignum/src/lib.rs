//! # ingens-bignum
//!
//! Arbitrary precision signed integer arithmetic over a configurable
//! limb base.
//!
//! This crate provides:
//! - A [`BigNumber`] value type storing magnitudes as limb arrays,
//!   least-significant limb first, in any base up to [`DEFAULT_BASE`]
//! - Carry/borrow-propagating addition, subtraction, and schoolbook
//!   multiplication, plus exponentiation by squaring
//! - Division, modulo, and floor square root computed by binary search
//!   over the answer space, using monotonic multiplication as the
//!   comparison oracle instead of long division
//!
//! ## Design Notes
//!
//! - Numbers in different bases interoperate: the left operand's base
//!   is authoritative and the right operand is reconverted through its
//!   decimal rendering
//! - Small magnitudes are stored inline (no heap allocation)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod arith;
pub mod bignum;
pub mod error;
pub mod search;

#[cfg(test)]
mod proptests;

pub use bignum::{BigNumber, DEFAULT_BASE};
pub use error::ArithmeticError;
