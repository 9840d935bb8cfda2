//! Stack-machine evaluation of postfix token streams.

use ingens_bignum::BigNumber;
use num_traits::Zero;

use crate::error::EvalError;
use crate::token::Token;

/// Evaluates a postfix (RPN) token sequence into a single number.
///
/// Numbers push; operators pop two operands, with the second-popped
/// value as the left operand, and push the result. An empty input
/// yields zero. If malformed input leaves extra operands on the stack,
/// the topmost is returned.
///
/// # Errors
///
/// - [`EvalError::InvalidToken`] for unclassifiable tokens or stray
///   parentheses (postfix streams contain none)
/// - [`EvalError::StackUnderflow`] when an operator finds fewer than
///   two operands
/// - [`EvalError::ExponentTooLarge`] when the right operand of `^`
///   does not fit in an `i64`
/// - [`EvalError::Arithmetic`] when division or modulo fails
pub fn evaluate_postfix<S: AsRef<str>>(tokens: &[S]) -> Result<BigNumber, EvalError> {
    let mut operands: Vec<BigNumber> = Vec::new();
    for token in tokens {
        let token = token.as_ref().trim();
        match Token::classify(token) {
            Token::Number => operands.push(BigNumber::parse(token)?),
            Token::Operator => {
                let right = operands.pop().ok_or(EvalError::StackUnderflow)?;
                let left = operands.pop().ok_or(EvalError::StackUnderflow)?;
                operands.push(apply(token, &left, &right)?);
            }
            Token::Open | Token::Close | Token::Error => {
                return Err(EvalError::InvalidToken(token.to_owned()));
            }
        }
    }
    Ok(operands.pop().unwrap_or_else(BigNumber::zero))
}

/// Applies one binary operator.
fn apply(op: &str, left: &BigNumber, right: &BigNumber) -> Result<BigNumber, EvalError> {
    match op {
        "+" => Ok(left + right),
        "-" => Ok(left - right),
        "*" => Ok(left * right),
        "/" => Ok(left.div(right)?),
        "%" => Ok(left.rem(right)?),
        "^" => {
            let exponent = right.to_i64().ok_or(EvalError::ExponentTooLarge)?;
            Ok(left.pow(exponent))
        }
        _ => Err(EvalError::InvalidToken(op.to_owned())),
    }
}
