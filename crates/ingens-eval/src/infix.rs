//! Shunting-yard conversion from infix to postfix notation.

use ingens_bignum::BigNumber;

use crate::error::EvalError;
use crate::postfix::evaluate_postfix;
use crate::token::Token;

/// Operator associativity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Associativity {
    Left,
    Right,
}

/// Precedence and associativity of one operator.
#[derive(Clone, Copy)]
struct Rule {
    precedence: u8,
    associativity: Associativity,
}

/// The fixed operator table. `classify` has already vetted the token,
/// so every operator reaching this point is one of the six.
fn rule(op: &str) -> Rule {
    match op {
        "+" | "-" => Rule {
            precedence: 11,
            associativity: Associativity::Left,
        },
        "*" | "/" | "%" => Rule {
            precedence: 12,
            associativity: Associativity::Left,
        },
        // "^"
        _ => Rule {
            precedence: 14,
            associativity: Associativity::Right,
        },
    }
}

/// Converts an infix token sequence to postfix order.
///
/// Numbers pass straight through; an operator first pops stacked
/// operators of higher precedence (or equal precedence when the
/// stacked operator is left-associative); parentheses push and pop
/// grouping markers. Operators still stacked at end of input are
/// appended to the output.
///
/// # Errors
///
/// - [`EvalError::InvalidToken`] for unclassifiable tokens
/// - [`EvalError::UnbalancedParentheses`] for a `)` with no matching
///   open marker, or for a `(` marker still stacked at end of input
pub fn infix_to_postfix<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<String>, EvalError> {
    let mut output: Vec<String> = Vec::new();
    let mut operators: Vec<String> = Vec::new();

    for token in tokens {
        let token = token.as_ref().trim();
        match Token::classify(token) {
            Token::Number => output.push(token.to_owned()),
            Token::Operator => {
                let incoming = rule(token);
                while let Some(top) = operators.last() {
                    if top == "(" {
                        break;
                    }
                    let on_stack = rule(top);
                    let pops = incoming.precedence < on_stack.precedence
                        || (incoming.precedence == on_stack.precedence
                            && on_stack.associativity == Associativity::Left);
                    if !pops {
                        break;
                    }
                    if let Some(op) = operators.pop() {
                        output.push(op);
                    }
                }
                operators.push(token.to_owned());
            }
            Token::Open => operators.push("(".to_owned()),
            Token::Close => loop {
                match operators.pop() {
                    Some(op) if op == "(" => break,
                    Some(op) => output.push(op),
                    None => return Err(EvalError::UnbalancedParentheses),
                }
            },
            Token::Error => return Err(EvalError::InvalidToken(token.to_owned())),
        }
    }

    while let Some(op) = operators.pop() {
        if op == "(" {
            return Err(EvalError::UnbalancedParentheses);
        }
        output.push(op);
    }
    Ok(output)
}

/// Evaluates an infix token sequence: shunting-yard into postfix, then
/// stack evaluation. An empty input yields zero.
///
/// # Errors
///
/// Any error from [`infix_to_postfix`] or
/// [`evaluate_postfix`](crate::postfix::evaluate_postfix).
pub fn evaluate_infix<S: AsRef<str>>(tokens: &[S]) -> Result<BigNumber, EvalError> {
    let postfix = infix_to_postfix(tokens)?;
    evaluate_postfix(&postfix)
}
