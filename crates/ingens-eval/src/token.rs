//! Token classification for pre-split expression input.

/// The class of one expression token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token {
    /// An unsigned decimal literal: `[0-9]+`.
    Number,
    /// One of `+ - * / % ^`.
    Operator,
    /// An opening parenthesis.
    Open,
    /// A closing parenthesis.
    Close,
    /// Anything else; poisons the whole evaluation.
    Error,
}

impl Token {
    /// Classifies a single token after trimming surrounding whitespace.
    ///
    /// Literals carry no sign: `-5` classifies as [`Token::Error`],
    /// since `-` is only ever a binary operator.
    #[must_use]
    pub fn classify(token: &str) -> Self {
        let token = token.trim();
        if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
            return Token::Number;
        }
        match token {
            "(" => Token::Open,
            ")" => Token::Close,
            "+" | "-" | "*" | "/" | "%" | "^" => Token::Operator,
            _ => Token::Error,
        }
    }
}
