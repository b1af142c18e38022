use std::fmt;

use crate::primitive::Primitive;

#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    LeftParen,
    RightParen,
    Quote,
    Period,
    Primitive(Primitive),
    EndOfInput,
}

/// Token along with the 1-based position of its first character.
#[derive(Clone, Debug, PartialEq)]
pub struct TokenInfo {
    pub token: Token,
    pub line: usize,
    pub col: usize,
}

impl TokenInfo {
    pub fn is_end(&self) -> bool {
        self.token == Token::EndOfInput
    }
}

impl fmt::Display for TokenInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.token {
            Token::Primitive(p) => write!(f, "{} @ ({}, {})", p, self.line, self.col),
            _ => write!(f, "{:?} @ ({}, {})", self.token, self.line, self.col),
        }
    }
}
