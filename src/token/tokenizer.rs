//! Module for breaking program text into tokens.

use std::iter::Peekable;
use std::str::Chars;

use log::trace;

use super::token::{Token, TokenInfo};
use crate::error::Error;
use crate::primitive::symbol::{SymbolError, ToSymbol};
use crate::primitive::symbol_policies;
use crate::primitive::Number;
use crate::primitive::Primitive;

use self::TokenizerState::*;


/// Essentially a Mealy machine that consumes characters and emits one
/// Token per call to next_token.
///
/// Atoms are accumulated until a separator or punctuation ends them.
/// Punctuation ending an atom is left in the input for the following call.
pub struct Tokenizer<'a> {
    // Mealy machine state.
    state: TokenizerState,

    // Non-control state.
    input: Peekable<Chars<'a>>,
    pending: String,
    // Source column of each pending char.
    pending_cols: Vec<usize>,
    start: (usize, usize),
    line: usize,
    col: usize,
    finished: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum TokenizerState {
    // Nothing pending.
    Base,
    // Pending atom is exactly "+" or "-".
    Sign,
    // Pending atom of any other shape.
    Atom,
}


impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            state: Base,

            input: input.chars().peekable(),
            pending: String::new(),
            pending_cols: Vec::new(),
            start: (1, 1),
            line: 1,
            col: 1,
            finished: false,
        }
    }

    /// Produces the next token, or EndOfInput once the text is exhausted.
    ///
    /// Calling again after EndOfInput keeps producing EndOfInput.
    pub fn next_token(&mut self) -> Result<TokenInfo, Error> {
        loop {
            let c = match self.input.peek() {
                Some(&c) => c,
                None => {
                    if self.state == Base {
                        return Ok(TokenInfo {
                            token: Token::EndOfInput,
                            line: self.line,
                            col: self.col,
                        });
                    }
                    return self.flush();
                }
            };

            if is_separator(c) {
                self.advance();
                if self.state != Base {
                    return self.flush();
                }
                continue;
            }

            if let Some(token) = punctuation(c) {
                if self.state != Base {
                    return self.flush();
                }
                let (line, col) = (self.line, self.col);
                self.advance();
                trace!("Token {:?} @ ({}, {})", token, line, col);
                return Ok(TokenInfo { token, line, col });
            }

            match self.state {
                Base => {
                    self.start = (self.line, self.col);
                    self.push_pending(c);
                    self.state = if c == '+' || c == '-' { Sign } else { Atom };
                    self.advance();
                }
                Sign => {
                    if c.is_ascii_digit() {
                        // A leading + never survives into the literal.
                        if self.pending == "+" {
                            self.pending.clear();
                            self.pending_cols.clear();
                        }
                        self.push_pending(c);
                        self.state = Atom;
                    } else {
                        trace!("Dropping {:?} following lone {}", c, self.pending);
                    }
                    self.advance();
                }
                Atom => {
                    if c == '+' {
                        return self.flush();
                    }
                    self.push_pending(c);
                    self.advance();
                }
            }
        }
    }

    fn push_pending(&mut self, c: char) {
        self.pending.push(c);
        self.pending_cols.push(self.col);
    }

    fn advance(&mut self) {
        if let Some(c) = self.input.next() {
            if c == '\n' {
                self.line += 1;
                self.col = 1;
            } else {
                self.col += 1;
            }
        }
    }

    fn flush(&mut self) -> Result<TokenInfo, Error> {
        let atom = std::mem::take(&mut self.pending);
        let cols = std::mem::take(&mut self.pending_cols);
        self.state = Base;

        let (line, col) = self.start;
        let token = classify(&atom, line, col, &cols)?;
        trace!("Token {:?} @ ({}, {})", token, line, col);
        Ok(TokenInfo { token, line, col })
    }
}


impl<'a> Iterator for Tokenizer<'a> {
    type Item = Result<TokenInfo, Error>;

    /// Yields tokens up to (not including) EndOfInput. Stops after the
    /// first error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_token() {
            Ok(info) if info.is_end() => {
                self.finished = true;
                None
            }
            Ok(info) => Some(Ok(info)),
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}


fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\n' | '\t' | '\r')
}

fn punctuation(c: char) -> Option<Token> {
    match c {
        '(' => Some(Token::LeftParen),
        ')' => Some(Token::RightParen),
        '.' => Some(Token::Period),
        '\'' => Some(Token::Quote),
        _ => None,
    }
}

// Try to parse as number before imposing Symbol constraints.
//
// cols holds the source column of each char of atom; chars swallowed after a
// lone sign leave gaps.
fn classify(atom: &str, line: usize, col: usize, cols: &[usize]) -> Result<Token, Error> {
    if symbol_policies::is_integer_literal(atom) {
        return match atom.parse::<Number>() {
            Ok(num) => Ok(Token::Primitive(Primitive::Number(num))),
            Err(_) => err!(IntegerOutOfRange {
                literal: atom.to_string(),
                line,
                col,
            }),
        };
    }

    match atom.to_symbol() {
        Ok(symbol) => Ok(Token::Primitive(Primitive::Symbol(symbol))),
        Err(SymbolError::InvalidCharacter { found, offset }) => err!(InvalidCharacter {
            found,
            line,
            col: cols.get(offset).copied().unwrap_or(col),
        }),
        // Atoms are never empty, but report the start position regardless.
        Err(SymbolError::Empty) => err!(InvalidCharacter {
            found: ' ',
            line,
            col,
        }),
    }
}


#[cfg(test)]
#[path = "./tokenizer_test.rs"]
mod tokenizer_test;
