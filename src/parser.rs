//! Module for parsing tokens into S-exps.
//!
//! Recursive descent over the Tokenizer's current token: read handles a
//! single datum, read_list the remainder of a list after its opening paren.

use std::mem;

use crate::error::Error;
use crate::primitive::Symbol;
use crate::sexp::{ConsList, Sexp};
use crate::token::{Token, TokenInfo, Tokenizer};

const MAX_DEPTH: usize = 128;


pub struct Parser<'a> {
    tokenizer: Tokenizer<'a>,
    current: TokenInfo,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Result<Self, Error> {
        let mut tokenizer = Tokenizer::new(input);
        let current = tokenizer.next_token()?;
        Ok(Self {
            tokenizer,
            current,
            depth: 0,
        })
    }

    pub fn at_end(&self) -> bool {
        self.current.is_end()
    }

    /// Reads one datum, leaving the token after it as current.
    pub fn read(&mut self) -> Result<Sexp, Error> {
        let info = self.advance()?;
        match info.token {
            Token::Primitive(primitive) => Ok(primitive.into()),
            Token::LeftParen => self.nested(|parser| parser.read_list()),
            Token::Quote => {
                let quoted = self.nested(|parser| parser.read())?;
                Ok(list!(Symbol::from_static("quote"), quoted,))
            }
            _ => err!(BadSyntax(info)),
        }
    }

    fn read_list(&mut self) -> Result<Sexp, Error> {
        let mut list = ConsList::new();
        loop {
            if self.current.token == Token::RightParen {
                self.advance()?;
                return Ok(list.release());
            }

            let first = self.read()?;
            list.append(first);

            if self.current.token == Token::Period {
                self.advance()?;
                let second = self.read()?;
                if self.current.token != Token::RightParen {
                    return err!(UnclosedDottedPair(self.current.clone()));
                }
                self.advance()?;
                return Ok(list.release_with_tail(second));
            }
        }
    }

    fn nested<F>(&mut self, f: F) -> Result<Sexp, Error>
    where
        F: FnOnce(&mut Self) -> Result<Sexp, Error>,
    {
        if self.depth >= MAX_DEPTH {
            return err!(DepthOverflow(MAX_DEPTH));
        }
        self.depth += 1;
        let res = f(self);
        self.depth -= 1;
        res
    }

    fn advance(&mut self) -> Result<TokenInfo, Error> {
        let next = self.tokenizer.next_token()?;
        Ok(mem::replace(&mut self.current, next))
    }
}


/// Parses exactly one datum from input.
pub fn parse_sexp(input: &str) -> Result<Sexp, Error> {
    let mut parser = Parser::new(input)?;
    let sexp = parser.read()?;
    if !parser.at_end() {
        return err!(TrailingInput(parser.current.clone()));
    }
    Ok(sexp)
}


#[cfg(test)]
#[path = "./parser_test.rs"]
mod parser_test;
