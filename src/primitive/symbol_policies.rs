use lazy_static::lazy_static;
use regex::Regex;

use super::symbol::SymbolError;


lazy_static! {
    static ref SYMBOL: Regex = Regex::new(r"^[A-Za-z<=>*/#+\-][A-Za-z0-9<=>*/#+\-?!]*$").unwrap();
    static ref INTEGER: Regex = Regex::new(r"^-?[0-9]+$").unwrap();
}

const START_PUNCTUATION: &str = "<=>*/#+-";
const CONTINUATION_PUNCTUATION: &str = "?!";


pub fn is_symbol_start(c: char) -> bool {
    c.is_ascii_alphabetic() || START_PUNCTUATION.contains(c)
}

pub fn is_symbol_continuation(c: char) -> bool {
    is_symbol_start(c) || c.is_ascii_digit() || CONTINUATION_PUNCTUATION.contains(c)
}

pub fn is_integer_literal(s: &str) -> bool {
    INTEGER.is_match(s)
}

/// Admits names built from the start and continuation character sets.
///
/// On failure, reports the first offending character and its char offset.
pub fn policy_base(s: &str) -> Result<(), SymbolError> {
    if SYMBOL.is_match(s) {
        return Ok(());
    }

    for (offset, c) in s.chars().enumerate() {
        let admitted = if offset == 0 {
            is_symbol_start(c)
        } else {
            is_symbol_continuation(c)
        };
        if !admitted {
            return Err(SymbolError::InvalidCharacter { found: c, offset });
        }
    }
    Err(SymbolError::Empty)
}
