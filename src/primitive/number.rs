//! Representation of numbers.
//!
//! All arithmetic is checked; overflow surfaces as a Runtime Error rather
//! than wrapping.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use crate::error::Error;


#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Number(i64);


impl Number {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }

    pub fn checked_add(self, other: Self) -> Result<Self, Error> {
        match self.0.checked_add(other.0) {
            Some(value) => Ok(Self(value)),
            None => err!(IntegerOverflow("+")),
        }
    }

    pub fn checked_sub(self, other: Self) -> Result<Self, Error> {
        match self.0.checked_sub(other.0) {
            Some(value) => Ok(Self(value)),
            None => err!(IntegerOverflow("-")),
        }
    }

    pub fn checked_mul(self, other: Self) -> Result<Self, Error> {
        match self.0.checked_mul(other.0) {
            Some(value) => Ok(Self(value)),
            None => err!(IntegerOverflow("*")),
        }
    }

    /// Truncating division.
    pub fn checked_div(self, other: Self) -> Result<Self, Error> {
        if other.0 == 0 {
            return err!(DivisionByZero);
        }
        match self.0.checked_div(other.0) {
            Some(value) => Ok(Self(value)),
            None => err!(IntegerOverflow("/")),
        }
    }

    pub fn checked_abs(self) -> Result<Self, Error> {
        match self.0.checked_abs() {
            Some(value) => Ok(Self(value)),
            None => err!(IntegerOverflow("abs")),
        }
    }
}


impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl FromStr for Number {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(Self)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}


impl_try_from!(Number;
               Primitive  ->  Number,
               Sexp       ->  Number,
               ref Sexp   ->  ref Number,
);
