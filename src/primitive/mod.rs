//! Representation of primitives.

use std::fmt;

#[macro_use]
mod try_from_helper;

pub mod builtin;
pub mod number;
pub mod procedure;
pub mod symbol;
pub mod symbol_policies;

pub use self::builtin::BuiltIn;
pub use self::number::Number;
pub use self::procedure::Procedure;
pub use self::symbol::{Symbol, ToSymbol};


#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Number(Number),
    Symbol(Symbol),
    BuiltIn(BuiltIn),
    Procedure(Procedure),
}


impl Primitive {
    pub fn is_procedure(&self) -> bool {
        matches!(self, Primitive::BuiltIn(_) | Primitive::Procedure(_))
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::Number(num) => write!(f, "{}", num),
            Primitive::Symbol(s) => write!(f, "{}", s),
            Primitive::BuiltIn(b) => write!(f, "{}", b),
            Primitive::Procedure(proc) => write!(f, "{}", proc),
        }
    }
}
