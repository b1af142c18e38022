use std::borrow::Borrow;
use std::fmt;

use super::symbol_policies::policy_base;


/// Case-sensitive identifier. Also carries the boolean literals #t and #f.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Symbol(String);

pub trait ToSymbol {
    fn to_symbol(&self) -> SymbolResult;

    fn to_symbol_or_panic(&self) -> Symbol {
        self.to_symbol().unwrap()
    }
}

pub type SymbolResult = Result<Symbol, SymbolError>;

#[derive(Debug, PartialEq)]
pub enum SymbolError {
    Empty,
    InvalidCharacter { found: char, offset: usize },
}

pub const TRUE: &str = "#t";
pub const FALSE: &str = "#f";


impl Symbol {
    pub fn new<S: AsRef<str>>(sym: S) -> SymbolResult {
        policy_base(sym.as_ref())?;
        Ok(Symbol(sym.as_ref().to_string()))
    }

    // Only for names known to satisfy policy_base.
    pub(crate) fn from_static(sym: &'static str) -> Symbol {
        Symbol(sym.to_string())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_boolean_literal(&self) -> bool {
        self.0 == TRUE || self.0 == FALSE
    }

    pub fn is_false(&self) -> bool {
        self.0 == FALSE
    }
}


impl<S: AsRef<str>> ToSymbol for S {
    fn to_symbol(&self) -> SymbolResult {
        Symbol::new(self)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Borrow<String> for Symbol {
    fn borrow(&self) -> &String {
        &self.0
    }
}

impl Borrow<str> for Symbol {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}


impl_try_from!(Symbol;
               Primitive  ->  Symbol,
               Sexp       ->  Symbol,
               ref Sexp   ->  ref Symbol,
);
