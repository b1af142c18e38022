//! Module for representing S-exps.

use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use super::cons::Cons;
use super::cons_list::ConsList;
use crate::error::Error;
use crate::parser::parse_sexp;
use crate::primitive::symbol::{FALSE, TRUE};
use crate::primitive::{BuiltIn, Number, Primitive, Procedure, Symbol};


#[derive(Clone, PartialEq)]
pub enum Sexp {
    Nil,
    Primitive(Primitive),
    Cons(Rc<Cons>),
}

/// Iterator over the cells of a (possibly improper) list.
///
/// Infinite over cyclic lists; see Sexp::list_length for a bounded walk.
pub struct SexpIter {
    current: Sexp,
}

pub fn cons(car: Sexp, cdr: Sexp) -> Sexp {
    Sexp::Cons(Rc::new(Cons::new(car, cdr)))
}


impl Sexp {
    pub fn is_nil(&self) -> bool {
        matches!(self, Sexp::Nil)
    }

    pub fn is_pair(&self) -> bool {
        matches!(self, Sexp::Cons(_))
    }

    /// Only the symbol #f is false.
    pub fn is_truthy(&self) -> bool {
        match self {
            Sexp::Primitive(Primitive::Symbol(symbol)) => !symbol.is_false(),
            _ => true,
        }
    }

    pub fn boolean(value: bool) -> Sexp {
        Symbol::from_static(if value { TRUE } else { FALSE }).into()
    }

    pub fn iter(&self) -> SexpIter {
        SexpIter {
            current: self.clone(),
        }
    }

    /// Number of cells if self is a proper list; None if the list is
    /// improper or cyclic.
    pub fn list_length(&self) -> Option<usize> {
        let mut slow = self.clone();
        let mut fast = self.clone();
        let mut len = 0;
        loop {
            match fast {
                Sexp::Nil => return Some(len),
                Sexp::Cons(cell) => fast = cell.cdr(),
                Sexp::Primitive(_) => return None,
            }
            len += 1;
            match fast {
                Sexp::Nil => return Some(len),
                Sexp::Cons(cell) => fast = cell.cdr(),
                Sexp::Primitive(_) => return None,
            }
            len += 1;

            if let Sexp::Cons(cell) = slow {
                slow = cell.cdr();
            }
            if let (Sexp::Cons(a), Sexp::Cons(b)) = (&slow, &fast) {
                if Rc::ptr_eq(a, b) {
                    return None;
                }
            }
        }
    }

    /// Elements of a proper list, or the original Sexp if it is not one.
    pub fn to_vec(&self) -> Result<Vec<Sexp>, Sexp> {
        match self.list_length() {
            Some(len) => {
                let mut v = Vec::with_capacity(len);
                for (elem, _proper) in self.iter() {
                    v.push(elem);
                }
                Ok(v)
            }
            None => Err(self.clone()),
        }
    }

    // Cells of every list still being printed are in open; reaching one of
    // them again means a cycle, printed as "...".
    fn write(&self, f: &mut fmt::Formatter<'_>, open: &mut HashSet<*const Cons>) -> fmt::Result {
        let head = match self {
            Sexp::Nil => return write!(f, "()"),
            Sexp::Primitive(primitive) => return write!(f, "{}", primitive),
            Sexp::Cons(head) => head,
        };
        if open.contains(&Rc::as_ptr(head)) {
            return write!(f, "...");
        }

        let mut chain = Vec::new();
        let mut cell = head.clone();
        write!(f, "(")?;
        loop {
            open.insert(Rc::as_ptr(&cell));
            chain.push(Rc::as_ptr(&cell));
            cell.car().write(f, open)?;
            match cell.cdr() {
                Sexp::Nil => break,
                Sexp::Cons(next) => {
                    if open.contains(&Rc::as_ptr(&next)) {
                        write!(f, " ...")?;
                        break;
                    }
                    write!(f, " ")?;
                    cell = next;
                }
                atom => {
                    write!(f, " . ")?;
                    atom.write(f, open)?;
                    break;
                }
            }
        }
        for ptr in chain {
            open.remove(&ptr);
        }
        write!(f, ")")
    }
}


impl Iterator for SexpIter {
    // (Sexp, from_cons).
    //
    // If from_cons is false, the Sexp is the non-Nil tail of an improper
    // list (or a lone atom) and is necessarily the last element.
    type Item = (Sexp, bool);

    fn next(&mut self) -> Option<Self::Item> {
        match std::mem::take(&mut self.current) {
            Sexp::Nil => None,
            Sexp::Cons(cell) => {
                self.current = cell.cdr();
                Some((cell.car(), true))
            }
            atom => Some((atom, false)),
        }
    }
}

impl Default for Sexp {
    fn default() -> Self {
        Sexp::Nil
    }
}

impl fmt::Display for Sexp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write(f, &mut HashSet::new())
    }
}

impl fmt::Debug for Sexp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self, f)
    }
}


// TryFrom<Sexp-like> impls.
impl std::convert::TryFrom<Sexp> for Primitive {
    type Error = Sexp;

    fn try_from(value: Sexp) -> Result<Self, Self::Error> {
        if let Sexp::Primitive(primitive) = value {
            Ok(primitive)
        } else {
            Err(value)
        }
    }
}


// From<T> impls.
impl FromStr for Sexp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_sexp(s)
    }
}

impl<T: Into<Sexp>> From<Vec<T>> for Sexp {
    fn from(vec: Vec<T>) -> Self {
        let mut list = ConsList::new();
        for value in vec {
            list.append(value);
        }
        list.release()
    }
}

// Used by break_args when taking a Sexp.
impl From<std::convert::Infallible> for Sexp {
    fn from(_: std::convert::Infallible) -> Self {
        Self::default()
    }
}

impl From<Primitive> for Sexp {
    fn from(primitive: Primitive) -> Self {
        Sexp::Primitive(primitive)
    }
}

impl From<Cons> for Sexp {
    fn from(cons: Cons) -> Self {
        Sexp::Cons(Rc::new(cons))
    }
}

impl From<Rc<Cons>> for Sexp {
    fn from(cons: Rc<Cons>) -> Self {
        Sexp::Cons(cons)
    }
}

impl From<i64> for Sexp {
    fn from(value: i64) -> Self {
        Number::new(value).into()
    }
}

impl From<bool> for Sexp {
    fn from(value: bool) -> Self {
        Sexp::boolean(value)
    }
}

// Impl From<T> over Primitive subtypes.
macro_rules! sexp_from {
    ($from:ident, $($tail:tt)*) => {
        impl From<$from> for Sexp {
            fn from(elem: $from) -> Self {
                Sexp::Primitive(Primitive::$from(elem))
            }
        }
        sexp_from!($($tail)*);
    };
    () => {};
}

sexp_from!(Number, Symbol, BuiltIn, Procedure,);


#[cfg(test)]
#[path = "./sexp_test.rs"]
mod sexp_test;
