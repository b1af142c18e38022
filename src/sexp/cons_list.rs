//! Module for constructing lists as S-exps without building in reverse or
//! tolerating O(n) insertion => O(n^2) total construction.

use std::rc::Rc;

use crate::sexp::{Cons, Sexp};

#[derive(Debug, Default)]
pub struct ConsList {
    head: Sexp,
    end: Option<Rc<Cons>>,
    len: usize,
}

impl ConsList {
    pub fn new() -> ConsList {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn release(self) -> Sexp {
        self.head
    }

    /// Terminates the list with tail rather than Nil.
    pub fn release_with_tail(self, tail: Sexp) -> Sexp {
        match self.end {
            Some(end) => {
                end.set_cdr(tail);
                self.head
            }
            None => tail,
        }
    }

    pub fn append<T: Into<Sexp>>(&mut self, val: T) {
        let cell = Rc::new(Cons::new(val.into(), Sexp::Nil));
        match &self.end {
            Some(end) => end.set_cdr(Sexp::Cons(cell.clone())),
            None => self.head = Sexp::Cons(cell.clone()),
        }
        self.end = Some(cell);
        self.len += 1;
    }
}
