//! Chain of binding frames.
//!
//! Each frame maps Symbols to values and optionally points at its parent.
//! The outermost frame of a session is the global frame; the fixed table of
//! builtins sits behind it and is consulted only when the chain misses.

use log::trace;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::builtins;
use crate::error::Error;
use crate::primitive::Symbol;
use crate::sexp::Sexp;


pub struct Environment {
    bindings: RefCell<HashMap<Symbol, Sexp>>,
    parent: Option<Rc<Environment>>,
}

impl Environment {
    pub fn new_global() -> Rc<Environment> {
        Rc::new(Self {
            bindings: Default::default(),
            parent: None,
        })
    }

    /// Creates a frame for one procedure application.
    pub fn with_parent(parent: Rc<Environment>) -> Rc<Environment> {
        Rc::new(Self {
            bindings: Default::default(),
            parent: Some(parent),
        })
    }

    pub fn parent(&self) -> Option<&Rc<Environment>> {
        self.parent.as_ref()
    }

    /// Inserts or overwrites name in this frame.
    pub fn define(&self, name: Symbol, value: Sexp) {
        trace!("Env depth {}: define {}", self.depth(), name);
        self.bindings.borrow_mut().insert(name, value);
    }

    /// Value of name from the innermost frame binding it, falling back to
    /// the builtin table.
    pub fn lookup(&self, name: &Symbol) -> Result<Sexp, Error> {
        trace!("Env depth {}: lookup {}", self.depth(), name);
        if let Some(value) = self.find(name) {
            return Ok(value);
        }
        match builtins::lookup(name.as_str()) {
            Some(builtin) => Ok(builtin.into()),
            None => err!(UnboundSymbol(name.clone())),
        }
    }

    /// Overwrites name in the frame where it is bound.
    ///
    /// Builtins cannot be reassigned; only names bound in some frame of
    /// the chain are declared for this purpose.
    pub fn assign(&self, name: &Symbol, value: Sexp) -> Result<(), Error> {
        let mut frame = self;
        loop {
            if let Some(slot) = frame.bindings.borrow_mut().get_mut(name) {
                trace!("Env depth {}: assign {}", frame.depth(), name);
                *slot = value;
                return Ok(());
            }
            match &frame.parent {
                Some(parent) => frame = &**parent,
                None => return err!(NotDeclared(name.clone())),
            }
        }
    }

    /// Whether name is bound in this frame or any ancestor.
    pub fn is_declared(&self, name: &Symbol) -> bool {
        self.find(name).is_some()
    }

    /// Bindings of this frame alone, sorted by name.
    pub fn bindings(&self) -> Vec<(Symbol, Sexp)> {
        let mut bindings = self
            .bindings
            .borrow()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect::<Vec<_>>();
        bindings.sort_by(|a, b| a.0.cmp(&b.0));
        bindings
    }

    /// Drops every binding of this frame.
    ///
    /// Closures stored in a frame hold the frame itself, so frames must be
    /// cleared explicitly for their memory to be reclaimed.
    pub fn clear(&self) {
        trace!("Env depth {}: clear", self.depth());
        // Move bindings out first so that drops can't observe a borrowed frame.
        let old = std::mem::take(&mut *self.bindings.borrow_mut());
        drop(old);
    }

    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut frame = self;
        while let Some(parent) = &frame.parent {
            depth += 1;
            frame = &**parent;
        }
        depth
    }

    fn find(&self, name: &Symbol) -> Option<Sexp> {
        let mut frame = self;
        loop {
            if let Some(value) = frame.bindings.borrow().get(name) {
                return Some(value.clone());
            }
            match &frame.parent {
                Some(parent) => frame = &**parent,
                None => return None,
            }
        }
    }
}


impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Env depth {} with {} bindings]",
            self.depth(),
            self.bindings.borrow().len()
        )
    }
}


#[cfg(test)]
#[path = "./environment_test.rs"]
mod environment_test;
