//! Representation of user procedures (closures).

use std::fmt;
use std::rc::Rc;

use derivative::Derivative;
use derive_getters::Getters;

use super::Symbol;
use crate::environment::Environment;
use crate::sexp::Sexp;


/// Procedure created by lambda, closed over its defining Environment.
///
/// Two procedures are equal only if they share the captured frame in
/// addition to having the same source.
#[derive(Clone, Derivative, Getters)]
#[derivative(Debug, PartialEq)]
pub struct Procedure {
    params: Vec<Symbol>,
    body: Vec<Sexp>,
    #[derivative(Debug = "ignore", PartialEq(compare_with = "same_env"))]
    env: Rc<Environment>,
}

impl Procedure {
    pub fn new(params: Vec<Symbol>, body: Vec<Sexp>, env: Rc<Environment>) -> Self {
        Self { params, body, env }
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

fn same_env(a: &Rc<Environment>, b: &Rc<Environment>) -> bool {
    Rc::ptr_eq(a, b)
}


impl fmt::Display for Procedure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(lambda (")?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", param)?;
        }
        write!(f, ")")?;
        for expr in &self.body {
            write!(f, " {}", expr)?;
        }
        write!(f, ")")
    }
}


impl_try_from!(Procedure;
               Primitive  ->  Procedure,
               Sexp       ->  Procedure,
               ref Sexp   ->  ref Procedure,
);
