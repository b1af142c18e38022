use std::cell::RefCell;
use std::convert::TryFrom;
use std::mem;
use std::rc::Rc;

use super::sexp::Sexp;


/// Pair cell shared through Rc.
///
/// Both fields are individually mutable so that set-car!/set-cdr! are
/// observed through every alias of the cell.
#[derive(Debug)]
pub struct Cons {
    car: RefCell<Sexp>,
    cdr: RefCell<Sexp>,
}

impl Cons {
    pub fn new(car: Sexp, cdr: Sexp) -> Cons {
        Cons {
            car: RefCell::new(car),
            cdr: RefCell::new(cdr),
        }
    }

    pub fn car(&self) -> Sexp {
        self.car.borrow().clone()
    }

    pub fn cdr(&self) -> Sexp {
        self.cdr.borrow().clone()
    }

    pub fn set_car(&self, new: Sexp) {
        *self.car.borrow_mut() = new;
    }

    pub fn set_cdr(&self, new: Sexp) {
        *self.cdr.borrow_mut() = new;
    }
}


// Structural comparison, walking cdr chains without recursion.
impl PartialEq for Cons {
    fn eq(&self, other: &Self) -> bool {
        if *self.car.borrow() != *other.car.borrow() {
            return false;
        }
        let mut a = self.cdr();
        let mut b = other.cdr();
        loop {
            let (x, y) = match (&a, &b) {
                (Sexp::Cons(x), Sexp::Cons(y)) => (x.clone(), y.clone()),
                _ => return a == b,
            };
            if Rc::ptr_eq(&x, &y) {
                return true;
            }
            if *x.car.borrow() != *y.car.borrow() {
                return false;
            }
            a = x.cdr();
            b = y.cdr();
        }
    }
}

// Frees uniquely-owned cells with an explicit worklist, so that neither long
// lists nor deep car nesting exhaust the stack.
impl Drop for Cons {
    fn drop(&mut self) {
        let mut pending = vec![
            mem::take(self.car.get_mut()),
            mem::take(self.cdr.get_mut()),
        ];
        while let Some(sexp) = pending.pop() {
            if let Sexp::Cons(cell) = sexp {
                if let Ok(mut cell) = Rc::try_unwrap(cell) {
                    pending.push(mem::take(cell.car.get_mut()));
                    pending.push(mem::take(cell.cdr.get_mut()));
                }
            }
        }
    }
}


// TryFrom<Sexp-like> impls.
impl TryFrom<Sexp> for Rc<Cons> {
    type Error = Sexp;

    fn try_from(value: Sexp) -> Result<Self, Self::Error> {
        if let Sexp::Cons(cons) = value {
            Ok(cons)
        } else {
            Err(value)
        }
    }
}

impl<'a> TryFrom<&'a Sexp> for &'a Rc<Cons> {
    type Error = &'a Sexp;

    fn try_from(value: &'a Sexp) -> Result<Self, Self::Error> {
        if let Sexp::Cons(cons) = value {
            Ok(cons)
        } else {
            Err(value)
        }
    }
}
