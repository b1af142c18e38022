//! Native procedures available in every session.
//!
//! Builtins receive their arguments already evaluated. Any type, arity, or
//! index violation is reported as a Runtime Error.

use std::borrow::Cow;
use std::collections::HashMap;
use std::convert::TryFrom;
use std::rc::Rc;

use lazy_static::lazy_static;

use crate::error::{Error, ExpectedCount};
use crate::primitive::builtin::Args;
use crate::primitive::{BuiltIn, Number, Primitive};
use crate::sexp::{self, Cons, Sexp};


macro_rules! builtins {
    [$($n:expr => $x:expr),+ $(,)?] => {
        {
            let mut m = HashMap::new();
            $(
                m.insert($n, BuiltIn::new($n, $x));
            )+
            m
        }
    };
}

lazy_static! {
    static ref BUILTINS: HashMap<&'static str, BuiltIn> = builtins![
        "+" => add,
        "-" => sub,
        "*" => mul,
        "/" => div,
        "=" => num_eq,
        "<" => lt,
        ">" => gt,
        "<=" => le,
        ">=" => ge,
        "min" => min,
        "max" => max,
        "abs" => abs,
        "number?" => is_number,
        "boolean?" => is_boolean,
        "symbol?" => is_symbol,
        "null?" => is_null,
        "pair?" => is_pair,
        "list?" => is_list,
        "not" => not,
        "cons" => cons,
        "car" => car,
        "cdr" => cdr,
        "list" => list,
        "list-ref" => list_ref,
        "list-tail" => list_tail,
    ];
}

pub fn lookup(name: &str) -> Option<BuiltIn> {
    BUILTINS.get(name).copied()
}

/// Names of all builtins, sorted.
pub fn names() -> Vec<&'static str> {
    let mut names = BUILTINS.keys().copied().collect::<Vec<_>>();
    names.sort_unstable();
    names
}


fn number(arg: Sexp) -> Result<Number, Error> {
    match Number::try_from(arg) {
        Ok(num) => Ok(num),
        Err(original) => err!(InvalidArgument {
            given: original,
            expected: Cow::Borrowed("a Number"),
        }),
    }
}

fn numbers(args: Args) -> Result<Vec<Number>, Error> {
    args.into_iter().map(number).collect()
}

fn pair(arg: Sexp) -> Result<Rc<Cons>, Error> {
    match <Rc<Cons>>::try_from(arg) {
        Ok(cell) => Ok(cell),
        Err(original) => err!(InvalidArgument {
            given: original,
            expected: Cow::Borrowed("a Pair"),
        }),
    }
}

// Left fold over Numbers, starting from init.
fn fold<F>(args: Args, init: Number, f: F) -> Result<Sexp, Error>
where
    F: Fn(Number, Number) -> Result<Number, Error>,
{
    let mut curr = init;
    for num in numbers(args)? {
        curr = f(curr, num)?;
    }
    Ok(curr.into())
}

// Left fold over at least one Number, starting from the first.
fn fold_first<F>(args: Args, f: F) -> Result<Sexp, Error>
where
    F: Fn(Number, Number) -> Result<Number, Error>,
{
    let nums = numbers(args)?;
    let (first, rest) = match nums.split_first() {
        Some(split) => split,
        None => {
            return err!(WrongArgumentCount {
                given: 0,
                expected: ExpectedCount::AtLeast(1),
            })
        }
    };

    let mut curr = *first;
    for num in rest {
        curr = f(curr, *num)?;
    }
    Ok(curr.into())
}

fn chain<F>(args: Args, holds: F) -> Result<Sexp, Error>
where
    F: Fn(&Number, &Number) -> bool,
{
    let nums = numbers(args)?;
    Ok(nums.windows(2).all(|w| holds(&w[0], &w[1])).into())
}


pub fn add(args: Args) -> Result<Sexp, Error> {
    fold(args, Number::new(0), Number::checked_add)
}

pub fn sub(args: Args) -> Result<Sexp, Error> {
    fold_first(args, Number::checked_sub)
}

pub fn mul(args: Args) -> Result<Sexp, Error> {
    fold(args, Number::new(1), Number::checked_mul)
}

pub fn div(args: Args) -> Result<Sexp, Error> {
    fold_first(args, Number::checked_div)
}

pub fn num_eq(args: Args) -> Result<Sexp, Error> {
    chain(args, |a, b| a == b)
}

pub fn lt(args: Args) -> Result<Sexp, Error> {
    chain(args, |a, b| a < b)
}

pub fn gt(args: Args) -> Result<Sexp, Error> {
    chain(args, |a, b| a > b)
}

pub fn le(args: Args) -> Result<Sexp, Error> {
    chain(args, |a, b| a <= b)
}

pub fn ge(args: Args) -> Result<Sexp, Error> {
    chain(args, |a, b| a >= b)
}

pub fn min(args: Args) -> Result<Sexp, Error> {
    fold_first(args, |a, b| Ok(std::cmp::min(a, b)))
}

pub fn max(args: Args) -> Result<Sexp, Error> {
    fold_first(args, |a, b| Ok(std::cmp::max(a, b)))
}

pub fn abs(args: Args) -> Result<Sexp, Error> {
    let (num,) = break_args!(args => (Number))?;
    Ok(num.checked_abs()?.into())
}


pub fn is_number(args: Args) -> Result<Sexp, Error> {
    let (arg,) = break_args!(args => (Sexp))?;
    Ok(matches!(arg, Sexp::Primitive(Primitive::Number(_))).into())
}

pub fn is_boolean(args: Args) -> Result<Sexp, Error> {
    let (arg,) = break_args!(args => (Sexp))?;
    Ok(matches!(&arg, Sexp::Primitive(Primitive::Symbol(s)) if s.is_boolean_literal()).into())
}

pub fn is_symbol(args: Args) -> Result<Sexp, Error> {
    let (arg,) = break_args!(args => (Sexp))?;
    Ok(matches!(arg, Sexp::Primitive(Primitive::Symbol(_))).into())
}

pub fn is_null(args: Args) -> Result<Sexp, Error> {
    let (arg,) = break_args!(args => (Sexp))?;
    Ok(arg.is_nil().into())
}

pub fn is_pair(args: Args) -> Result<Sexp, Error> {
    let (arg,) = break_args!(args => (Sexp))?;
    Ok(arg.is_pair().into())
}

pub fn is_list(args: Args) -> Result<Sexp, Error> {
    let (arg,) = break_args!(args => (Sexp))?;
    Ok(arg.list_length().is_some().into())
}

pub fn not(args: Args) -> Result<Sexp, Error> {
    let (arg,) = break_args!(args => (Sexp))?;
    Ok((!arg.is_truthy()).into())
}


pub fn cons(args: Args) -> Result<Sexp, Error> {
    let (car, cdr) = break_args!(args => (Sexp, Sexp))?;
    Ok(sexp::cons(car, cdr))
}

pub fn car(args: Args) -> Result<Sexp, Error> {
    let (arg,) = break_args!(args => (Sexp))?;
    Ok(pair(arg)?.car())
}

pub fn cdr(args: Args) -> Result<Sexp, Error> {
    let (arg,) = break_args!(args => (Sexp))?;
    Ok(pair(arg)?.cdr())
}

pub fn list(args: Args) -> Result<Sexp, Error> {
    Ok(args.into())
}

// Follows k cdrs from lst. Once the walk revisits a cell, the rest of k is
// reduced modulo the cycle length.
fn nth_tail(lst: &Sexp, k: Number) -> Result<Sexp, Error> {
    let index = k.as_i64();
    if index < 0 {
        return err!(InvalidArgument {
            given: k.into(),
            expected: Cow::Borrowed("a non-negative index"),
        });
    }

    let mut seen = HashMap::<*const Cons, i64>::new();
    let mut reduced = false;
    let mut target = index;
    let mut step = 0;
    let mut curr = lst.clone();
    while step < target {
        let cell = match &curr {
            Sexp::Cons(cell) => cell.clone(),
            _ => {
                return err!(IndexOutOfRange {
                    index,
                    given: lst.clone(),
                })
            }
        };
        if !reduced {
            if let Some(first) = seen.insert(Rc::as_ptr(&cell), step) {
                target = step + (target - step) % (step - first);
                reduced = true;
                continue;
            }
        }
        curr = cell.cdr();
        step += 1;
    }
    Ok(curr)
}

pub fn list_ref(args: Args) -> Result<Sexp, Error> {
    let (lst, k) = break_args!(args => (Sexp, Number))?;
    match nth_tail(&lst, k)? {
        Sexp::Cons(cell) => Ok(cell.car()),
        _ => err!(IndexOutOfRange {
            index: k.as_i64(),
            given: lst,
        }),
    }
}

pub fn list_tail(args: Args) -> Result<Sexp, Error> {
    let (lst, k) = break_args!(args => (Sexp, Number))?;
    nth_tail(&lst, k)
}


#[cfg(test)]
#[path = "./builtins_test.rs"]
mod builtins_test;
