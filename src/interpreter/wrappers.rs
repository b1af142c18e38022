//! Shape checks for special forms.
//!
//! Each wrapper takes the whole form (for error reporting) and its unevaluated
//! operands, and breaks the operands into the pieces the executor needs. Any
//! violation is a Syntax Error naming the form.

use std::borrow::Cow;
use std::collections::HashSet;
use std::convert::TryFrom;

use super::special_form::SpecialForm;
use crate::error::Error;
use crate::primitive::Symbol;
use crate::sexp::Sexp;


pub enum Definition {
    Value(Symbol, Sexp),
    Procedure(Symbol, Vec<Symbol>, Vec<Sexp>),
}


fn bad_form<T, R>(form: SpecialForm, whole: &Sexp, reason: R) -> Result<T, Error>
where
    R: Into<Cow<'static, str>>,
{
    err!(BadForm {
        form: form.name(),
        given: whole.clone(),
        reason: reason.into(),
    })
}

fn operand_list(form: SpecialForm, whole: &Sexp, operands: &Sexp) -> Result<Vec<Sexp>, Error> {
    match operands.to_vec() {
        Ok(v) => Ok(v),
        Err(_) => bad_form(form, whole, "improper operand list"),
    }
}

// Target of a binding form; boolean literals cannot be rebound.
fn binding_name(form: SpecialForm, whole: &Sexp, sexp: &Sexp) -> Result<Symbol, Error> {
    match <&Symbol>::try_from(sexp) {
        Ok(symbol) if !symbol.is_boolean_literal() => Ok(symbol.clone()),
        Ok(symbol) => bad_form(form, whole, format!("cannot bind {}", symbol)),
        Err(_) => bad_form(form, whole, format!("expected a name, found {}", sexp)),
    }
}

fn param_list(form: SpecialForm, whole: &Sexp, params: &Sexp) -> Result<Vec<Symbol>, Error> {
    let elems = match params.to_vec() {
        Ok(v) => v,
        Err(_) => return bad_form(form, whole, "parameters must be a proper list"),
    };

    let mut seen = HashSet::with_capacity(elems.len());
    let mut symbols = Vec::with_capacity(elems.len());
    for elem in &elems {
        let symbol = binding_name(form, whole, elem)?;
        if !seen.insert(symbol.clone()) {
            return bad_form(form, whole, format!("duplicate parameter {}", symbol));
        }
        symbols.push(symbol);
    }
    Ok(symbols)
}


pub fn quote_wrapper(whole: &Sexp, operands: &Sexp) -> Result<Sexp, Error> {
    let mut v = operand_list(SpecialForm::Quote, whole, operands)?;
    if v.len() != 1 {
        return bad_form(SpecialForm::Quote, whole, "expected exactly 1 operand");
    }
    Ok(v.remove(0))
}

/// Returns (condition, consequent, alternative).
pub fn if_wrapper(whole: &Sexp, operands: &Sexp) -> Result<(Sexp, Sexp, Option<Sexp>), Error> {
    let v = operand_list(SpecialForm::If, whole, operands)?;
    let mut iter = v.into_iter();
    match (iter.next(), iter.next(), iter.next(), iter.next()) {
        (Some(cond), Some(then), alt, None) => Ok((cond, then, alt)),
        _ => bad_form(SpecialForm::If, whole, "expected 2 or 3 operands"),
    }
}

pub fn define_wrapper(whole: &Sexp, operands: &Sexp) -> Result<Definition, Error> {
    let form = SpecialForm::Define;
    let v = operand_list(form, whole, operands)?;
    let (target, rest) = match v.split_first() {
        Some(split) => split,
        None => return bad_form(form, whole, "missing name"),
    };

    match target {
        Sexp::Cons(cell) => {
            let name = binding_name(form, whole, &cell.car())?;
            let params = param_list(form, whole, &cell.cdr())?;
            if rest.is_empty() {
                return bad_form(form, whole, "missing procedure body");
            }
            Ok(Definition::Procedure(name, params, rest.to_vec()))
        }
        _ => {
            let name = binding_name(form, whole, target)?;
            match rest {
                [expr] => Ok(Definition::Value(name, expr.clone())),
                [] => bad_form(form, whole, "missing value"),
                _ => bad_form(form, whole, "expected exactly 2 operands"),
            }
        }
    }
}

/// Returns (target, value expression). A missing value is only reported
/// once the target is known to be declared, so it is left to the caller.
pub fn set_wrapper(whole: &Sexp, operands: &Sexp) -> Result<(Symbol, Option<Sexp>), Error> {
    let form = SpecialForm::Set;
    let v = operand_list(form, whole, operands)?;
    if v.len() > 2 {
        return bad_form(form, whole, "expected exactly 2 operands");
    }

    let mut iter = v.into_iter();
    let target = match iter.next() {
        Some(target) => binding_name(form, whole, &target)?,
        None => return bad_form(form, whole, "missing name"),
    };
    Ok((target, iter.next()))
}

/// Returns (params, body).
pub fn lambda_wrapper(whole: &Sexp, operands: &Sexp) -> Result<(Vec<Symbol>, Vec<Sexp>), Error> {
    let form = SpecialForm::Lambda;
    let mut v = operand_list(form, whole, operands)?;
    if v.is_empty() {
        return bad_form(form, whole, "missing parameter list");
    }

    let body = v.split_off(1);
    let params = param_list(form, whole, &v[0])?;
    if body.is_empty() {
        return bad_form(form, whole, "missing procedure body");
    }
    Ok((params, body))
}

/// Returns (target, value) for set-car! and set-cdr!.
pub fn pair_mutation_wrapper(
    form: SpecialForm,
    whole: &Sexp,
    operands: &Sexp,
) -> Result<(Sexp, Sexp), Error> {
    let v = operand_list(form, whole, operands)?;
    let mut iter = v.into_iter();
    match (iter.next(), iter.next(), iter.next()) {
        (Some(target), Some(value), None) => Ok((target, value)),
        _ => bad_form(form, whole, "expected exactly 2 operands"),
    }
}

/// Operands of and/or, any number of them.
pub fn sequence_wrapper(form: SpecialForm, whole: &Sexp, operands: &Sexp) -> Result<Vec<Sexp>, Error> {
    operand_list(form, whole, operands)
}
