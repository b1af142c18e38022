//! Evaluation of S-exps against an Environment chain.

use log::debug;
use std::fmt;
use std::rc::Rc;

use super::special_form::SpecialForm;
use super::wrappers::*;
use crate::continuation::Continuation;
use crate::environment::Environment;
use crate::error::{Error, ExpectedCount};
use crate::primitive::{Primitive, Procedure};
use crate::sexp::Sexp;

// Minimum stack left before interpret continues on a fresh heap segment.
const STACK_RED_ZONE: usize = 128 * 1024;
const STACK_SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Frame of the call trace attached to errors.
#[derive(Clone, Debug, PartialEq)]
pub enum CallFrame {
    TopLevel,
    // Combination that applied a user procedure.
    Apply(Sexp),
}

/// Evaluates one top-level expression.
///
/// Tracks the active user-procedure applications, and caps evaluation
/// nesting so that runaway recursion becomes an Error. Nesting below the cap
/// runs on stack segments grown on demand, so the cap is the only limit.
pub struct Executor {
    cont: Continuation<CallFrame>,
    depth: usize,
    max_depth: usize,
}


impl Executor {
    pub fn new(max_depth: usize) -> Self {
        Self {
            cont: Continuation::new(CallFrame::TopLevel),
            depth: 0,
            max_depth,
        }
    }

    pub fn cont(&self) -> &Continuation<CallFrame> {
        &self.cont
    }

    pub fn interpret(&mut self, expr: &Sexp, env: &Rc<Environment>) -> Result<Sexp, Error> {
        if self.depth >= self.max_depth {
            return err_ctx!(self.cont, RecursionLimit(self.max_depth));
        }

        self.depth += 1;
        let res = stacker::maybe_grow(STACK_RED_ZONE, STACK_SEGMENT_SIZE, || {
            self.interpret_inner(expr, env)
        });
        self.depth -= 1;
        res
    }

    fn interpret_inner(&mut self, expr: &Sexp, env: &Rc<Environment>) -> Result<Sexp, Error> {
        debug!("Interpreting: {}", expr);
        let cell = match expr {
            Sexp::Nil => return err!(EmptyCombination),
            Sexp::Primitive(Primitive::Symbol(symbol)) => {
                if symbol.is_boolean_literal() {
                    return Ok(expr.clone());
                }
                return env.lookup(symbol);
            }
            Sexp::Primitive(_) => return Ok(expr.clone()),
            Sexp::Cons(cell) => cell,
        };

        let head = cell.car();
        let operands = cell.cdr();
        if let Sexp::Primitive(Primitive::Symbol(symbol)) = &head {
            if let Some(form) = SpecialForm::from_symbol(symbol) {
                return self.special_form(form, expr, &operands, env);
            }
        }

        let operands = match operands.to_vec() {
            Ok(v) => v,
            Err(_) => return err!(ImproperCombination(expr.clone())),
        };
        let proc = match head {
            Sexp::Primitive(Primitive::Symbol(_)) | Sexp::Cons(_) => self.interpret(&head, env)?,
            _ => return err!(InvalidOperator(head)),
        };
        if !matches!(&proc, Sexp::Primitive(p) if p.is_procedure()) {
            return err!(NotAProcedure(proc));
        }

        let args = self.evlis(&operands, env)?;
        self.apply(proc, args, expr)
    }

    /// Evaluates operands left to right.
    fn evlis(&mut self, operands: &[Sexp], env: &Rc<Environment>) -> Result<Vec<Sexp>, Error> {
        let mut args = Vec::with_capacity(operands.len());
        for operand in operands {
            args.push(self.interpret(operand, env)?);
        }
        Ok(args)
    }

    fn apply(&mut self, proc: Sexp, args: Vec<Sexp>, call: &Sexp) -> Result<Sexp, Error> {
        match proc {
            Sexp::Primitive(Primitive::BuiltIn(builtin)) => builtin.call(args),
            Sexp::Primitive(Primitive::Procedure(procedure)) => {
                self.cont.push(CallFrame::Apply(call.clone()));
                let res = self.apply_procedure(&procedure, args).map_err(|mut err| {
                    if err.cont().is_none() {
                        err.set_cont(self.cont.clone());
                    }
                    err
                });
                self.cont.pop();
                res
            }
            _ => err!(NotAProcedure(proc)),
        }
    }

    // Binds args positionally in a fresh frame under the captured
    // environment, then evaluates the body there.
    fn apply_procedure(&mut self, procedure: &Procedure, args: Vec<Sexp>) -> Result<Sexp, Error> {
        if args.len() != procedure.arity() {
            return err!(WrongArgumentCount {
                given: args.len(),
                expected: ExpectedCount::Exactly(procedure.arity()),
            });
        }

        let frame = Environment::with_parent(procedure.env().clone());
        for (param, arg) in procedure.params().iter().zip(args) {
            frame.define(param.clone(), arg);
        }
        self.sequence(procedure.body(), &frame)
    }

    // Value of the last expression.
    fn sequence(&mut self, body: &[Sexp], env: &Rc<Environment>) -> Result<Sexp, Error> {
        let mut result = Sexp::Nil;
        for expr in body {
            result = self.interpret(expr, env)?;
        }
        Ok(result)
    }


    fn special_form(
        &mut self,
        form: SpecialForm,
        whole: &Sexp,
        operands: &Sexp,
        env: &Rc<Environment>,
    ) -> Result<Sexp, Error> {
        match form {
            SpecialForm::Quote => quote_wrapper(whole, operands),
            SpecialForm::If => {
                let (cond, then, alt) = if_wrapper(whole, operands)?;
                if self.interpret(&cond, env)?.is_truthy() {
                    self.interpret(&then, env)
                } else {
                    match alt {
                        Some(alt) => self.interpret(&alt, env),
                        None => Ok(Sexp::Nil),
                    }
                }
            }
            SpecialForm::Define => match define_wrapper(whole, operands)? {
                Definition::Value(name, expr) => {
                    let value = self.interpret(&expr, env)?;
                    env.define(name, value.clone());
                    Ok(value)
                }
                Definition::Procedure(name, params, body) => {
                    let value: Sexp = Procedure::new(params, body, env.clone()).into();
                    env.define(name, value.clone());
                    Ok(value)
                }
            },
            SpecialForm::Set => self.set(whole, operands, env),
            SpecialForm::Lambda => {
                let (params, body) = lambda_wrapper(whole, operands)?;
                Ok(Procedure::new(params, body, env.clone()).into())
            }
            SpecialForm::SetCar | SpecialForm::SetCdr => {
                let (target, value) = pair_mutation_wrapper(form, whole, operands)?;
                let cell = match self.interpret(&target, env)? {
                    Sexp::Cons(cell) => cell,
                    other => {
                        return err!(InvalidArgument {
                            given: other,
                            expected: "a Pair".into(),
                        })
                    }
                };
                let value = self.interpret(&value, env)?;
                if form == SpecialForm::SetCar {
                    cell.set_car(value);
                } else {
                    cell.set_cdr(value);
                }
                Ok(Sexp::Cons(cell))
            }
            SpecialForm::And => {
                let mut result = Sexp::boolean(true);
                for expr in sequence_wrapper(form, whole, operands)? {
                    result = self.interpret(&expr, env)?;
                    if !result.is_truthy() {
                        break;
                    }
                }
                Ok(result)
            }
            SpecialForm::Or => {
                for expr in sequence_wrapper(form, whole, operands)? {
                    let result = self.interpret(&expr, env)?;
                    if result.is_truthy() {
                        return Ok(result);
                    }
                }
                Ok(Sexp::boolean(false))
            }
        }
    }

    fn set(&mut self, whole: &Sexp, operands: &Sexp, env: &Rc<Environment>) -> Result<Sexp, Error> {
        let (name, expr) = set_wrapper(whole, operands)?;
        if !env.is_declared(&name) {
            return err!(NotDeclared(name));
        }
        let expr = match expr {
            Some(expr) => expr,
            None => {
                return err!(BadForm {
                    form: SpecialForm::Set.name(),
                    given: whole.clone(),
                    reason: "missing value".into(),
                })
            }
        };

        let value = self.interpret(&expr, env)?;
        if !matches!(value, Sexp::Primitive(Primitive::Number(_))) {
            return err!(BadForm {
                form: SpecialForm::Set.name(),
                given: whole.clone(),
                reason: format!("value {} is not an integer", value).into(),
            });
        }
        env.assign(&name, value.clone())?;
        Ok(value)
    }
}


impl fmt::Display for CallFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallFrame::TopLevel => write!(f, "<top level>"),
            CallFrame::Apply(call) => write!(f, "{}", call),
        }
    }
}
