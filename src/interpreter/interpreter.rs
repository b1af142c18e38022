use log::debug;
use std::rc::Rc;

use super::executor::Executor;
use crate::environment::Environment;
use crate::error::Error;
use crate::parser::parse_sexp;
use crate::primitive::Symbol;
use crate::sexp::Sexp;

/// Default evaluation nesting cap. A non-tail user procedure call costs two
/// to three levels.
pub const MAX_EVAL_DEPTH: usize = 10_000;


/// Session owning a global frame that persists across evaluations.
///
/// Example:
///   let mut interpreter = Interpreter::new();
///   interpreter.run("(define x 3)")?;
///   assert_eq!(interpreter.run("(+ x 1)")?, "4");
pub struct Interpreter {
    global: Rc<Environment>,
    max_depth: usize,
}

impl Interpreter {
    pub fn new() -> Self {
        Self {
            global: Environment::new_global(),
            max_depth: MAX_EVAL_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn global(&self) -> &Rc<Environment> {
        &self.global
    }

    /// Evaluates one parsed expression in the global frame.
    pub fn eval(&mut self, expr: &Sexp) -> Result<Sexp, Error> {
        let mut executor = Executor::new(self.max_depth);
        executor.interpret(expr, &self.global)
    }

    /// Parses exactly one expression from text and evaluates it.
    pub fn eval_str(&mut self, text: &str) -> Result<Sexp, Error> {
        let expr = parse_sexp(text)?;
        self.eval(&expr)
    }

    /// Evaluates text and prints the result.
    pub fn run(&mut self, text: &str) -> Result<String, Error> {
        let result = self.eval_str(text)?.to_string();
        debug!("Result: {}", result);
        Ok(result)
    }

    /// Bindings created in this session, sorted by name.
    pub fn global_bindings(&self) -> Vec<(Symbol, Sexp)> {
        self.global.bindings()
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Interpreter {
    fn drop(&mut self) {
        // Procedures defined at top level hold the global frame.
        self.global.clear();
    }
}
