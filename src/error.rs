//! Representation of errors raised while lexing, reading, or evaluating.
//!
//! Every ErrKind belongs to exactly one ErrorCategory, which is what a
//! front end reports (syntax, name, or runtime error). Errors raised during
//! the application of user procedures additionally carry the call trace
//! active at the time.

use std::borrow::Cow;
use std::fmt;

use self::ErrKind::*;
use self::ExpectedCount::*;
use crate::continuation::Continuation;
use crate::interpreter::CallFrame;
use crate::primitive::Symbol;
use crate::sexp::Sexp;
use crate::token::TokenInfo;


/// Creates a context-free Error wrapped in Err.
#[macro_export]
macro_rules! err {
    ($($kind:tt)+) => {
        Err($crate::error::Error::empty_context(
            $crate::error::ErrKind::$($kind)+,
        ))
    };
}

/// Creates an Error with a call trace, wrapped in Err.
#[macro_export]
macro_rules! err_ctx {
    ($cont:expr, $($kind:tt)+) => {
        Err($crate::error::Error::with_context(
            $cont.clone(),
            $crate::error::ErrKind::$($kind)+,
        ))
    };
}


pub type ErrorCont = Continuation<CallFrame>;

pub struct Error {
    cont: Option<ErrorCont>,
    kind: ErrKind,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorCategory {
    Syntax,
    Name,
    Runtime,
}

#[derive(Debug)]
pub enum ErrKind {
    // Lexing.
    InvalidCharacter {
        found: char,
        line: usize,
        col: usize,
    },
    IntegerOutOfRange {
        literal: String,
        line: usize,
        col: usize,
    },

    // Reading.
    BadSyntax(TokenInfo),
    UnclosedDottedPair(TokenInfo),
    TrailingInput(TokenInfo),
    DepthOverflow(usize),

    // Expression shape.
    BadForm {
        form: &'static str,
        given: Sexp,
        reason: Cow<'static, str>,
    },
    InvalidOperator(Sexp),
    ImproperCombination(Sexp),

    // Names.
    UnboundSymbol(Symbol),
    NotDeclared(Symbol),

    // Evaluation.
    EmptyCombination,
    NotAProcedure(Sexp),
    InvalidArgument {
        given: Sexp,
        expected: Cow<'static, str>,
    },
    WrongArgumentCount {
        given: usize,
        expected: ExpectedCount,
    },
    IndexOutOfRange {
        index: i64,
        given: Sexp,
    },
    IntegerOverflow(&'static str),
    DivisionByZero,
    RecursionLimit(usize),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExpectedCount {
    Exactly(usize),
    AtLeast(usize),
}


impl Error {
    /// Prefer using err! for convenience.
    pub fn empty_context(kind: ErrKind) -> Self {
        Self { cont: None, kind }
    }

    /// Prefer using err_ctx! for convenience.
    pub fn with_context(cont: ErrorCont, kind: ErrKind) -> Self {
        Self {
            cont: Some(cont),
            kind,
        }
    }

    pub fn kind(&self) -> &ErrKind {
        &self.kind
    }

    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }

    pub fn cont(&self) -> Option<&ErrorCont> {
        self.cont.as_ref()
    }

    pub fn set_cont(&mut self, cont: ErrorCont) {
        self.cont = Some(cont)
    }

    pub fn consume(self) -> ErrKind {
        self.kind
    }
}

impl ErrKind {
    pub fn category(&self) -> ErrorCategory {
        match self {
            InvalidCharacter { .. }
            | IntegerOutOfRange { .. }
            | BadSyntax(_)
            | UnclosedDottedPair(_)
            | TrailingInput(_)
            | DepthOverflow(_)
            | BadForm { .. }
            | InvalidOperator(_)
            | ImproperCombination(_) => ErrorCategory::Syntax,

            UnboundSymbol(_) | NotDeclared(_) => ErrorCategory::Name,

            EmptyCombination
            | NotAProcedure(_)
            | InvalidArgument { .. }
            | WrongArgumentCount { .. }
            | IndexOutOfRange { .. }
            | IntegerOverflow(_)
            | DivisionByZero
            | RecursionLimit(_) => ErrorCategory::Runtime,
        }
    }
}


impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::Syntax => write!(f, "Syntax Error"),
            ErrorCategory::Name => write!(f, "Name Error"),
            ErrorCategory::Runtime => write!(f, "Runtime Error"),
        }
    }
}

impl fmt::Display for ErrKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidCharacter { found, line, col } => {
                write!(f, "Invalid character {:?} @ ({}, {})", found, line, col)
            }
            IntegerOutOfRange { literal, line, col } => write!(
                f,
                "Integer literal out of range: {} @ ({}, {})",
                literal, line, col
            ),
            BadSyntax(token) => write!(f, "Bad syntax: unexpected {}", token),
            UnclosedDottedPair(token) => {
                write!(f, "Bad syntax: expected ) after dotted tail, found {}", token)
            }
            TrailingInput(token) => write!(f, "Trailing input: {}", token),
            DepthOverflow(depth) => write!(f, "Expression nested deeper than {}", depth),
            BadForm {
                form,
                given,
                reason,
            } => write!(f, "Bad syntax for {}: {} in {}", form, reason, given),
            InvalidOperator(op) => write!(f, "Invalid operator position: {}", op),
            ImproperCombination(sexp) => write!(f, "Improper combination: {}", sexp),
            UnboundSymbol(symbol) => write!(f, "Unbound symbol: \"{}\"", symbol),
            NotDeclared(symbol) => write!(f, "Not declared for set!: \"{}\"", symbol),
            EmptyCombination => write!(f, "Empty combination has no operator"),
            NotAProcedure(sexp) => write!(f, "Not a procedure: {}", sexp),
            InvalidArgument { given, expected } => write!(
                f,
                "Invalid argument: given {}, expected {}",
                given, expected
            ),
            WrongArgumentCount { given, expected } => write!(
                f,
                "Wrong argument count: given {}, expected {}",
                given, expected
            ),
            IndexOutOfRange { index, given } => {
                write!(f, "Index {} out of range for {}", index, given)
            }
            IntegerOverflow(op) => write!(f, "Integer overflow in {}", op),
            DivisionByZero => write!(f, "Division by zero"),
            RecursionLimit(depth) => write!(f, "Evaluation nested deeper than {}", depth),
        }
    }
}

impl fmt::Display for ExpectedCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exactly(exactly) => write!(f, "{}", exactly),
            AtLeast(minimum) => write!(f, "at least {}", minimum),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.category(), self.kind)?;

        if let Some(cont) = &self.cont {
            for (i, frame) in cont.iter().enumerate() {
                write!(f, "\n{})  {}", i, frame)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.kind)?;
        if let Some(cont) = &self.cont {
            write!(f, " {}", cont)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}
