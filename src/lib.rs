//! Interpreter for a small Scheme dialect over 64-bit integers, symbols,
//! pairs, and procedures.
//!
//! Text flows through the Tokenizer and Parser into Sexps, which the
//! Interpreter evaluates against its persistent global Environment.
//!
//! Note that this crate does *not* setup logging, clients should take care
//! of that. See: https://github.com/rust-lang/log#in-executables.

#[macro_use]
pub mod error;
#[macro_use]
pub mod sexp;

pub mod builtins;
pub mod continuation;
pub mod environment;
pub mod interpreter;
pub mod parser;
pub mod primitive;
pub mod token;

pub mod prelude {
    pub use crate::environment::Environment;
    pub use crate::error::{ErrKind, Error, ErrorCategory, ExpectedCount};
    pub use crate::interpreter::Interpreter;
    pub use crate::parser::parse_sexp;
    pub use crate::primitive::{BuiltIn, Number, Primitive, Procedure, Symbol, ToSymbol};
    pub use crate::sexp::{Cons, ConsList, Sexp};
    // Macros.
    pub use crate::{err, err_ctx};
}
