// Public exports.
pub use executor::{CallFrame, Executor};
pub use interpreter::{Interpreter, MAX_EVAL_DEPTH};
pub use special_form::SpecialForm;

// Public mods.
pub mod executor;
pub mod interpreter;
pub mod special_form;

// Private mods.
mod wrappers;
