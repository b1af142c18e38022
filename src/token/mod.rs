// Public exports.
#[cfg(feature = "cli")]
pub use cli_helper::CliHelper;
pub use token::{Token, TokenInfo};
pub use tokenizer::Tokenizer;

// Public mods.
#[cfg(feature = "cli")]
pub mod cli_helper;
pub mod token;

// Private mods.
mod tokenizer;
