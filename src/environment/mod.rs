// Public exports.
pub use environment::Environment;

// Public mods.
pub mod environment;
