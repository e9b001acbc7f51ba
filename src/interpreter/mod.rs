//! Interpreter module
//!
//! Parses shell input lines and dispatches them to registered commands.

pub mod interpreter;
pub mod types;

pub use interpreter::{tokenize, CommandInterpreter};
pub use types::SessionEnv;
