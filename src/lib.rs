//! cuag-shell - the CUAG agent terminal
//!
//! An in-memory virtual filesystem and a small command shell over it
//! (`help`, `clear`, `ls`, `cd`, `cat`, `status`, `task`). The `task` verb
//! hands a prompt to a named agent through a pluggable response generator.

pub mod agents;
pub mod commands;
pub mod config;
pub mod fs;
pub mod generator;
pub mod interpreter;
pub mod logging;
pub mod shell;

pub use agents::{AgentProfile, AgentRegistry, CodexCatalog};
pub use commands::{CommandOutput, OutputLine, SessionEffect};
pub use config::{ConfigError, CustomInstructions, ShellConfig};
pub use fs::{resolve, seeded_tree, FileSystemTree, FsError, FsNode, NodeKind};
pub use generator::{GenerateError, PersonaGenerator, PromptContext, ResponseGenerator};
pub use interpreter::{CommandInterpreter, SessionEnv};
pub use shell::{Key, RecordingDisplay, Shell, ShellSession, TerminalDisplay};
