// src/commands/mod.rs
pub mod cat;
pub mod cd;
pub mod clear_cmd;
pub mod help_cmd;
pub mod ls;
pub mod registry;
pub mod status_cmd;
pub mod task;
pub mod types;

pub use registry::{create_builtin_registry, CommandRegistry};
pub use types::{Command, CommandContext, CommandOutput, OutputLine, SessionEffect};

#[cfg(test)]
pub(crate) mod testing {
    use super::CommandContext;
    use crate::agents::CodexCatalog;
    use crate::config::CustomInstructions;
    use crate::fs::{seeded_tree, FileSystemTree};
    use crate::generator::{PersonaGenerator, ResponseGenerator};
    use std::time::Duration;

    /// Owns everything a [`CommandContext`] borrows.
    pub struct Fixture {
        pub fs: FileSystemTree,
        pub cwd: String,
        pub home: String,
        pub instructions: CustomInstructions,
        pub agents: CodexCatalog,
        pub generator: Box<dyn ResponseGenerator>,
        pub task_timeout: Option<Duration>,
    }

    impl Fixture {
        pub fn new() -> Self {
            Self {
                fs: seeded_tree(),
                cwd: "/home/user".to_string(),
                home: "/home/user".to_string(),
                instructions: CustomInstructions::default(),
                agents: CodexCatalog::builtin(),
                generator: Box::new(PersonaGenerator::new(Duration::ZERO)),
                task_timeout: None,
            }
        }

        /// Context for `line`, with arguments split on whitespace after the verb.
        pub fn ctx<'a>(&'a self, line: &'a str) -> CommandContext<'a> {
            CommandContext {
                args: line.split_whitespace().skip(1).map(String::from).collect(),
                raw: line,
                cwd: &self.cwd,
                home: &self.home,
                fs: &self.fs,
                instructions: &self.instructions,
                agents: &self.agents,
                generator: self.generator.as_ref(),
                task_timeout: self.task_timeout,
            }
        }
    }
}
