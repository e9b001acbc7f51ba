//! Interpreter - command line dispatch
//!
//! Splits a line into a verb and arguments, looks the verb up in the
//! command registry, and runs it against the session environment. Every
//! failure ends up as output; nothing here returns an error.

use std::sync::Arc;
use std::time::Duration;

use crate::agents::AgentRegistry;
use crate::commands::{create_builtin_registry, CommandContext, CommandOutput, CommandRegistry};
use crate::config::CustomInstructions;
use crate::generator::ResponseGenerator;
use crate::interpreter::types::SessionEnv;

/// Split a trimmed line on runs of whitespace. Empty lines yield nothing.
pub fn tokenize(line: &str) -> Vec<String> {
    line.split_whitespace().map(String::from).collect()
}

pub struct CommandInterpreter {
    registry: CommandRegistry,
    agents: Arc<dyn AgentRegistry>,
    generator: Arc<dyn ResponseGenerator>,
    instructions: CustomInstructions,
    task_timeout: Option<Duration>,
}

impl CommandInterpreter {
    /// Interpreter with the built-in verb set.
    pub fn new(agents: Arc<dyn AgentRegistry>, generator: Arc<dyn ResponseGenerator>) -> Self {
        Self::with_registry(create_builtin_registry(), agents, generator)
    }

    pub fn with_registry(
        registry: CommandRegistry,
        agents: Arc<dyn AgentRegistry>,
        generator: Arc<dyn ResponseGenerator>,
    ) -> Self {
        Self {
            registry,
            agents,
            generator,
            instructions: CustomInstructions::default(),
            task_timeout: None,
        }
    }

    pub fn with_instructions(mut self, instructions: CustomInstructions) -> Self {
        self.instructions = instructions;
        self
    }

    pub fn with_task_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.task_timeout = timeout;
        self
    }

    /// Replace the instruction strings shown by `status` and sent with tasks.
    pub fn set_instructions(&mut self, instructions: CustomInstructions) {
        self.instructions = instructions;
    }

    pub fn instructions(&self) -> &CustomInstructions {
        &self.instructions
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Run one input line against `env`.
    pub async fn execute(&self, line: &str, env: &SessionEnv) -> CommandOutput {
        let mut tokens = tokenize(line);
        if tokens.is_empty() {
            return CommandOutput::empty();
        }
        let verb = tokens.remove(0);

        let Some(command) = self.registry.get(&verb) else {
            tracing::debug!(verb = %verb, "unknown verb");
            return CommandOutput::error(format!("Command not found: {}", verb));
        };

        tracing::debug!(verb = %command.name(), args = tokens.len(), "dispatching command");
        let ctx = CommandContext {
            args: tokens,
            raw: line,
            cwd: &env.cwd,
            home: &env.home,
            fs: &env.fs,
            instructions: &self.instructions,
            agents: self.agents.as_ref(),
            generator: self.generator.as_ref(),
            task_timeout: self.task_timeout,
        };
        command.execute(ctx).await
    }
}
