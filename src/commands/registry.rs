// src/commands/registry.rs
use std::collections::HashMap;
use super::types::Command;

pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// Register a command under its lower-cased name, replacing any previous one.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.commands.insert(cmd.name().to_lowercase(), cmd);
    }

    /// Look up a verb case-insensitively.
    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(&name.to_lowercase()).map(|c| c.as_ref())
    }

    /// Registered verbs, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(&name.to_lowercase())
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

use super::cat::CatCommand;
use super::cd::CdCommand;
use super::clear_cmd::ClearCommand;
use super::help_cmd::HelpCommand;
use super::ls::LsCommand;
use super::status_cmd::StatusCommand;
use super::task::TaskCommand;

/// Register the shell's fixed verb set
pub fn register_builtins(registry: &mut CommandRegistry) {
    registry.register(Box::new(HelpCommand));
    registry.register(Box::new(ClearCommand));
    registry.register(Box::new(LsCommand));
    registry.register(Box::new(CdCommand));
    registry.register(Box::new(CatCommand));
    registry.register(Box::new(StatusCommand));
    registry.register(Box::new(TaskCommand));
}

/// Create a registry holding every built-in verb
pub fn create_builtin_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    register_builtins(&mut registry);
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_verbs() {
        let registry = create_builtin_registry();
        assert_eq!(
            registry.names(),
            vec!["cat", "cd", "clear", "help", "ls", "status", "task"]
        );
    }

    #[test]
    fn test_lookup_ignores_case() {
        let registry = create_builtin_registry();
        assert!(registry.contains("LS"));
        assert_eq!(registry.get("Help").map(|c| c.name()), Some("help"));
        assert!(registry.get("rm").is_none());
    }
}
