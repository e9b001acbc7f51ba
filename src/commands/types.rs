// src/commands/types.rs
use async_trait::async_trait;
use std::time::Duration;

use crate::agents::AgentRegistry;
use crate::config::CustomInstructions;
use crate::fs::{DirEntry, FileSystemTree};
use crate::generator::ResponseGenerator;

/// One line of command output, tagged for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputLine {
    Text(String),
    /// Section title, e.g. the first line of `help`
    Heading(String),
    /// Indented `label` followed by `text`; the label is highlighted
    Labeled { label: String, text: String },
    /// `STATUS: <text>` progress marker
    Status(String),
    /// Directory listing, rendered on a single line
    Listing(Vec<DirEntry>),
    Error(String),
}

impl OutputLine {
    pub fn text(s: impl Into<String>) -> Self {
        OutputLine::Text(s.into())
    }

    pub fn error(s: impl Into<String>) -> Self {
        OutputLine::Error(s.into())
    }

    pub fn labeled(label: impl Into<String>, text: impl Into<String>) -> Self {
        OutputLine::Labeled {
            label: label.into(),
            text: text.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, OutputLine::Error(_))
    }

    /// The line without any styling.
    pub fn plain(&self) -> String {
        match self {
            OutputLine::Text(s) | OutputLine::Heading(s) | OutputLine::Error(s) => s.clone(),
            OutputLine::Labeled { label, text } => format!("  {}{}", label, text),
            OutputLine::Status(s) => format!("STATUS: {}", s),
            OutputLine::Listing(entries) => entries
                .iter()
                .map(|e| {
                    if e.is_directory() {
                        format!("{}/", e.name)
                    } else {
                        e.name.clone()
                    }
                })
                .collect::<Vec<_>>()
                .join("    "),
        }
    }
}

/// Change a command asks the session to apply once it completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEffect {
    /// Erase everything previously written to the display
    ClearScreen,
    /// Move the working directory to an absolute, existing directory path
    ChangeDirectory(String),
}

/// Result of executing one command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub lines: Vec<OutputLine>,
    pub effects: Vec<SessionEffect>,
}

impl CommandOutput {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn lines(lines: Vec<OutputLine>) -> Self {
        Self {
            lines,
            effects: Vec::new(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::lines(vec![OutputLine::error(message)])
    }

    pub fn effect(effect: SessionEffect) -> Self {
        Self {
            lines: Vec::new(),
            effects: vec![effect],
        }
    }

    pub fn push(&mut self, line: OutputLine) {
        self.lines.push(line);
    }

    pub fn has_error(&self) -> bool {
        self.lines.iter().any(OutputLine::is_error)
    }

    /// All lines without styling.
    pub fn plain_lines(&self) -> Vec<String> {
        self.lines.iter().map(OutputLine::plain).collect()
    }
}

/// Command execution context
///
/// Borrows the session's view of the world for the duration of one command.
pub struct CommandContext<'a> {
    pub args: Vec<String>,
    /// The untrimmed input line, for commands with their own argument grammar
    pub raw: &'a str,
    pub cwd: &'a str,
    pub home: &'a str,
    pub fs: &'a FileSystemTree,
    pub instructions: &'a CustomInstructions,
    pub agents: &'a dyn AgentRegistry,
    pub generator: &'a dyn ResponseGenerator,
    pub task_timeout: Option<Duration>,
}

impl CommandContext<'_> {
    /// First positional argument, if any.
    pub fn first_arg(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }
}

/// Command trait
#[async_trait]
pub trait Command: Send + Sync {
    fn name(&self) -> &'static str;
    async fn execute(&self, ctx: CommandContext<'_>) -> CommandOutput;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::NodeKind;

    #[test]
    fn test_plain_rendering() {
        assert_eq!(OutputLine::labeled("SYSTEM: ", "Default").plain(), "  SYSTEM: Default");
        assert_eq!(OutputLine::Status("EXECUTING".to_string()).plain(), "STATUS: EXECUTING");

        let listing = OutputLine::Listing(vec![
            DirEntry { name: "documents".to_string(), kind: NodeKind::Directory },
            DirEntry { name: "profile.txt".to_string(), kind: NodeKind::File },
        ]);
        assert_eq!(listing.plain(), "documents/    profile.txt");
    }

    #[test]
    fn test_output_helpers() {
        let out = CommandOutput::error("boom");
        assert!(out.has_error());
        assert_eq!(out.plain_lines(), vec!["boom"]);

        let out = CommandOutput::effect(SessionEffect::ClearScreen);
        assert!(out.lines.is_empty());
        assert_eq!(out.effects, vec![SessionEffect::ClearScreen]);
    }
}
