use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandOutput, OutputLine};

pub struct HelpCommand;

/// (usage, description), one entry per verb
const USAGE: &[(&str, &str)] = &[
    ("task <agent> \"<prompt>\"", "Assign a task to an agent."),
    ("status", "View active Custom Instructions."),
    ("clear", "Clear the terminal screen."),
    ("ls [path]", "List directory contents."),
    ("cat <file>", "Display file content."),
    ("cd <directory>", "Change directory."),
    ("help", "Show this command summary."),
];

#[async_trait]
impl Command for HelpCommand {
    fn name(&self) -> &'static str { "help" }

    async fn execute(&self, _ctx: CommandContext<'_>) -> CommandOutput {
        let mut out = CommandOutput::lines(vec![OutputLine::Heading(
            "CUA Ecosystem Commands:".to_string(),
        )]);
        for (usage, description) in USAGE {
            out.push(OutputLine::labeled(format!("{:<28}", usage), format!("- {}", description)));
        }
        out
    }
}
