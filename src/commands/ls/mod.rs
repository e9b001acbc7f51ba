// src/commands/ls/mod.rs
use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandOutput, OutputLine};
use crate::fs::resolve;

pub struct LsCommand;

#[async_trait]
impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> CommandOutput {
        let target = ctx.first_arg().unwrap_or(".");
        let path = resolve(ctx.cwd, target);

        match ctx.fs.read_dir(&path) {
            Ok(entries) if entries.is_empty() => CommandOutput::lines(vec![OutputLine::text("")]),
            Ok(entries) => CommandOutput::lines(vec![OutputLine::Listing(entries)]),
            Err(_) => CommandOutput::error(format!(
                "Error: ls: cannot access '{}': No such directory",
                target
            )),
        }
    }
}
