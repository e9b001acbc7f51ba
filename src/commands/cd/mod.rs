//! cd - change the session's working directory
//!
//! `cd` with no argument returns to the configured home directory.

use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandOutput, SessionEffect};
use crate::fs::resolve;

pub struct CdCommand;

#[async_trait]
impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> CommandOutput {
        let target = ctx.first_arg().unwrap_or(ctx.home);
        let path = resolve(ctx.cwd, target);

        match ctx.fs.lookup(&path) {
            Ok(node) if node.is_directory() => {
                CommandOutput::effect(SessionEffect::ChangeDirectory(path))
            }
            _ => CommandOutput::error(format!(
                "Error: cd: {}: Not a directory or does not exist",
                target
            )),
        }
    }
}
