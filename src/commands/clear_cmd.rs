use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandOutput, SessionEffect};

pub struct ClearCommand;

#[async_trait]
impl Command for ClearCommand {
    fn name(&self) -> &'static str {
        "clear"
    }

    async fn execute(&self, _ctx: CommandContext<'_>) -> CommandOutput {
        CommandOutput::effect(SessionEffect::ClearScreen)
    }
}
