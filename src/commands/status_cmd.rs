use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandOutput, OutputLine};

pub struct StatusCommand;

fn or_default(value: &str) -> &str {
    if value.is_empty() { "Default" } else { value }
}

#[async_trait]
impl Command for StatusCommand {
    fn name(&self) -> &'static str { "status" }

    async fn execute(&self, ctx: CommandContext<'_>) -> CommandOutput {
        let instructions = ctx.instructions;
        CommandOutput::lines(vec![
            OutputLine::Heading("Active Custom Instruction Nuances:".to_string()),
            OutputLine::labeled("SYSTEM:", format!(" {}", or_default(&instructions.system))),
            OutputLine::labeled("AI:", format!("     {}", or_default(&instructions.ai_behavior))),
            OutputLine::labeled("USER:", format!("   {}", or_default(&instructions.user_context))),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::Fixture;
    use crate::config::CustomInstructions;

    #[tokio::test]
    async fn test_empty_instructions_show_default() {
        let fixture = Fixture::new();
        let result = StatusCommand.execute(fixture.ctx("status")).await;
        assert_eq!(
            result.plain_lines(),
            vec![
                "Active Custom Instruction Nuances:",
                "  SYSTEM: Default",
                "  AI:     Default",
                "  USER:   Default",
            ]
        );
    }

    #[tokio::test]
    async fn test_configured_instructions_verbatim() {
        let mut fixture = Fixture::new();
        fixture.instructions = CustomInstructions::new("Senior architect", "", "  spaced  ");
        let result = StatusCommand.execute(fixture.ctx("status")).await;
        let lines = result.plain_lines();
        assert_eq!(lines[1], "  SYSTEM: Senior architect");
        assert_eq!(lines[2], "  AI:     Default");
        assert_eq!(lines[3], "  USER:     spaced  ");
    }
}
