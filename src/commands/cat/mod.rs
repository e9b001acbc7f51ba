// src/commands/cat/mod.rs
use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandOutput, OutputLine};
use crate::fs::resolve;

pub struct CatCommand;

#[async_trait]
impl Command for CatCommand {
    fn name(&self) -> &'static str {
        "cat"
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> CommandOutput {
        let Some(target) = ctx.first_arg() else {
            return CommandOutput::error("Error: cat: : No such file or is a directory");
        };
        let path = resolve(ctx.cwd, target);

        match ctx.fs.read_file(&path) {
            Ok(content) => CommandOutput::lines(
                content.split('\n').map(OutputLine::text).collect(),
            ),
            Err(_) => CommandOutput::error(format!(
                "Error: cat: {}: No such file or is a directory",
                target
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::Fixture;

    #[tokio::test]
    async fn test_cat_file_line_by_line() {
        let fixture = Fixture::new();
        let result = CatCommand.execute(fixture.ctx("cat profile.txt")).await;
        assert_eq!(
            result.plain_lines(),
            vec!["Name: GUA-D-CUAG", "Role: Orchestration Engine", "Status: Online"]
        );
        assert!(!result.has_error());
    }

    #[tokio::test]
    async fn test_cat_nested_relative_path() {
        let mut fixture = Fixture::new();
        fixture.cwd = "/home/user/workspace".to_string();
        let result = CatCommand.execute(fixture.ctx("cat ../documents/report.txt")).await;
        assert_eq!(
            result.plain_lines(),
            vec![
                "This is a simulated report document.",
                "It contains important findings and data.",
            ]
        );
    }

    #[tokio::test]
    async fn test_cat_empty_file_emits_one_blank_line() {
        let mut fixture = Fixture::new();
        fixture.fs.write_file("/home/user/empty.txt", "").unwrap();
        let result = CatCommand.execute(fixture.ctx("cat empty.txt")).await;
        assert_eq!(result.plain_lines(), vec![""]);
    }

    #[tokio::test]
    async fn test_cat_directory_and_missing_are_errors() {
        let fixture = Fixture::new();
        let dir = CatCommand.execute(fixture.ctx("cat documents")).await;
        assert_eq!(
            dir.plain_lines(),
            vec!["Error: cat: documents: No such file or is a directory"]
        );
        let missing = CatCommand.execute(fixture.ctx("cat nope.txt")).await;
        assert!(missing.has_error());
        let no_arg = CatCommand.execute(fixture.ctx("cat")).await;
        assert!(no_arg.has_error());
        assert_eq!(no_arg.lines.len(), 1);
    }
}
