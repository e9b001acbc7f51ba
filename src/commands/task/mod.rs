//! task - hand a prompt to one of the registered agents
//!
//! The only command that suspends: it awaits the response generator and
//! reports the result as a JSON block.

pub mod parse;

use async_trait::async_trait;
use serde::Serialize;

use crate::commands::{Command, CommandContext, CommandOutput, OutputLine};
use crate::generator::{generate_with_timeout, PromptContext};

pub use parse::{parse_task_line, TaskParseError, TaskRequest};

pub struct TaskCommand;

const USAGE_ERROR: &str = "ERROR: Invalid format. Use: task <agent> \"<prompt>\"";

#[derive(Debug, Serialize)]
struct TaskReport<'a> {
    status: &'static str,
    agent: &'a str,
    response: String,
    output: &'a str,
}

#[async_trait]
impl Command for TaskCommand {
    fn name(&self) -> &'static str {
        "task"
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> CommandOutput {
        let request = match parse_task_line(ctx.raw) {
            Ok(request) => request,
            Err(e) => {
                tracing::debug!(error = %e, "rejected task line");
                return CommandOutput::error(USAGE_ERROR);
            }
        };

        let Some(agent) = ctx.agents.find_agent_by_name(request.agent) else {
            return CommandOutput::error(format!("ERROR: Agent '{}' not found.", request.agent));
        };

        let mut out = CommandOutput::lines(vec![OutputLine::Status("EXECUTING".to_string())]);
        let context = PromptContext {
            agent: agent.clone(),
            prompt: request.prompt.to_string(),
            system_instruction: ctx.instructions.system_instruction(),
        };

        tracing::info!(agent = %agent.name, "dispatching task to response generator");
        match generate_with_timeout(ctx.generator, context, ctx.task_timeout).await {
            Ok(text) => {
                let report = TaskReport {
                    status: "SUCCESS",
                    agent: agent.display_name(),
                    response: format!(
                        "Task completed based on philosophy: '{}'",
                        agent.persona_text()
                    ),
                    output: &text,
                };
                match serde_json::to_string_pretty(&report) {
                    Ok(block) => out.lines.extend(block.lines().map(OutputLine::text)),
                    Err(e) => out.push(OutputLine::error(format!(
                        "ERROR: Task for agent '{}' failed: {}",
                        agent.name, e
                    ))),
                }
            }
            Err(e) => {
                tracing::warn!(agent = %agent.name, error = %e, "task generation failed");
                out.push(OutputLine::error(format!(
                    "ERROR: Task for agent '{}' failed: {}",
                    agent.name, e
                )));
            }
        }
        out
    }
}
