//! Argument grammar of `task`
//!
//! ```text
//! task <agent> "<prompt>"
//! ```
//!
//! The agent is the first whitespace token after the verb. The prompt is the
//! text between the first pair of double quotes anywhere after the verb.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskParseError {
    #[error("missing agent name")]
    MissingAgent,

    #[error("missing quoted prompt")]
    MissingPrompt,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRequest<'a> {
    pub agent: &'a str,
    pub prompt: &'a str,
}

/// Parse a full `task` input line.
pub fn parse_task_line(line: &str) -> Result<TaskRequest<'_>, TaskParseError> {
    let line = line.trim_start();
    let rest = match line.find(char::is_whitespace) {
        Some(pos) => &line[pos..],
        None => "",
    };

    let agent = rest
        .split_whitespace()
        .next()
        .filter(|token| !token.starts_with('"'))
        .ok_or(TaskParseError::MissingAgent)?;

    let prompt = first_quoted(rest)
        .filter(|p| !p.is_empty())
        .ok_or(TaskParseError::MissingPrompt)?;

    Ok(TaskRequest { agent, prompt })
}

/// Text between the first two double quotes of `text`.
fn first_quoted(text: &str) -> Option<&str> {
    let open = text.find('"')?;
    let body = &text[open + 1..];
    let close = body.find('"')?;
    Some(&body[..close])
}
