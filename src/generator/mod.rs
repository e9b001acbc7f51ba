//! Response Generator
//!
//! Boundary to the text-generation service used by the `task` command.
//! The shell only needs `generate`; the service behind it is pluggable.

pub mod persona;

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::agents::AgentProfile;

pub use persona::PersonaGenerator;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("generation failed: {0}")]
    Failed(String),

    #[error("no response after {0} ms")]
    TimedOut(u64),

    #[error("generator unavailable: {0}")]
    Unavailable(String),
}

/// Everything the generator gets to see for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptContext {
    pub agent: AgentProfile,
    pub prompt: String,
    /// Preamble built from the configured instruction strings; may be empty
    pub system_instruction: String,
}

#[async_trait]
pub trait ResponseGenerator: Send + Sync {
    async fn generate(&self, context: PromptContext) -> Result<String, GenerateError>;
}

/// Run `generate`, failing with [`GenerateError::TimedOut`] if `timeout` elapses first.
pub async fn generate_with_timeout(
    generator: &dyn ResponseGenerator,
    context: PromptContext,
    timeout: Option<Duration>,
) -> Result<String, GenerateError> {
    match timeout {
        Some(limit) => match tokio::time::timeout(limit, generator.generate(context)).await {
            Ok(result) => result,
            Err(_) => Err(GenerateError::TimedOut(millis(limit))),
        },
        None => generator.generate(context).await,
    }
}

/// Whole milliseconds in `duration`, saturating at `u64::MAX`.
fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Stalled;

    #[async_trait]
    impl ResponseGenerator for Stalled {
        async fn generate(&self, _context: PromptContext) -> Result<String, GenerateError> {
            std::future::pending::<()>().await;
            Ok(String::new())
        }
    }

    fn context() -> PromptContext {
        PromptContext {
            agent: AgentProfile {
                name: "LYRA".to_string(),
                role: "The Architect".to_string(),
                philosophy: "Clarity through structure.".to_string(),
                focus_areas: vec![],
            },
            prompt: "hello".to_string(),
            system_instruction: String::new(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_fires() {
        let result = generate_with_timeout(&Stalled, context(), Some(Duration::from_millis(250))).await;
        assert_eq!(result, Err(GenerateError::TimedOut(250)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_timeout_passes_through() {
        let generator = PersonaGenerator::new(Duration::from_millis(10));
        let result = generate_with_timeout(&generator, context(), None).await.unwrap();
        assert!(result.contains("hello"));
    }

    #[test]
    fn test_millis_saturates() {
        assert_eq!(millis(Duration::from_millis(250)), 250);
        assert_eq!(millis(Duration::from_secs(u64::MAX)), u64::MAX);
        assert_eq!(millis(Duration::MAX), u64::MAX);
    }
}
