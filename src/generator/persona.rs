//! Offline generator that answers in the agent's voice after a fixed delay.

use std::time::Duration;

use async_trait::async_trait;

use super::{GenerateError, PromptContext, ResponseGenerator};

pub struct PersonaGenerator {
    delay: Duration,
}

impl PersonaGenerator {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for PersonaGenerator {
    fn default() -> Self {
        Self::new(Duration::from_millis(500))
    }
}

#[async_trait]
impl ResponseGenerator for PersonaGenerator {
    async fn generate(&self, context: PromptContext) -> Result<String, GenerateError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let prompt = context.prompt.trim();
        if prompt.is_empty() {
            return Err(GenerateError::Failed("empty prompt".to_string()));
        }
        Ok(format!(
            "{} ({}) handled \"{}\"",
            context.agent.name, context.agent.role, prompt
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::{AgentRegistry, CodexCatalog};

    fn context(prompt: &str) -> PromptContext {
        PromptContext {
            agent: CodexCatalog::builtin().find_agent_by_name("KARA").unwrap(),
            prompt: prompt.to_string(),
            system_instruction: String::new(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_answers_in_persona() {
        let generator = PersonaGenerator::default();
        let text = generator.generate(context("ship it")).await.unwrap();
        assert_eq!(text, "KARA (The Builder) handled \"ship it\"");
    }

    #[tokio::test]
    async fn test_rejects_blank_prompt() {
        let generator = PersonaGenerator::new(Duration::ZERO);
        let err = generator.generate(context("   ")).await.unwrap_err();
        assert!(matches!(err, GenerateError::Failed(_)));
    }
}
