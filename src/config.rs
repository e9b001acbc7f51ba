//! Shell configuration
//!
//! Settings for a shell session, loadable from TOML. Every field has a
//! default, so an empty file is a valid configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::fs::seed::DEFAULT_HOME;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// The three free-text instruction strings supplied by the host application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomInstructions {
    pub system: String,
    pub ai_behavior: String,
    pub user_context: String,
}

impl CustomInstructions {
    pub fn new(
        system: impl Into<String>,
        ai_behavior: impl Into<String>,
        user_context: impl Into<String>,
    ) -> Self {
        Self {
            system: system.into(),
            ai_behavior: ai_behavior.into(),
            user_context: user_context.into(),
        }
    }

    /// System preamble handed to the response generator.
    ///
    /// Empty values are skipped; the result is trimmed and may be empty.
    pub fn system_instruction(&self) -> String {
        let mut out = String::new();
        if !self.system.is_empty() {
            out.push_str(&format!("SYSTEM Persona: {}\n", self.system));
        }
        if !self.ai_behavior.is_empty() {
            out.push_str(&format!("AI Behavior: {}\n", self.ai_behavior));
        }
        if !self.user_context.is_empty() {
            out.push_str(&format!("USER Context: {}", self.user_context));
        }
        out.trim().to_string()
    }
}

/// Configuration of a shell session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Starting directory, also the target of a bare `cd`
    pub home: String,
    /// Prompt prefix, rendered as `<label>:<cwd>> `
    pub prompt_label: String,
    /// Style output with ANSI colors
    pub color: bool,
    /// Give up on a `task` generator call after this long
    pub task_timeout_ms: Option<u64>,
    /// Simulated latency of the built-in generator
    pub generator_delay_ms: u64,
    pub instructions: CustomInstructions,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            home: DEFAULT_HOME.to_string(),
            prompt_label: "CUAG".to_string(),
            color: true,
            task_timeout_ms: None,
            generator_delay_ms: 500,
            instructions: CustomInstructions::default(),
        }
    }
}

impl ShellConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: ShellConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::info!(path = %path.display(), "loaded shell config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.home.starts_with('/') {
            return Err(ConfigError::Invalid(format!(
                "home must be an absolute path, got '{}'",
                self.home
            )));
        }
        if self.prompt_label.trim().is_empty() {
            return Err(ConfigError::Invalid("prompt_label must not be empty".to_string()));
        }
        Ok(())
    }
}
