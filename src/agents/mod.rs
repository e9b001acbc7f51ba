//! Agent Registry
//!
//! Read-only catalog of personas the `task` command can address.

pub mod catalog;

pub use catalog::CodexCatalog;

/// Persona metadata of one agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentProfile {
    /// Canonical name, e.g. `LYRA`
    pub name: String,
    pub role: String,
    /// Philosophy line used as the persona text of task responses
    pub philosophy: String,
    pub focus_areas: Vec<String>,
}

impl AgentProfile {
    pub fn display_name(&self) -> &str {
        &self.name
    }

    pub fn persona_text(&self) -> &str {
        &self.philosophy
    }
}

/// Lookup of agents by name.
pub trait AgentRegistry: Send + Sync {
    /// Find an agent by case-insensitive exact name.
    fn find_agent_by_name(&self, name: &str) -> Option<AgentProfile>;

    /// Canonical names of every registered agent.
    fn names(&self) -> Vec<String>;
}
