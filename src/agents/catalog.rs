//! Built-in agent catalog

use super::{AgentProfile, AgentRegistry};

/// (name, role, philosophy, focus areas)
const AI_FAMILY: &[(&str, &str, &str, &[&str])] = &[
    ("LYRA", "The Architect", "Clarity through structure.", &["Design patterns implementation", "Code maintainability", "Dependency management"]),
    ("KARA", "The Builder", "Efficiency in execution.", &["Performance optimization", "Code quality and best practices"]),
    ("SOPHIA", "The Guardian", "Resilience by design.", &["Security considerations", "Testing coverage", "Error handling"]),
    ("CECILIA", "The Documentarian", "Knowledge must be shared.", &["Documentation quality"]),
    ("DAN", "The Analyst", "Data-driven decisions.", &["Edge cases consideration", "Performance optimization"]),
    ("STAN", "The Traditionalist", "Proven patterns prevail.", &["Code quality and best practices", "Design patterns"]),
    ("DUDE", "The User Advocate", "The experience is everything.", &["Code maintainability", "UI/UX"]),
    ("KARL", "The Innovator", "Challenge the status quo.", &["Performance optimization", "Dependency management"]),
    ("MISTRESS", "The Orchestrator", "Harmony in complexity.", &["Dependency management", "Workflow Automation"]),
];

/// In-memory agent registry.
#[derive(Debug, Clone, Default)]
pub struct CodexCatalog {
    agents: Vec<AgentProfile>,
}

impl CodexCatalog {
    /// An empty catalog
    pub fn new() -> Self {
        Self { agents: Vec::new() }
    }

    /// The default AI family.
    pub fn builtin() -> Self {
        let agents = AI_FAMILY
            .iter()
            .map(|(name, role, philosophy, focus)| AgentProfile {
                name: name.to_string(),
                role: role.to_string(),
                philosophy: philosophy.to_string(),
                focus_areas: focus.iter().map(|f| f.to_string()).collect(),
            })
            .collect();
        Self { agents }
    }

    /// Add an agent, replacing any existing one with the same name.
    pub fn register(&mut self, agent: AgentProfile) {
        self.agents
            .retain(|a| !a.name.eq_ignore_ascii_case(&agent.name));
        self.agents.push(agent);
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}

impl AgentRegistry for CodexCatalog {
    fn find_agent_by_name(&self, name: &str) -> Option<AgentProfile> {
        let wanted = name.to_lowercase();
        self.agents
            .iter()
            .find(|a| a.name.to_lowercase() == wanted)
            .cloned()
    }

    fn names(&self) -> Vec<String> {
        self.agents.iter().map(|a| a.name.clone()).collect()
    }
}
