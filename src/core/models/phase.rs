//! Phase model

use super::Module;
use serde::Deserialize;

/// A stage of progression within a track, grouping related modules
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Phase {
    /// Identifier, unique within its track
    pub id: String,

    /// Display title (e.g., "Phase 1: Core Language")
    pub title: String,

    /// What the learner should be able to do after this phase
    #[serde(default)]
    pub goal: String,

    /// Ordered lesson modules
    #[serde(default)]
    pub modules: Vec<Module>,
}

impl Phase {
    /// Create an empty phase
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            goal: goal.into(),
            modules: Vec::new(),
        }
    }

    /// Append a module, builder style
    #[must_use]
    pub fn with_module(mut self, module: Module) -> Self {
        self.modules.push(module);
        self
    }

    /// Find a module of this phase by id
    #[must_use]
    pub fn module(&self, module_id: &str) -> Option<&Module> {
        self.modules.iter().find(|m| m.id == module_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_builder_preserves_order() {
        let phase = Phase::new("basics", "Basics", "Write small programs")
            .with_module(Module::new("syntax", "Syntax", ""))
            .with_module(Module::new("oop", "OOP", ""));

        let ids: Vec<_> = phase.modules.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["syntax", "oop"]);
        assert!(phase.module("oop").is_some());
        assert!(phase.module("streams").is_none());
    }
}
