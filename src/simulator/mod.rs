//! Fallback Simulator - deterministic synthetic results
//!
//! `simulate` is total: every tool id yields a result, tools without a rule
//! get the default template. Output depends only on `(tool_id, query)`.

mod rules;

use std::collections::HashMap;

use crate::lookup::LookupResult;

pub use rules::Rule;

/// Error carried by the default template
pub const DEFAULT_TEMPLATE_ERROR: &str = "Tool not implemented or invalid query.";

/// Rule table keyed by tool id
#[derive(Clone)]
pub struct Simulator {
    rules: HashMap<&'static str, Rule>,
}

impl Simulator {
    /// Simulator with every builtin rule
    pub fn new() -> Self {
        Self {
            rules: rules::all().collect(),
        }
    }

    /// Simulator with no rules; everything hits the default template
    pub fn empty() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Register or replace a rule
    pub fn with_rule(mut self, tool_id: &'static str, rule: Rule) -> Self {
        self.rules.insert(tool_id, rule);
        self
    }

    /// Produce the synthetic result for a tool
    pub fn simulate(&self, tool_id: &str, query: &str) -> LookupResult {
        match self.rules.get(tool_id) {
            Some(rule) => LookupResult::simulated(query, rule(query)),
            None => {
                log::debug!("No simulation rule for '{}', using default template", tool_id);
                LookupResult::simulated_error(query, DEFAULT_TEMPLATE_ERROR)
            }
        }
    }

    /// Check if a tool has a non-default rule
    pub fn has_rule(&self, tool_id: &str) -> bool {
        self.rules.contains_key(tool_id)
    }

    /// Tool ids with rules, sorted
    pub fn rule_ids(&self) -> Vec<&'static str> {
        let mut ids: Vec<_> = self.rules.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Simulator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulator").field("rules", &self.rules.len()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::{Fields, Provenance, Value};
    use crate::registry::Registry;

    #[test]
    fn test_simulate_known_tool() {
        let simulator = Simulator::new();
        let result = simulator.simulate("ipReverseDnsLookup", "8.8.8.8");
        assert_eq!(result.provenance(), Provenance::Simulated);
        assert_eq!(result.field("reverseDns").and_then(Value::as_str), Some("dns.google"));
        assert_eq!(result.query(), "8.8.8.8");
    }

    #[test]
    fn test_simulate_unknown_tool_uses_default_template() {
        let simulator = Simulator::new();
        let result = simulator.simulate("noSuchTool", "q");
        assert_eq!(result.error(), Some(DEFAULT_TEMPLATE_ERROR));
        assert!(result.fields().is_empty());
        assert_eq!(result.provenance(), Provenance::Simulated);
    }

    #[test]
    fn test_simulate_is_deterministic() {
        let simulator = Simulator::new();
        for id in Registry::builtin().tool_ids() {
            let first = simulator.simulate(id, "user@example.com");
            let second = simulator.simulate(id, "user@example.com");
            assert_eq!(first, second, "non-deterministic rule {}", id);
            assert_eq!(
                serde_json::to_string(&first).unwrap(),
                serde_json::to_string(&second).unwrap()
            );
        }
    }

    #[test]
    fn test_every_registry_tool_has_a_rule() {
        let simulator = Simulator::new();
        let missing: Vec<_> = Registry::builtin()
            .tool_ids()
            .into_iter()
            .filter(|id| !simulator.has_rule(id))
            .collect();
        assert!(missing.is_empty(), "tools without rules: {:?}", missing);
    }

    #[test]
    fn test_every_rule_targets_a_registry_tool() {
        let registry = Registry::builtin();
        for id in Simulator::new().rule_ids() {
            assert!(registry.contains(id), "rule for unregistered tool {}", id);
        }
    }

    #[test]
    fn test_empty_query_is_handled_by_every_tool() {
        let simulator = Simulator::new();
        for id in Registry::builtin().tool_ids() {
            let result = simulator.simulate(id, "");
            assert_eq!(result.provenance(), Provenance::Simulated);
            assert!(!result.is_error());
        }
    }

    #[test]
    fn test_with_rule_overrides() {
        fn fixed(_q: &str) -> Fields {
            Fields::new().with("status", "fixed")
        }
        let simulator = Simulator::empty().with_rule("custom", fixed);
        assert!(simulator.has_rule("custom"));
        assert_eq!(simulator.len(), 1);
        let result = simulator.simulate("custom", "x");
        assert_eq!(result.field("status").and_then(Value::as_str), Some("fixed"));
    }
}
