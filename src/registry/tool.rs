//! Tool and category definitions
//!
//! Display metadata for every lookup capability, grouped into categories.

use serde::{Deserialize, Serialize};

/// A lookup capability addressed by its registry-unique id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    /// Stable identifier (e.g., "ipGeolocation")
    pub id: String,
    /// Display name
    pub name: String,
    /// One-line description
    pub description: String,
    /// Prompt shown when collecting the query
    pub prompt: String,
    /// Environment credential gating the live provider, if any
    #[serde(default)]
    pub credential: Option<String>,
    /// Whether an empty query is acceptable
    #[serde(default)]
    pub input_optional: bool,
}

impl Tool {
    /// Create a new tool definition
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        prompt: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            prompt: prompt.into(),
            credential: None,
            input_optional: false,
        }
    }

    /// Mark the tool as backed by a credential-gated provider
    pub fn with_credential(mut self, name: impl Into<String>) -> Self {
        self.credential = Some(name.into());
        self
    }

    /// Allow an empty query
    pub fn with_optional_input(mut self) -> Self {
        self.input_optional = true;
        self
    }

    pub fn requires_credential(&self) -> bool {
        self.credential.is_some()
    }

    /// Caller-side emptiness check: a blank query is only accepted by
    /// input-optional tools
    pub fn accepts(&self, query: &str) -> bool {
        self.input_optional || !query.trim().is_empty()
    }
}

/// Ordered group of tools; position is menu position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub tools: Vec<Tool>,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            tools: Vec::new(),
        }
    }

    /// Append a tool, keeping declaration order
    pub fn with_tool(mut self, tool: Tool) -> Self {
        self.tools.push(tool);
        self
    }

    /// Get a tool in this category by id
    pub fn tool(&self, id: &str) -> Option<&Tool> {
        self.tools.iter().find(|t| t.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_new_defaults() {
        let tool = Tool::new("whoisLookup", "WHOIS Lookup", "Retrieve registration info.", "Enter domain name:");
        assert_eq!(tool.id, "whoisLookup");
        assert!(!tool.requires_credential());
        assert!(!tool.input_optional);
    }

    #[test]
    fn test_tool_with_credential() {
        let tool = Tool::new("ipGeolocation", "IP Geolocation", "d", "p").with_credential("OSINT_IPINFO_API_KEY");
        assert!(tool.requires_credential());
        assert_eq!(tool.credential.as_deref(), Some("OSINT_IPINFO_API_KEY"));
    }

    #[test]
    fn test_tool_accepts() {
        let strict = Tool::new("a", "A", "d", "p");
        assert!(strict.accepts("x"));
        assert!(!strict.accepts(""));
        assert!(!strict.accepts("   "));

        let optional = Tool::new("b", "B", "d", "p").with_optional_input();
        assert!(optional.accepts(""));
    }

    #[test]
    fn test_category_tool_order() {
        let category = Category::new("c", "C")
            .with_tool(Tool::new("first", "F", "d", "p"))
            .with_tool(Tool::new("second", "S", "d", "p"));
        assert_eq!(category.tools[0].id, "first");
        assert_eq!(category.tools[1].id, "second");
        assert!(category.tool("second").is_some());
        assert!(category.tool("third").is_none());
    }
}
