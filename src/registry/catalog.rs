//! Tool registry
//!
//! Immutable catalog of categories and tools with lookup by id. The builtin
//! registry is built once per process and shared read-only.

use std::collections::HashSet;
use std::sync::OnceLock;

use crate::error::{OsintError, Result};

use super::builtin;
use super::tool::{Category, Tool};

static BUILTIN: OnceLock<Registry> = OnceLock::new();

/// Ordered catalog of categories; category ids and tool ids are unique
#[derive(Debug, Clone)]
pub struct Registry {
    categories: Vec<Category>,
}

impl Registry {
    /// The process-wide builtin registry
    pub fn builtin() -> &'static Registry {
        BUILTIN.get_or_init(|| Registry {
            categories: builtin::categories(),
        })
    }

    /// Build a registry, rejecting duplicate category or tool ids
    pub fn from_categories(categories: Vec<Category>) -> Result<Self> {
        Self::check_unique(&categories)?;
        Ok(Self { categories })
    }

    fn check_unique(categories: &[Category]) -> Result<()> {
        let mut category_ids = HashSet::new();
        let mut tool_ids = HashSet::new();

        for category in categories {
            if !category_ids.insert(category.id.as_str()) {
                return Err(OsintError::Config(format!(
                    "Duplicate category id '{}'",
                    category.id
                )));
            }
            for tool in &category.tools {
                if !tool_ids.insert(tool.id.as_str()) {
                    return Err(OsintError::Config(format!(
                        "Duplicate tool id '{}' in category '{}'",
                        tool.id, category.id
                    )));
                }
            }
        }

        Ok(())
    }

    /// Get a tool by category and tool id
    pub fn lookup(&self, category_id: &str, tool_id: &str) -> Result<&Tool> {
        self.category(category_id)
            .and_then(|c| c.tool(tool_id))
            .ok_or_else(|| OsintError::NotFound {
                category: category_id.to_string(),
                tool: tool_id.to_string(),
            })
    }

    /// Get a tool by id alone; ids are unique across categories
    pub fn find(&self, tool_id: &str) -> Option<&Tool> {
        self.tools().find(|t| t.id == tool_id)
    }

    /// Get the category owning a tool
    pub fn category_of(&self, tool_id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.tool(tool_id).is_some())
    }

    pub fn category(&self, category_id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == category_id)
    }

    /// All categories in menu order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// All tools, category by category
    pub fn tools(&self) -> impl Iterator<Item = &Tool> {
        self.categories.iter().flat_map(|c| c.tools.iter())
    }

    pub fn tool_ids(&self) -> Vec<&str> {
        self.tools().map(|t| t.id.as_str()).collect()
    }

    /// Check if a tool exists
    pub fn contains(&self, tool_id: &str) -> bool {
        self.find(tool_id).is_some()
    }

    /// Get number of tools
    pub fn len(&self) -> usize {
        self.tools().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
