//! Error types for osintr
//!
//! Centralized error handling using thiserror. Provider failures have their
//! own taxonomy in [`crate::provider::DispatchFailure`] and never surface here.

use thiserror::Error;

/// All error types that can occur outside the lookup hot path
#[derive(Debug, Error)]
pub enum OsintError {
    /// Category or tool id not present in the registry
    #[error("Tool not found: {category}/{tool}")]
    NotFound { category: String, tool: String },

    /// Tool id not present in any category
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Query rejected by the caller-side emptiness check
    #[error("Input cannot be empty for tool: {0}")]
    EmptyQuery(String),

    /// Configuration-time defect (dangling tool reference, bad config file)
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias for osintr operations
pub type Result<T> = std::result::Result<T, OsintError>;
