//! Error types for refltools
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur in refltools
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No tool registered under the given key
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    /// No workflow registered under the given key
    #[error("Workflow not found: {0}")]
    WorkflowNotFound(String),

    /// A workflow names a tool that is not in the catalog
    #[error("Workflow '{workflow}' references unknown tool '{tool}'")]
    DanglingReference { workflow: String, tool: String },

    /// The same key was registered twice
    #[error("Duplicate {kind} key: {key}")]
    DuplicateKey { kind: &'static str, key: String },

    /// Unrecognized data category name
    #[error("Invalid data category: {0} (expected partial, combined or both)")]
    InvalidDataCategory(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed file glob
    #[error("Glob pattern error: {0}")]
    Pattern(#[from] glob::PatternError),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for refltools operations
pub type Result<T> = std::result::Result<T, CatalogError>;
