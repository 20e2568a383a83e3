//! Tool and workflow entries and data category classification
//!
//! Describes external analysis tools by metadata only; nothing here loads or runs them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

/// Class of measurement data a tool operates on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataCategory {
    /// Individual data parts before they are stitched together
    Partial,
    /// Stitched reflectivity curves
    Combined,
    /// Applies to either category
    Both,
}

impl Default for DataCategory {
    fn default() -> Self {
        Self::Both
    }
}

impl DataCategory {
    /// Parse from string representation
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "partial" => Some(Self::Partial),
            "combined" => Some(Self::Combined),
            "both" => Some(Self::Both),
            _ => None,
        }
    }

    /// Parse, reporting unknown names as an error
    pub fn parse(s: &str) -> Result<Self> {
        Self::from_str(s).ok_or_else(|| CatalogError::InvalidDataCategory(s.to_string()))
    }

    /// True when an entry tagged `self` should be returned for a `requested` filter.
    ///
    /// `Both` on the entry side matches any filter; otherwise the categories must be equal.
    pub fn matches(&self, requested: DataCategory) -> bool {
        *self == requested || *self == Self::Both
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Partial => "partial",
            Self::Combined => "combined",
            Self::Both => "both",
        }
    }
}

impl fmt::Display for DataCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata describing one external analysis tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolEntry {
    /// Catalog key (e.g., "run_fit")
    pub key: String,
    /// Display name
    pub name: String,
    /// Where the implementation lives; opaque to the catalog
    pub module_ref: String,
    /// What the tool is for
    pub description: String,
    /// Invocation pattern, informational only
    #[serde(default)]
    pub usage: String,
    /// Example invocations, in display order
    #[serde(default)]
    pub examples: Vec<String>,
    /// Data category the tool applies to
    #[serde(default)]
    pub data_category: DataCategory,
}

impl ToolEntry {
    /// Create a new tool entry
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        module_ref: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            module_ref: module_ref.into(),
            description: description.into(),
            usage: String::new(),
            examples: Vec::new(),
            data_category: DataCategory::Both,
        }
    }

    /// Set usage template
    pub fn with_usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = usage.into();
        self
    }

    /// Append an example invocation
    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.examples.push(example.into());
        self
    }

    /// Set data category
    pub fn with_category(mut self, category: DataCategory) -> Self {
        self.data_category = category;
        self
    }

    /// First example, if any
    pub fn primary_example(&self) -> Option<&str> {
        self.examples.first().map(|s| s.as_str())
    }

    /// Check whether this tool applies to the requested category
    pub fn applies_to(&self, category: DataCategory) -> bool {
        self.data_category.matches(category)
    }
}

/// A named multi-step procedure composed from catalog tools
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowEntry {
    pub key: String,
    pub name: String,
    pub description: String,
    /// Ordered instructions
    #[serde(default)]
    pub steps: Vec<String>,
    /// Keys of the tools this workflow relies on
    #[serde(default)]
    pub tool_refs: Vec<String>,
}

impl WorkflowEntry {
    /// Create a new workflow entry
    pub fn new(key: impl Into<String>, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            description: description.into(),
            steps: Vec::new(),
            tool_refs: Vec::new(),
        }
    }

    /// Append a step
    pub fn with_step(mut self, step: impl Into<String>) -> Self {
        self.steps.push(step.into());
        self
    }

    /// Reference a tool by key; repeated keys are ignored
    pub fn with_tool(mut self, tool_key: impl Into<String>) -> Self {
        let tool_key = tool_key.into();
        if !self.tool_refs.contains(&tool_key) {
            self.tool_refs.push(tool_key);
        }
        self
    }

    /// Check if this workflow references a tool
    pub fn uses_tool(&self, tool_key: &str) -> bool {
        self.tool_refs.iter().any(|t| t == tool_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_category_from_str() {
        assert_eq!(DataCategory::from_str("partial"), Some(DataCategory::Partial));
        assert_eq!(DataCategory::from_str("Combined"), Some(DataCategory::Combined));
        assert_eq!(DataCategory::from_str(" BOTH "), Some(DataCategory::Both));
        assert_eq!(DataCategory::from_str("raw"), None);
    }

    #[test]
    fn test_data_category_parse_error() {
        let err = DataCategory::parse("raw").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidDataCategory(ref s) if s == "raw"));
    }

    #[test]
    fn test_data_category_matches() {
        assert!(DataCategory::Partial.matches(DataCategory::Partial));
        assert!(!DataCategory::Partial.matches(DataCategory::Combined));
        assert!(!DataCategory::Combined.matches(DataCategory::Partial));
        assert!(DataCategory::Both.matches(DataCategory::Partial));
        assert!(DataCategory::Both.matches(DataCategory::Combined));
        assert!(DataCategory::Both.matches(DataCategory::Both));
        assert!(!DataCategory::Partial.matches(DataCategory::Both));
    }

    #[test]
    fn test_data_category_default() {
        assert_eq!(DataCategory::default(), DataCategory::Both);
    }

    #[test]
    fn test_data_category_display() {
        assert_eq!(DataCategory::Partial.to_string(), "partial");
        assert_eq!(DataCategory::Combined.to_string(), "combined");
        assert_eq!(DataCategory::Both.to_string(), "both");
    }

    #[test]
    fn test_data_category_serialization() {
        let json = serde_json::to_string(&DataCategory::Combined).unwrap();
        assert_eq!(json, "\"combined\"");
        let category: DataCategory = serde_json::from_str("\"partial\"").unwrap();
        assert_eq!(category, DataCategory::Partial);
    }

    #[test]
    fn test_tool_entry_new() {
        let tool = ToolEntry::new("test", "Test Tool", "test.module", "A test tool");
        assert_eq!(tool.key, "test");
        assert_eq!(tool.name, "Test Tool");
        assert_eq!(tool.module_ref, "test.module");
        assert_eq!(tool.description, "A test tool");
        assert!(tool.usage.is_empty());
        assert!(tool.examples.is_empty());
        assert_eq!(tool.data_category, DataCategory::Both);
    }

    #[test]
    fn test_tool_entry_builder() {
        let tool = ToolEntry::new("test", "Test Tool", "test.module", "A test tool")
            .with_usage("test command")
            .with_example("test example")
            .with_example("second example")
            .with_category(DataCategory::Combined);

        assert_eq!(tool.usage, "test command");
        assert_eq!(tool.examples, vec!["test example", "second example"]);
        assert_eq!(tool.primary_example(), Some("test example"));
        assert_eq!(tool.data_category, DataCategory::Combined);
        assert!(tool.applies_to(DataCategory::Combined));
        assert!(!tool.applies_to(DataCategory::Partial));
    }

    #[test]
    fn test_tool_entry_without_examples() {
        let tool = ToolEntry::new("bare", "Bare", "bare", "No examples");
        assert!(tool.primary_example().is_none());
    }

    #[test]
    fn test_tool_entry_deserialization_defaults() {
        let json = r#"{
            "key": "simple",
            "name": "Simple",
            "module_ref": "pkg.simple",
            "description": "Simple tool"
        }"#;

        let tool: ToolEntry = serde_json::from_str(json).unwrap();
        assert_eq!(tool.key, "simple");
        assert_eq!(tool.data_category, DataCategory::Both);
        assert!(tool.examples.is_empty());
    }

    #[test]
    fn test_workflow_entry_builder() {
        let workflow = WorkflowEntry::new("wf", "Workflow", "Does things")
            .with_step("1. First")
            .with_step("2. Second")
            .with_tool("a")
            .with_tool("b");

        assert_eq!(workflow.steps, vec!["1. First", "2. Second"]);
        assert_eq!(workflow.tool_refs, vec!["a", "b"]);
        assert!(workflow.uses_tool("a"));
        assert!(!workflow.uses_tool("c"));
    }

    #[test]
    fn test_workflow_entry_ignores_repeated_tool() {
        let workflow = WorkflowEntry::new("wf", "Workflow", "")
            .with_tool("a")
            .with_tool("a");
        assert_eq!(workflow.tool_refs, vec!["a"]);
    }
}
