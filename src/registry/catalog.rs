//! Tool and workflow catalogs with lookup, filtering and reference validation
//!
//! Built once, then read-only. Entries keep their definition order.

use std::collections::{HashMap, HashSet};
use std::fmt;

use log::debug;
use serde::Serialize;

use crate::error::{CatalogError, Result};

use super::builtins;
use super::definition::{DataCategory, ToolEntry, WorkflowEntry};

/// A workflow reference that does not resolve to a catalog tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub workflow: String,
    pub tool: String,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "workflow '{}' references unknown tool '{}'", self.workflow, self.tool)
    }
}

impl From<ValidationIssue> for CatalogError {
    fn from(issue: ValidationIssue) -> Self {
        CatalogError::DanglingReference {
            workflow: issue.workflow,
            tool: issue.tool,
        }
    }
}

/// Ordered entries plus a key index
#[derive(Debug, Clone)]
struct Indexed<T> {
    entries: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T> Indexed<T> {
    fn build(entries: Vec<T>, kind: &'static str, key_of: impl Fn(&T) -> &str) -> Result<Self> {
        let mut index = HashMap::with_capacity(entries.len());
        for (pos, entry) in entries.iter().enumerate() {
            let key = key_of(entry);
            if index.insert(key.to_string(), pos).is_some() {
                return Err(CatalogError::DuplicateKey {
                    kind,
                    key: key.to_string(),
                });
            }
        }
        Ok(Self { entries, index })
    }

    fn get(&self, key: &str) -> Option<&T> {
        self.index.get(key).map(|&pos| &self.entries[pos])
    }

    fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }
}

/// Catalog of analysis tools and the workflows that compose them
#[derive(Debug, Clone)]
pub struct Registry {
    tools: Indexed<ToolEntry>,
    workflows: Indexed<WorkflowEntry>,
}

impl Registry {
    /// Build a registry, rejecting duplicate tool or workflow keys.
    ///
    /// Repeated tool references within a workflow are dropped, keeping the first occurrence.
    /// Dangling workflow references are accepted here; use [`Registry::validate`] to find them.
    pub fn new(tools: Vec<ToolEntry>, mut workflows: Vec<WorkflowEntry>) -> Result<Self> {
        for workflow in &mut workflows {
            let mut seen = HashSet::new();
            workflow.tool_refs.retain(|t| seen.insert(t.clone()));
        }
        let tools = Indexed::build(tools, "tool", |t: &ToolEntry| t.key.as_str())?;
        let workflows = Indexed::build(workflows, "workflow", |w: &WorkflowEntry| w.key.as_str())?;
        debug!(
            "Registry built with {} tools and {} workflows",
            tools.entries.len(),
            workflows.entries.len()
        );
        Ok(Self { tools, workflows })
    }

    /// Registry holding the compiled-in reflectometry tools and workflows
    pub fn builtin() -> Result<Self> {
        Self::new(builtins::builtin_tools(), builtins::builtin_workflows())
    }

    /// All tools in definition order
    pub fn all_tools(&self) -> &[ToolEntry] {
        &self.tools.entries
    }

    /// Get a tool by key
    pub fn tool(&self, key: &str) -> Option<&ToolEntry> {
        self.tools.get(key)
    }

    /// Get a tool by key, treating absence as an error
    pub fn require_tool(&self, key: &str) -> Result<&ToolEntry> {
        self.tool(key)
            .ok_or_else(|| CatalogError::ToolNotFound(key.to_string()))
    }

    /// Tools tagged with `category` or with `Both`, in definition order
    pub fn tools_by_category(&self, category: DataCategory) -> Vec<&ToolEntry> {
        self.tools
            .entries
            .iter()
            .filter(|t| t.applies_to(category))
            .collect()
    }

    /// Tool keys in definition order
    pub fn tool_keys(&self) -> Vec<&str> {
        self.tools.entries.iter().map(|t| t.key.as_str()).collect()
    }

    /// All workflows in definition order
    pub fn all_workflows(&self) -> &[WorkflowEntry] {
        &self.workflows.entries
    }

    /// Get a workflow by key
    pub fn workflow(&self, key: &str) -> Option<&WorkflowEntry> {
        self.workflows.get(key)
    }

    /// Get a workflow by key, treating absence as an error
    pub fn require_workflow(&self, key: &str) -> Result<&WorkflowEntry> {
        self.workflow(key)
            .ok_or_else(|| CatalogError::WorkflowNotFound(key.to_string()))
    }

    /// Resolve a workflow's tool references to catalog entries
    pub fn workflow_tools(&self, key: &str) -> Result<Vec<&ToolEntry>> {
        let workflow = self.require_workflow(key)?;
        workflow
            .tool_refs
            .iter()
            .map(|tool_key| {
                self.tool(tool_key).ok_or_else(|| CatalogError::DanglingReference {
                    workflow: workflow.key.clone(),
                    tool: tool_key.clone(),
                })
            })
            .collect()
    }

    /// Workflows that reference the given tool, in definition order
    pub fn workflows_using(&self, tool_key: &str) -> Vec<&WorkflowEntry> {
        self.workflows
            .entries
            .iter()
            .filter(|w| w.uses_tool(tool_key))
            .collect()
    }

    /// Every workflow reference that does not resolve to a tool
    pub fn validate(&self) -> Vec<ValidationIssue> {
        self.workflows
            .entries
            .iter()
            .flat_map(|w| {
                w.tool_refs
                    .iter()
                    .filter(|t| !self.tools.contains(t))
                    .map(|t| ValidationIssue {
                        workflow: w.key.clone(),
                        tool: t.clone(),
                    })
            })
            .collect()
    }

    /// Fail with the first dangling reference, if any
    pub fn ensure_valid(&self) -> Result<()> {
        match self.validate().into_iter().next() {
            Some(issue) => Err(issue.into()),
            None => Ok(()),
        }
    }

    /// Number of tools; workflows are counted separately
    pub fn tool_count(&self) -> usize {
        self.tools.entries.len()
    }

    /// Number of workflows
    pub fn workflow_count(&self) -> usize {
        self.workflows.entries.len()
    }
}
