//! Tool registry - analysis tool metadata, workflows, and catalog queries

mod builtins;
mod catalog;
mod definition;

pub use builtins::{BUILTIN_TOOL_COUNT, BUILTIN_WORKFLOW_COUNT, builtin_tools, builtin_workflows};
pub use catalog::{Registry, ValidationIssue};
pub use definition::{DataCategory, ToolEntry, WorkflowEntry};
