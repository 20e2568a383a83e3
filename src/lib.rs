//! refltools - catalog of neutron reflectometry analysis tools
//!
//! Describes the available analysis tools and the workflows that combine them.
//! The tools themselves are never run from here; only their metadata is stored.

pub mod config;
pub mod error;
pub mod registry;
pub mod report;

pub use error::{CatalogError, Result};
pub use registry::{DataCategory, Registry, ToolEntry, ValidationIssue, WorkflowEntry};
