//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - tools/tool: list or describe analysis tools
//! - workflows/workflow: list or describe analysis workflows
//! - validate: check workflow references against the tool catalog
//! - welcome, quick-start, choose, data: getting-started help

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// refltools - Neutron reflectometry analysis tool catalog
#[derive(Parser, Debug)]
#[command(name = "refltools")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit JSON instead of text where supported
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the full overview of tools, workflows and data layout
    Overview,

    /// Show a welcome message followed by the overview
    Welcome,

    /// List analysis tools
    Tools {
        /// Only tools applicable to this data type (partial, combined, both)
        #[arg(short, long)]
        data_type: Option<String>,
    },

    /// Describe one analysis tool
    Tool {
        /// Tool key (e.g. run_fit)
        key: String,
    },

    /// List analysis workflows with their steps
    Workflows,

    /// Describe one analysis workflow
    Workflow {
        /// Workflow key (e.g. standard_fitting)
        key: String,
    },

    /// Check that every workflow references known tools
    Validate,

    /// Show a quick start guide
    QuickStart {
        /// Data type to focus on (partial, combined, both)
        #[arg(short, long, default_value = "combined")]
        data_type: String,
    },

    /// Help choose the right tool for an analysis goal
    Choose,

    /// Show which data sets are available on disk
    Data,
}
