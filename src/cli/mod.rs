//! CLI module for refltools - command-line interface and subcommands.
//!
//! Provides the main entry point with subcommands for browsing the tool
//! catalog, workflows, guides, and the local data inventory.

pub mod commands;

pub use commands::Cli;
