//! CLI module for translatr - command-line interface and subcommands.
//!
//! Provides the main entry point with a one-shot translate command, the
//! language list, and the interactive form.

pub mod commands;
pub mod form;

pub use commands::Cli;
