//! Command-line interface for mushaf.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, CompletionsArgs, SitemapArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
