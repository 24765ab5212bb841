//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. Commands are
//! routed by [`CommandDispatcher`], which resolves settings once from the
//! config file and global flags.

pub mod completions;
pub mod dispatcher;
pub mod display;
pub mod favorites;
pub mod history;
pub mod sitemap;

pub use dispatcher::{resolve_settings, Command, CommandDispatcher, CommandResult};
