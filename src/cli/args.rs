//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use super::commands::favorites::FavoritesArgs;
use super::commands::history::HistoryArgs;

/// Mushaf - Quran favorites, reading history and sitemap tooling.
#[derive(Debug, Parser)]
#[command(name = "mushaf")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default ~/.mushaf/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding favorites and history
    #[arg(long, global = true, env = "MUSHAF_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Root URL of the Quran content API
    #[arg(long, global = true, env = "MUSHAF_API_URL")]
    pub api_url: Option<String>,

    /// Keep favorites and history in memory only
    #[arg(long, global = true)]
    pub ephemeral: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage favorite verses
    Favorites(FavoritesArgs),

    /// Show or update the last-read marker
    History(HistoryArgs),

    /// Generate the site's XML sitemap
    Sitemap(SitemapArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `sitemap` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SitemapArgs {
    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Public site root (overrides base_url from config)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
