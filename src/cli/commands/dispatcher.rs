//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::settings::{load_settings, validate, Settings};
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command, reporting through `ui`.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Load settings and apply the global flags on top.
///
/// Flags win over the config file. The result is validated.
pub fn resolve_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = load_settings(cli.config.as_deref())?;

    if let Some(dir) = &cli.data_dir {
        settings.data_dir = Some(dir.clone());
    }
    if let Some(url) = &cli.api_url {
        settings.api_url = url.clone();
    }
    settings.ephemeral |= cli.ephemeral;

    validate(&settings)?;
    tracing::debug!("Resolved settings: {:?}", settings);
    Ok(settings)
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    settings: Settings,
}

impl CommandDispatcher {
    /// Create a new dispatcher with resolved settings.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Create a dispatcher from parsed arguments.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        Ok(Self::new(resolve_settings(cli)?))
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Commands::Favorites(args) => {
                let cmd = super::favorites::FavoritesCommand::new(&self.settings, args.clone());
                cmd.execute(ui)
            }
            Commands::History(args) => {
                let cmd = super::history::HistoryCommand::new(&self.settings, args.clone());
                cmd.execute(ui)
            }
            Commands::Sitemap(args) => {
                let cmd = super::sitemap::SitemapCommand::new(&self.settings, args.clone());
                cmd.execute(ui)
            }
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MushafError;
    use crate::ui::MockUI;
    use clap::Parser;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn flags_override_config_file() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("config.yml");
        fs::write(
            &config,
            "data_dir: /from/file\napi_url: https://file.example.com/api\n",
        )
        .unwrap();

        let cli = Cli::parse_from([
            "mushaf",
            "--config",
            config.to_str().unwrap(),
            "--data-dir",
            "/from/flag",
            "--ephemeral",
            "favorites",
            "list",
        ]);
        let settings = resolve_settings(&cli).unwrap();

        assert_eq!(settings.data_dir, Some(PathBuf::from("/from/flag")));
        assert_eq!(settings.api_url, "https://file.example.com/api");
        assert!(settings.ephemeral);
    }

    #[test]
    fn invalid_flag_value_fails_validation() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("config.yml");
        fs::write(&config, "").unwrap();

        let cli = Cli::parse_from([
            "mushaf",
            "--config",
            config.to_str().unwrap(),
            "--api-url",
            "not-a-url",
            "favorites",
            "list",
        ]);

        let err = resolve_settings(&cli).unwrap_err();
        assert!(matches!(err, MushafError::ConfigValidationError { .. }));
    }

    #[test]
    fn dispatches_favorites_list() {
        let temp = TempDir::new().unwrap();
        let settings = Settings {
            data_dir: Some(temp.path().to_path_buf()),
            ..Default::default()
        };
        let cli = Cli::parse_from(["mushaf", "favorites", "list"]);
        let mut ui = MockUI::new();

        let result = CommandDispatcher::new(settings)
            .dispatch(&cli, &mut ui)
            .unwrap();

        assert!(result.success);
        assert!(ui.has_message("No favorites yet"));
    }
}
