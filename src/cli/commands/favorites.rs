//! Favorites command implementation.
//!
//! Provides `mushaf favorites list`, `add`, `remove`, `check` and `clear`.

use clap::{Args, Subcommand};

use crate::error::Result;
use crate::library::AyahKey;
use crate::settings::Settings;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::{client, describe, open_store, show_record};

/// Arguments for the favorites command.
#[derive(Debug, Clone, Args)]
pub struct FavoritesArgs {
    #[command(subcommand)]
    pub command: FavoritesSubcommand,
}

/// Favorites subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum FavoritesSubcommand {
    /// List favorites, newest first.
    List {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Fetch a verse and add it to favorites.
    Add {
        /// Verse reference, e.g. 2:255.
        #[arg(value_name = "SURAH:AYAH")]
        reference: AyahKey,
    },
    /// Remove a verse from favorites.
    Remove {
        /// Verse reference, e.g. 2:255.
        #[arg(value_name = "SURAH:AYAH")]
        reference: AyahKey,
    },
    /// Exit 0 if the verse is a favorite, 1 otherwise.
    Check {
        /// Verse reference, e.g. 2:255.
        #[arg(value_name = "SURAH:AYAH")]
        reference: AyahKey,
    },
    /// Remove all favorites.
    Clear {
        /// Don't prompt for confirmation.
        #[arg(short, long)]
        force: bool,
    },
}

/// The favorites command implementation.
pub struct FavoritesCommand {
    settings: Settings,
    args: FavoritesArgs,
}

impl FavoritesCommand {
    /// Create a new favorites command.
    pub fn new(settings: &Settings, args: FavoritesArgs) -> Self {
        Self {
            settings: settings.clone(),
            args,
        }
    }
}

impl Command for FavoritesCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &self.args.command {
            FavoritesSubcommand::List { json } => self.list(*json, ui),
            FavoritesSubcommand::Add { reference } => self.add(*reference, ui),
            FavoritesSubcommand::Remove { reference } => self.remove(*reference, ui),
            FavoritesSubcommand::Check { reference } => self.check(*reference, ui),
            FavoritesSubcommand::Clear { force } => self.clear(*force, ui),
        }
    }
}

impl FavoritesCommand {
    fn list(&self, json: bool, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let data = open_store(&self.settings, ui);

        if json {
            let output = serde_json::to_string_pretty(data.favorites())
                .map_err(anyhow::Error::from)?;
            ui.message(&output);
            return Ok(CommandResult::success());
        }

        if data.favorites().is_empty() {
            ui.message("No favorites yet");
            return Ok(CommandResult::success());
        }

        if ui.output_mode().shows_status() {
            let count = data.favorites().len();
            ui.message(&format!(
                "{} favorite{}:\n",
                count,
                if count == 1 { "" } else { "s" }
            ));
        }
        for entry in data.favorites() {
            show_record(ui, entry);
        }

        Ok(CommandResult::success())
    }

    fn add(&self, key: AyahKey, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut data = open_store(&self.settings, ui);

        if let Some(existing) = data.favorite(key) {
            let label = describe(key, &existing.ayah.surah_name);
            ui.message(&format!("{} is already a favorite", label));
            return Ok(CommandResult::success());
        }

        let ayah = client(&self.settings)?.ayah(key)?;
        let label = describe(key, &ayah.surah_name);
        data.add_favorite(ayah);
        ui.success(&format!("Added {} to favorites", label));

        Ok(CommandResult::success())
    }

    fn remove(&self, key: AyahKey, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut data = open_store(&self.settings, ui);

        if data.remove_favorite(key.surah_id, key.ayah_number) {
            ui.success(&format!("Removed {} from favorites", key));
        } else {
            ui.warning(&format!("{} is not a favorite", key));
        }

        Ok(CommandResult::success())
    }

    fn check(&self, key: AyahKey, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let data = open_store(&self.settings, ui);

        if data.is_favorite(key.surah_id, key.ayah_number) {
            ui.message(&format!("{} is a favorite", key));
            Ok(CommandResult::success())
        } else {
            ui.message(&format!("{} is not a favorite", key));
            Ok(CommandResult::failure(1))
        }
    }

    fn clear(&self, force: bool, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut data = open_store(&self.settings, ui);
        let count = data.favorites().len();

        if count == 0 {
            ui.message("No favorites to clear");
            return Ok(CommandResult::success());
        }

        if !force && ui.is_interactive() {
            let question = format!("Remove all {} favorites?", count);
            if !ui.confirm(&question, false)? {
                ui.message("Cancelled");
                return Ok(CommandResult::success());
            }
        }

        data.clear_favorites();
        ui.success(&format!("Cleared {} favorites", count));

        Ok(CommandResult::success())
    }
}
