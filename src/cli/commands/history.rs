//! History command implementation.
//!
//! The `mushaf history` command shows and updates the last-read marker.

use clap::{Args, Subcommand};

use crate::error::Result;
use crate::library::AyahKey;
use crate::settings::Settings;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::{client, describe, open_store, show_record};

/// Arguments for the history command.
#[derive(Debug, Clone, Args)]
pub struct HistoryArgs {
    #[command(subcommand)]
    pub command: HistorySubcommand,
}

/// History subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum HistorySubcommand {
    /// Show the last-read verse.
    Show {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Mark a verse as last read.
    Record {
        /// Verse reference, e.g. 18:10.
        #[arg(value_name = "SURAH:AYAH")]
        reference: AyahKey,
    },
    /// Forget the last-read verse.
    Clear,
}

/// The history command implementation.
pub struct HistoryCommand {
    settings: Settings,
    args: HistoryArgs,
}

impl HistoryCommand {
    /// Create a new history command.
    pub fn new(settings: &Settings, args: HistoryArgs) -> Self {
        Self {
            settings: settings.clone(),
            args,
        }
    }
}

impl Command for HistoryCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut data = open_store(&self.settings, ui);

        match &self.args.command {
            HistorySubcommand::Show { json } => {
                if *json {
                    let output = serde_json::to_string_pretty(data.history())
                        .map_err(anyhow::Error::from)?;
                    ui.message(&output);
                } else {
                    match data.last_read() {
                        Some(entry) => {
                            ui.message("Last read:");
                            show_record(ui, entry);
                        }
                        None => ui.message("No reading history"),
                    }
                }
            }
            HistorySubcommand::Record { reference } => {
                let ayah = client(&self.settings)?.ayah(*reference)?;
                let label = describe(*reference, &ayah.surah_name);
                data.record_history(ayah);
                ui.success(&format!("Marked {} as last read", label));
            }
            HistorySubcommand::Clear => {
                data.clear_history();
                ui.success("Reading history cleared");
            }
        }

        Ok(CommandResult::success())
    }
}
