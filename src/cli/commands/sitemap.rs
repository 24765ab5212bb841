//! Sitemap command implementation.

use chrono::Utc;
use std::fs;

use crate::cli::args::SitemapArgs;
use crate::error::Result;
use crate::settings::{validate, Settings};
use crate::sitemap::{generate, SitemapBuilder};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::client;

/// The sitemap command implementation.
pub struct SitemapCommand {
    settings: Settings,
    args: SitemapArgs,
}

impl SitemapCommand {
    /// Create a new sitemap command.
    pub fn new(settings: &Settings, args: SitemapArgs) -> Self {
        Self {
            settings: settings.clone(),
            args,
        }
    }

    /// Settings with `--base-url` applied, checked like the config file.
    fn effective_settings(&self) -> Result<Settings> {
        let mut settings = self.settings.clone();
        if let Some(url) = &self.args.base_url {
            settings.base_url = url.clone();
            validate(&settings)?;
        }
        Ok(settings)
    }
}

impl Command for SitemapCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let settings = self.effective_settings()?;
        let builder = SitemapBuilder::new(&settings.base_url, Utc::now());
        let xml = generate(&client(&settings)?, &builder);

        match &self.args.output {
            Some(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(parent)?;
                }
                fs::write(path, &xml)?;
                ui.success(&format!("Wrote sitemap to {}", path.display()));
            }
            None => ui.message(xml.trim_end()),
        }

        Ok(CommandResult::success())
    }
}
