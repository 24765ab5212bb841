//! Shared helpers for commands that read or change the user's data.

use chrono::{DateTime, Local};

use crate::error::Result;
use crate::library::{AyahKey, AyahRecord, UserData};
use crate::quran::QuranClient;
use crate::settings::Settings;
use crate::storage::StoragePort;
use crate::ui::UserInterface;

/// The store behind every data command.
pub type Store = UserData<Box<dyn StoragePort>>;

/// Open the store for `settings`, reporting anything that failed to load.
pub fn open_store(settings: &Settings, ui: &mut dyn UserInterface) -> Store {
    let data = UserData::open(settings.storage());
    if !data.storage().is_durable() {
        ui.warning("Ephemeral mode: changes will not be saved");
    }
    for issue in data.load_issues() {
        ui.warning(&format!("{}; starting with an empty list", issue));
    }
    data
}

/// Content client for `settings`.
pub fn client(settings: &Settings) -> Result<QuranClient> {
    QuranClient::new(settings.api_url.as_str(), settings.timeout())
}

/// Format a millisecond timestamp in local time.
pub fn format_timestamp(millis: i64) -> String {
    match DateTime::from_timestamp_millis(millis) {
        Some(utc) => utc
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M")
            .to_string(),
        None => "unknown time".to_string(),
    }
}

/// One-line summary of a stored verse, e.g. `2:255  Al-Baqarah`.
pub fn record_line(record: &AyahRecord) -> String {
    format!(
        "{:<8} {} ({})",
        record.key().to_string(),
        record.ayah.surah_name,
        format_timestamp(record.timestamp)
    )
}

/// Print a record with its translation underneath.
pub fn show_record(ui: &mut dyn UserInterface, record: &AyahRecord) {
    ui.message(&record_line(record));
    if !record.ayah.translation.is_empty() {
        ui.message(&format!("         {}", record.ayah.translation));
    }
}

/// Human label for a verse reference in status messages.
pub fn describe(key: AyahKey, surah_name: &str) -> String {
    if surah_name.is_empty() {
        key.to_string()
    } else {
        format!("{} {}", surah_name, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::Ayah;
    use crate::storage::FAVORITES_KEY;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn record() -> AyahRecord {
        AyahRecord::new(
            Ayah {
                surah_id: 2,
                surah_name: "Al-Baqarah".into(),
                surah_slug: "al-baqarah".into(),
                ayah_number: 255,
                ayah_text: "ٱللَّهُ لَآ إِلَٰهَ إِلَّا هُوَ".into(),
                translation: "Allah, tidak ada tuhan selain Dia.".into(),
            },
            1_700_000_000_000,
        )
    }

    #[test]
    fn record_line_shows_reference_and_name() {
        let line = record_line(&record());
        assert!(line.starts_with("2:255"));
        assert!(line.contains("Al-Baqarah"));
    }

    #[test]
    fn show_record_includes_translation() {
        let mut ui = MockUI::new();
        show_record(&mut ui, &record());
        assert_eq!(ui.messages().len(), 2);
        assert!(ui.has_message("tidak ada tuhan"));
    }

    #[test]
    fn format_timestamp_out_of_range() {
        assert_eq!(format_timestamp(i64::MAX), "unknown time");
    }

    #[test]
    fn describe_falls_back_to_key() {
        assert_eq!(describe(AyahKey::new(1, 1), ""), "1:1");
        assert_eq!(describe(AyahKey::new(1, 1), "Al-Fatihah"), "Al-Fatihah 1:1");
    }

    #[test]
    fn open_store_warns_when_not_durable() {
        let settings = Settings {
            ephemeral: true,
            ..Default::default()
        };
        let mut ui = MockUI::new();

        open_store(&settings, &mut ui);

        assert!(ui.has_warning("changes will not be saved"));
    }

    #[test]
    fn open_store_durable_is_quiet() {
        let temp = TempDir::new().unwrap();
        let settings = Settings {
            data_dir: Some(temp.path().to_path_buf()),
            ..Default::default()
        };
        let mut ui = MockUI::new();

        open_store(&settings, &mut ui);

        assert!(ui.warnings().is_empty());
    }

    #[test]
    fn open_store_warns_on_corrupt_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(format!("{}.json", FAVORITES_KEY)), "{oops").unwrap();
        let settings = Settings {
            data_dir: Some(temp.path().to_path_buf()),
            ..Default::default()
        };
        let mut ui = MockUI::new();

        let data = open_store(&settings, &mut ui);

        assert!(data.favorites().is_empty());
        assert!(ui.has_warning(FAVORITES_KEY));
    }
}
