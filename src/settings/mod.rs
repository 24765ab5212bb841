//! User settings.
//!
//! Settings come from an optional YAML file, by default
//! `~/.mushaf/config.yml`. Every key is optional:
//!
//! ```yaml
//! data_dir: ~/.local/share/mushaf
//! api_url: https://quran-api.santrikoding.com/api
//! base_url: https://quran.portal-islam.com
//! timeout_secs: 30
//! ephemeral: false
//! ```
//!
//! # Example
//!
//! ```
//! use mushaf::settings::{parse_settings, validate};
//! use std::path::Path;
//!
//! let settings = parse_settings("timeout_secs: 5", Path::new("config.yml")).unwrap();
//! validate(&settings).unwrap();
//! assert_eq!(settings.timeout_secs, 5);
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{MushafError, Result};
use crate::quran::DEFAULT_API_URL;
use crate::sitemap::DEFAULT_BASE_URL;
use crate::storage::{default_data_dir, FileStorage, NoopStorage, StoragePort};

/// Settings for the store, the content client and the sitemap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory holding the favorites and history files
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Root of the Quran content API
    pub api_url: String,

    /// Public site root used in the sitemap
    pub base_url: String,

    /// HTTP timeout in seconds
    pub timeout_secs: u64,

    /// Keep favorites and history in memory only
    #[serde(skip_serializing_if = "is_false")]
    pub ephemeral: bool,
}

fn is_false(b: &bool) -> bool {
    !b
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: None,
            api_url: DEFAULT_API_URL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            ephemeral: false,
        }
    }
}

impl Settings {
    /// The data directory, with a leading `~` expanded.
    pub fn data_dir(&self) -> PathBuf {
        match &self.data_dir {
            Some(dir) => expand_home(dir),
            None => default_data_dir(),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The storage backend these settings call for.
    pub fn storage(&self) -> Box<dyn StoragePort> {
        if self.ephemeral {
            tracing::debug!("Ephemeral mode, favorites and history will not be saved");
            Box::new(NoopStorage)
        } else {
            let dir = self.data_dir();
            tracing::debug!("Using data directory {}", dir.display());
            Box::new(FileStorage::new(dir))
        }
    }
}

/// Default settings file location: `~/.mushaf/config.yml`.
pub fn default_settings_path() -> Option<PathBuf> {
    Some(dirs::home_dir()?.join(".mushaf").join("config.yml"))
}

/// Load settings.
///
/// An explicit `path` must exist. Without one, the default location is
/// used if present, otherwise defaults apply.
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    match path {
        Some(path) => {
            if !path.exists() {
                return Err(MushafError::ConfigNotFound {
                    path: path.to_path_buf(),
                });
            }
            load_settings_file(path)
        }
        None => match default_settings_path() {
            Some(path) if path.exists() => load_settings_file(&path),
            _ => Ok(Settings::default()),
        },
    }
}

/// Load settings from a file.
pub fn load_settings_file(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path)?;
    parse_settings(&content, path)
}

/// Parse settings YAML. `path` is only used in error messages.
pub fn parse_settings(content: &str, path: &Path) -> Result<Settings> {
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }

    serde_yaml::from_str(content).map_err(|e| MushafError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Check settings values, reporting every problem at once.
pub fn validate(settings: &Settings) -> Result<()> {
    let mut errors = Vec::new();

    for (name, url) in [("api_url", &settings.api_url), ("base_url", &settings.base_url)] {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            errors.push(format!("{} must be an http(s) URL, got '{}'", name, url));
        }
    }

    if settings.timeout_secs == 0 {
        errors.push("timeout_secs must be greater than zero".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(MushafError::ConfigValidationError {
            message: errors.join("; "),
        })
    }
}

fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| path.to_path_buf()),
        Err(_) => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert_eq!(settings.api_url, DEFAULT_API_URL);
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.timeout(), Duration::from_secs(30));
        assert!(!settings.ephemeral);
        assert_eq!(settings.data_dir(), default_data_dir());
    }

    #[test]
    fn parse_partial_file_keeps_other_defaults() {
        let settings = parse_settings(
            "base_url: https://example.com\nephemeral: true\n",
            Path::new("config.yml"),
        )
        .unwrap();

        assert_eq!(settings.base_url, "https://example.com");
        assert!(settings.ephemeral);
        assert_eq!(settings.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn parse_empty_file_is_default() {
        let settings = parse_settings("  \n", Path::new("config.yml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn parse_invalid_yaml_reports_path() {
        let err = parse_settings("timeout_secs: [nope", Path::new("/etc/mushaf.yml")).unwrap_err();
        assert!(matches!(err, MushafError::ConfigParseError { .. }));
        assert!(err.to_string().contains("/etc/mushaf.yml"));
    }

    #[test]
    fn parse_wrong_type_is_error() {
        let result = parse_settings("timeout_secs: soon", Path::new("config.yml"));
        assert!(result.is_err());
    }

    #[test]
    fn load_explicit_missing_file_is_not_found() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.yml");

        let err = load_settings(Some(&path)).unwrap_err();
        assert!(matches!(err, MushafError::ConfigNotFound { .. }));
    }

    #[test]
    fn load_explicit_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");
        fs::write(&path, "data_dir: /var/lib/mushaf\ntimeout_secs: 3\n").unwrap();

        let settings = load_settings(Some(&path)).unwrap();

        assert_eq!(settings.data_dir(), PathBuf::from("/var/lib/mushaf"));
        assert_eq!(settings.timeout_secs, 3);
    }

    #[test]
    fn validate_accepts_defaults() {
        validate(&Settings::default()).unwrap();
    }

    #[test]
    fn validate_reports_all_problems() {
        let settings = Settings {
            api_url: "ftp://example.com".into(),
            base_url: "example.com".into(),
            timeout_secs: 0,
            ..Default::default()
        };

        let msg = validate(&settings).unwrap_err().to_string();
        assert!(msg.contains("api_url"));
        assert!(msg.contains("base_url"));
        assert!(msg.contains("timeout_secs"));
    }

    #[test]
    fn data_dir_expands_home() {
        let settings = Settings {
            data_dir: Some(PathBuf::from("~/quran")),
            ..Default::default()
        };

        if let Some(home) = dirs::home_dir() {
            assert_eq!(settings.data_dir(), home.join("quran"));
        }
    }

    #[test]
    fn storage_follows_ephemeral_flag() {
        let temp = TempDir::new().unwrap();
        let durable = Settings {
            data_dir: Some(temp.path().to_path_buf()),
            ..Default::default()
        };
        let ephemeral = Settings {
            ephemeral: true,
            ..durable.clone()
        };

        assert!(durable.storage().is_durable());
        assert!(!ephemeral.storage().is_durable());
    }

    #[test]
    fn serializes_without_unset_fields() {
        let yaml = serde_yaml::to_string(&Settings::default()).unwrap();
        assert!(yaml.contains("api_url"));
        assert!(!yaml.contains("data_dir"));
        assert!(!yaml.contains("ephemeral"));
    }
}
