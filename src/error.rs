//! Error types for mushaf operations.
//!
//! This module defines [`MushafError`], the error type used by the outer
//! surfaces of the crate (settings, the content API, the CLI), and a
//! [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - The favorites/history store never returns errors: storage problems
//!   degrade to empty collections and are logged
//! - Use `MushafError` for failures the user has to act on
//! - Use `anyhow::Error` (via `MushafError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for mushaf operations.
#[derive(Debug, Error)]
pub enum MushafError {
    /// Settings file not found at an explicitly given location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse the settings file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid settings values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// A verse reference could not be parsed.
    #[error("Invalid ayah reference '{input}': expected SURAH:AYAH, e.g. 2:255")]
    InvalidAyahRef { input: String },

    /// The requested verse does not exist in the chapter returned by the API.
    #[error("Ayah {ayah_number} not found in surah {surah_id}")]
    AyahNotFound { surah_id: u32, ayah_number: u32 },

    /// The content API could not be reached or answered with an error.
    #[error("Request to {url} failed: {message}")]
    Remote { url: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for mushaf operations.
pub type Result<T> = std::result::Result<T, MushafError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = MushafError::ConfigNotFound {
            path: PathBuf::from("/foo/config.yml"),
        };
        assert!(err.to_string().contains("/foo/config.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = MushafError::ConfigParseError {
            path: PathBuf::from("/config.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/config.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn config_validation_error_displays_message() {
        let err = MushafError::ConfigValidationError {
            message: "timeout_secs must be greater than zero".into(),
        };
        assert!(err.to_string().contains("timeout_secs"));
    }

    #[test]
    fn invalid_ayah_ref_shows_input_and_format() {
        let err = MushafError::InvalidAyahRef {
            input: "two".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("'two'"));
        assert!(msg.contains("SURAH:AYAH"));
    }

    #[test]
    fn ayah_not_found_displays_key() {
        let err = MushafError::AyahNotFound {
            surah_id: 1,
            ayah_number: 8,
        };
        assert_eq!(err.to_string(), "Ayah 8 not found in surah 1");
    }

    #[test]
    fn remote_error_displays_url_and_message() {
        let err = MushafError::Remote {
            url: "https://example.com/api/surah".into(),
            message: "HTTP 503".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("https://example.com/api/surah"));
        assert!(msg.contains("HTTP 503"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: MushafError = io_err.into();
        assert!(matches!(err, MushafError::Io(_)));
    }

    #[test]
    fn anyhow_error_converts_to_other() {
        let err: MushafError = anyhow::anyhow!("boom").into();
        assert!(matches!(err, MushafError::Other(_)));
        assert_eq!(err.to_string(), "boom");
    }
}
