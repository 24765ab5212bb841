//! Mushaf - favorites and reading history for a Quran reading app.
//!
//! The core is a small store that keeps a list of favorite verses and a
//! single last-read marker, mirrored to durable key/value storage on every
//! change. Around it sit a client for the Quran content API, a sitemap
//! generator for the public site, and a CLI.
//!
//! # Modules
//!
//! - [`library`] - Verse records and the favorites/history store
//! - [`storage`] - Storage backends and the JSON codec
//! - [`quran`] - Content API client and slugs
//! - [`sitemap`] - XML sitemap generation
//! - [`settings`] - Configuration loading and validation
//! - [`cli`] - Command-line interface and argument parsing
//! - [`ui`] - Terminal output and prompts
//! - [`error`] - Error types and result aliases
//!
//! # Example
//!
//! ```
//! use mushaf::library::{Ayah, UserData};
//! use mushaf::storage::{MemoryStorage, FAVORITES_KEY};
//!
//! let mut data = UserData::open(MemoryStorage::new());
//! data.record_history(Ayah {
//!     surah_id: 18,
//!     surah_name: "Al-Kahf".into(),
//!     surah_slug: "al-kahf".into(),
//!     ayah_number: 10,
//!     ayah_text: "…".into(),
//!     translation: "…".into(),
//! });
//!
//! assert_eq!(data.last_read().map(|e| e.key().to_string()), Some("18:10".into()));
//! assert!(!data.storage().contains(FAVORITES_KEY));
//! ```

pub mod cli;
pub mod error;
pub mod library;
pub mod quran;
pub mod settings;
pub mod sitemap;
pub mod storage;
pub mod ui;

pub use error::{MushafError, Result};
