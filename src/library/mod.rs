//! Favorites and reading history.
//!
//! This module holds the verse record types and [`UserData`], the store
//! that keeps the favorites list and the last-read marker in memory and
//! writes them through to a [`crate::storage::StoragePort`].
//!
//! # Example
//!
//! ```
//! use mushaf::library::{Ayah, UserData};
//! use mushaf::storage::MemoryStorage;
//!
//! let mut data = UserData::open(MemoryStorage::new());
//! data.add_favorite(Ayah {
//!     surah_id: 2,
//!     surah_name: "Al-Baqarah".into(),
//!     surah_slug: "al-baqarah".into(),
//!     ayah_number: 255,
//!     ayah_text: "…".into(),
//!     translation: "…".into(),
//! });
//! assert!(data.is_favorite(2, 255));
//! ```

mod ayah;
mod clock;
mod store;

pub use ayah::{Ayah, AyahKey, AyahRecord, FavoriteEntry, HistoryEntry};
pub use clock::{Clock, ManualClock, SystemClock};
pub use store::{SharedUserData, UserData};
