//! Durable key-value text storage for user data.
//!
//! The store in [`crate::library`] never touches the filesystem directly.
//! It talks to a [`StoragePort`], picked once at startup:
//!
//! - [`FileStorage`] - one JSON file per key in a data directory
//! - [`MemoryStorage`] - in-process map, for tests and embedding
//! - [`NoopStorage`] - no durable medium available; everything is skipped
//!
//! The [`codec`] functions sit between the port and typed collections and
//! turn every storage failure into a logged, recoverable outcome.

pub mod codec;
mod file;
mod memory;

pub use codec::{erase, load, save, LoadIssue, Loaded};
pub use file::FileStorage;
pub use memory::{MemoryStorage, NoopStorage};

use anyhow::Result;
use std::path::PathBuf;

/// Storage key holding the favorites collection (JSON array, newest first).
pub const FAVORITES_KEY: &str = "quran-favorites";

/// Storage key holding the history collection (JSON array of 0 or 1 items).
pub const HISTORY_KEY: &str = "quran-history";

/// A string-keyed text store.
///
/// Implementations report failures; callers in this crate go through
/// [`codec`], which logs them and carries on.
pub trait StoragePort {
    /// Read the raw text stored under `key`, or `None` if there is none.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn write(&mut self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`. Deleting a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;

    /// Whether writes survive the current process.
    fn is_durable(&self) -> bool {
        true
    }
}

impl<P: StoragePort + ?Sized> StoragePort for Box<P> {
    fn read(&self, key: &str) -> Result<Option<String>> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).write(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }

    fn is_durable(&self) -> bool {
        (**self).is_durable()
    }
}

/// Get the default data directory.
pub fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("mushaf")
}
