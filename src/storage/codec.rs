//! JSON codec between typed collections and a [`StoragePort`].
//!
//! None of these functions fail. A missing key loads as an empty
//! collection; unreadable or malformed text loads as an empty collection
//! with a [`LoadIssue`] attached; write failures are logged and dropped.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

use super::StoragePort;

/// Why a load fell back to the empty collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadIssue {
    /// The stored text is not a JSON array of the expected records.
    Malformed { key: String, message: String },
    /// The storage backend failed to read the key.
    Unreadable { key: String, message: String },
}

impl LoadIssue {
    pub fn key(&self) -> &str {
        match self {
            Self::Malformed { key, .. } | Self::Unreadable { key, .. } => key,
        }
    }
}

impl fmt::Display for LoadIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed { key, message } => {
                write!(f, "stored data for '{}' is malformed: {}", key, message)
            }
            Self::Unreadable { key, message } => {
                write!(f, "stored data for '{}' could not be read: {}", key, message)
            }
        }
    }
}

/// Result of [`load`]: the collection plus an optional recovery signal.
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded<T> {
    pub items: Vec<T>,
    pub issue: Option<LoadIssue>,
}

impl<T> Loaded<T> {
    fn ok(items: Vec<T>) -> Self {
        Self { items, issue: None }
    }

    fn recovered(issue: LoadIssue) -> Self {
        Self {
            items: Vec::new(),
            issue: Some(issue),
        }
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn is_clean(&self) -> bool {
        self.issue.is_none()
    }
}

/// Read the collection stored under `key`.
///
/// Read-only: a malformed value is reported and left in place.
pub fn load<T, P>(port: &P, key: &str) -> Loaded<T>
where
    T: DeserializeOwned,
    P: StoragePort + ?Sized,
{
    let raw = match port.read(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Loaded::ok(Vec::new()),
        Err(e) => {
            tracing::warn!("Failed to load {} from storage: {:#}", key, e);
            return Loaded::recovered(LoadIssue::Unreadable {
                key: key.to_string(),
                message: format!("{:#}", e),
            });
        }
    };

    match serde_json::from_str::<Vec<T>>(&raw) {
        Ok(items) => Loaded::ok(items),
        Err(e) => {
            tracing::warn!("Failed to load {} from storage: {}", key, e);
            Loaded::recovered(LoadIssue::Malformed {
                key: key.to_string(),
                message: e.to_string(),
            })
        }
    }
}

/// Overwrite `key` with the full collection.
pub fn save<T, P>(port: &mut P, key: &str, items: &[T])
where
    T: Serialize,
    P: StoragePort + ?Sized,
{
    let json = match serde_json::to_string(items) {
        Ok(json) => json,
        Err(e) => {
            tracing::warn!("Failed to serialize {}: {}", key, e);
            return;
        }
    };

    if let Err(e) = port.write(key, &json) {
        tracing::warn!("Failed to save {} to storage: {:#}", key, e);
    } else {
        tracing::debug!("Saved {} ({} items)", key, items.len());
    }
}

/// Remove `key` entirely.
pub fn erase<P>(port: &mut P, key: &str)
where
    P: StoragePort + ?Sized,
{
    if let Err(e) = port.remove(key) {
        tracing::warn!("Failed to erase {} from storage: {:#}", key, e);
    } else {
        tracing::debug!("Erased {}", key);
    }
}
