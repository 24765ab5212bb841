//! In-process storage backends.

use anyhow::Result;
use std::collections::HashMap;

use super::StoragePort;

/// Keeps values in a map for the lifetime of the value.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a key, e.g. with corrupt text in tests.
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl StoragePort for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }

    fn is_durable(&self) -> bool {
        false
    }
}

/// Storage for contexts without a durable medium.
///
/// Reads find nothing and writes are dropped, so the in-memory collections
/// behave normally but nothing outlives the process.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopStorage;

impl StoragePort for NoopStorage {
    fn read(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    fn write(&mut self, key: &str, _value: &str) -> Result<()> {
        tracing::trace!("No durable storage, skipping write of {}", key);
        Ok(())
    }

    fn remove(&mut self, _key: &str) -> Result<()> {
        Ok(())
    }

    fn is_durable(&self) -> bool {
        false
    }
}
