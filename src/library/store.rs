//! The favorites and last-read store.
//!
//! [`UserData`] owns both collections and mirrors every mutation to its
//! [`StoragePort`] right away (write-through, one full-collection write per
//! change). Reads never touch storage; storage is only read by
//! [`UserData::hydrate`].

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use crate::storage::{self, LoadIssue, StoragePort, FAVORITES_KEY, HISTORY_KEY};

use super::{Ayah, AyahKey, Clock, FavoriteEntry, HistoryEntry, SystemClock};

/// A [`UserData`] shared by every consumer on the UI thread.
pub type SharedUserData<S> = Rc<RefCell<UserData<S>>>;

/// Favorites and reading history for one installation.
pub struct UserData<S: StoragePort> {
    storage: S,
    clock: Box<dyn Clock>,
    /// Newest first, unique on (surah, ayah).
    favorites: Vec<FavoriteEntry>,
    /// At most one entry.
    history: Vec<HistoryEntry>,
    load_issues: Vec<LoadIssue>,
}

impl<S: StoragePort> UserData<S> {
    /// Create an empty store. Nothing is read until [`hydrate`](Self::hydrate).
    pub fn new(storage: S) -> Self {
        Self::with_clock(storage, SystemClock)
    }

    /// Create an empty store that stamps records with `clock`.
    pub fn with_clock(storage: S, clock: impl Clock + 'static) -> Self {
        Self {
            storage,
            clock: Box::new(clock),
            favorites: Vec::new(),
            history: Vec::new(),
            load_issues: Vec::new(),
        }
    }

    /// Create a store and hydrate it from `storage`.
    pub fn open(storage: S) -> Self {
        let mut data = Self::new(storage);
        data.hydrate();
        data
    }

    /// Like [`open`](Self::open), stamping records with `clock`.
    pub fn open_with_clock(storage: S, clock: impl Clock + 'static) -> Self {
        let mut data = Self::with_clock(storage, clock);
        data.hydrate();
        data
    }

    /// Wrap the store for shared access.
    pub fn into_shared(self) -> SharedUserData<S> {
        Rc::new(RefCell::new(self))
    }

    /// Replace both collections with what storage currently holds.
    ///
    /// Never merges and never writes back. Anything unreadable becomes an
    /// empty collection and is listed in [`load_issues`](Self::load_issues).
    pub fn hydrate(&mut self) {
        self.load_issues.clear();

        let favorites = storage::load::<FavoriteEntry, _>(&self.storage, FAVORITES_KEY);
        let history = storage::load::<HistoryEntry, _>(&self.storage, HISTORY_KEY);
        self.load_issues.extend(favorites.issue.clone());
        self.load_issues.extend(history.issue.clone());

        self.favorites = dedup_favorites(favorites.into_items());
        self.history = history.into_items();
        if self.history.len() > 1 {
            tracing::warn!(
                "{} holds {} entries, keeping the first",
                HISTORY_KEY,
                self.history.len()
            );
            self.history.truncate(1);
        }

        tracing::debug!(
            "Hydrated {} favorites and {} history entries",
            self.favorites.len(),
            self.history.len()
        );
    }

    /// Problems found by the last [`hydrate`](Self::hydrate).
    pub fn load_issues(&self) -> &[LoadIssue] {
        &self.load_issues
    }

    // --- Favorites ---

    /// Favorites, newest first.
    pub fn favorites(&self) -> &[FavoriteEntry] {
        &self.favorites
    }

    /// Add a verse to the favorites.
    ///
    /// Adding a verse that is already a favorite changes nothing: the
    /// original timestamp and position are kept. Returns whether the verse
    /// was added.
    pub fn add_favorite(&mut self, ayah: Ayah) -> bool {
        if self.is_favorite(ayah.surah_id, ayah.ayah_number) {
            tracing::debug!("{} is already a favorite", ayah.key());
            return false;
        }

        let entry = FavoriteEntry::new(ayah, self.clock.now_millis());
        tracing::debug!("Adding favorite {}", entry.key());
        self.favorites.insert(0, entry);
        self.persist_favorites();
        true
    }

    /// Remove a verse from the favorites. Returns whether anything was removed.
    ///
    /// Storage is rewritten even when nothing matched, so after removing
    /// the last favorite the key holds an empty array.
    pub fn remove_favorite(&mut self, surah_id: u32, ayah_number: u32) -> bool {
        let before = self.favorites.len();
        self.favorites.retain(|fav| !fav.matches(surah_id, ayah_number));
        self.persist_favorites();
        self.favorites.len() != before
    }

    pub fn is_favorite(&self, surah_id: u32, ayah_number: u32) -> bool {
        self.favorites
            .iter()
            .any(|fav| fav.matches(surah_id, ayah_number))
    }

    /// Look up a favorite by key.
    pub fn favorite(&self, key: AyahKey) -> Option<&FavoriteEntry> {
        self.favorites.iter().find(|fav| fav.key() == key)
    }

    /// Drop every favorite and erase the storage key.
    pub fn clear_favorites(&mut self) {
        self.favorites.clear();
        storage::erase(&mut self.storage, FAVORITES_KEY);
    }

    // --- History ---

    /// The history collection: empty, or the last-read verse.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// The last-read verse, if any.
    pub fn last_read(&self) -> Option<&HistoryEntry> {
        self.history.first()
    }

    /// Mark `ayah` as the last-read verse, replacing whatever was there.
    pub fn record_history(&mut self, ayah: Ayah) {
        let previous = self.history.first().map(|h| h.timestamp);
        let now = self.clock.now_millis();
        // A clock that stepped backwards must not make the marker older.
        let timestamp = previous.map_or(now, |prev| now.max(prev));

        tracing::debug!("Recording {} as last read", ayah.key());
        self.history = vec![HistoryEntry::new(ayah, timestamp)];
        storage::save(&mut self.storage, HISTORY_KEY, &self.history);
    }

    /// Forget the last-read verse and erase the storage key.
    pub fn clear_history(&mut self) {
        self.history.clear();
        storage::erase(&mut self.storage, HISTORY_KEY);
    }

    // --- Storage access ---

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Consume the store, returning its storage backend.
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn persist_favorites(&mut self) {
        storage::save(&mut self.storage, FAVORITES_KEY, &self.favorites);
    }
}

/// Keep the first occurrence of every key.
fn dedup_favorites(entries: Vec<FavoriteEntry>) -> Vec<FavoriteEntry> {
    let total = entries.len();
    let mut seen = HashSet::new();
    let unique: Vec<_> = entries
        .into_iter()
        .filter(|entry| seen.insert(entry.key()))
        .collect();

    if unique.len() != total {
        tracing::warn!(
            "{} holds {} duplicate entries, ignoring them",
            FAVORITES_KEY,
            total - unique.len()
        );
    }
    unique
}
