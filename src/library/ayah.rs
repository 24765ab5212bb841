//! Verse records kept in the favorites and history collections.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MushafError;

/// Identity of a verse: chapter number plus verse number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AyahKey {
    pub surah_id: u32,
    pub ayah_number: u32,
}

impl AyahKey {
    pub fn new(surah_id: u32, ayah_number: u32) -> Self {
        Self {
            surah_id,
            ayah_number,
        }
    }
}

impl fmt::Display for AyahKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.surah_id, self.ayah_number)
    }
}

impl FromStr for AyahKey {
    type Err = MushafError;

    /// Parses `SURAH:AYAH`, e.g. `2:255`. Both parts must be positive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MushafError::InvalidAyahRef {
            input: s.to_string(),
        };

        let (surah, ayah) = s.trim().split_once(':').ok_or_else(invalid)?;
        let surah_id: u32 = surah.trim().parse().map_err(|_| invalid())?;
        let ayah_number: u32 = ayah.trim().parse().map_err(|_| invalid())?;

        if surah_id == 0 || ayah_number == 0 {
            return Err(invalid());
        }

        Ok(Self::new(surah_id, ayah_number))
    }
}

/// A verse as supplied by the caller, before the store stamps it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ayah {
    pub surah_id: u32,
    pub surah_name: String,
    pub surah_slug: String,
    pub ayah_number: u32,
    pub ayah_text: String,
    pub translation: String,
}

impl Ayah {
    /// The `(surah_id, ayah_number)` identity of this verse.
    pub fn key(&self) -> AyahKey {
        AyahKey::new(self.surah_id, self.ayah_number)
    }
}

/// A stamped verse record, as stored under the favorites and history keys.
///
/// Serialized flat, so the stored JSON objects carry the verse fields and
/// `timestamp` side by side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AyahRecord {
    #[serde(flatten)]
    pub ayah: Ayah,
    /// Creation time in epoch milliseconds.
    pub timestamp: i64,
}

impl AyahRecord {
    pub fn new(ayah: Ayah, timestamp: i64) -> Self {
        Self { ayah, timestamp }
    }

    pub fn key(&self) -> AyahKey {
        self.ayah.key()
    }

    /// Whether this record is the verse `surah_id:ayah_number`.
    pub fn matches(&self, surah_id: u32, ayah_number: u32) -> bool {
        self.ayah.surah_id == surah_id && self.ayah.ayah_number == ayah_number
    }
}

/// Member of the favorites collection.
pub type FavoriteEntry = AyahRecord;

/// Member of the history collection (the last-read marker).
pub type HistoryEntry = AyahRecord;
