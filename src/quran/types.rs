//! Payloads returned by the Quran content API.

use serde::{Deserialize, Serialize};

/// One entry of the chapter list (`GET /surah`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurahSummary {
    /// Chapter number, 1..=114.
    pub nomor: u32,
    /// Arabic name.
    #[serde(default)]
    pub nama: String,
    /// Latin transliteration, used for display and slugs.
    pub nama_latin: String,
    /// Number of verses. Zero when the API leaves it out.
    #[serde(default)]
    pub jumlah_ayat: u32,
    /// Place of revelation.
    #[serde(default)]
    pub tempat_turun: String,
    /// Meaning of the name.
    #[serde(default)]
    pub arti: String,
}

/// One verse inside a chapter detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ayat {
    /// Verse number within the chapter.
    pub nomor: u32,
    /// Arabic text.
    pub ar: String,
    /// Transliteration.
    #[serde(default)]
    pub tr: String,
    /// Indonesian translation.
    #[serde(default)]
    pub idn: String,
}

/// A chapter with its verses (`GET /surah/{n}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurahDetail {
    #[serde(flatten)]
    pub summary: SurahSummary,
    #[serde(default)]
    pub ayat: Vec<Ayat>,
}

impl SurahDetail {
    pub fn ayat(&self, number: u32) -> Option<&Ayat> {
        self.ayat.iter().find(|a| a.nomor == number)
    }
}
