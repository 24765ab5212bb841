//! Blocking client for the Quran content API.

use anyhow::Context;
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::{MushafError, Result};
use crate::library::{Ayah, AyahKey};

use super::slugify;
use super::types::{SurahDetail, SurahSummary};

/// Default API root.
pub const DEFAULT_API_URL: &str = "https://quran-api.santrikoding.com/api";

/// Fetches chapter and verse content.
///
/// # Example
///
/// ```no_run
/// use mushaf::quran::QuranClient;
/// use std::time::Duration;
///
/// let client =
///     QuranClient::new("https://quran-api.santrikoding.com/api", Duration::from_secs(30)).unwrap();
/// let surahs = client.list_surahs().unwrap();
/// assert_eq!(surahs.len(), 114);
/// ```
pub struct QuranClient {
    base_url: String,
    timeout: Duration,
    client: Client,
}

impl QuranClient {
    /// Create a client for the API rooted at `base_url`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
            client,
        })
    }

    /// API root, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// List all chapters.
    pub fn list_surahs(&self) -> Result<Vec<SurahSummary>> {
        self.get_json(&self.surah_index_url())
    }

    /// The chapter list endpoint's body as untyped JSON.
    ///
    /// Transport and HTTP status failures are errors; any JSON body,
    /// array or not, is returned as-is.
    pub fn surah_index(&self) -> Result<serde_json::Value> {
        self.get_json(&self.surah_index_url())
    }

    fn surah_index_url(&self) -> String {
        format!("{}/surah", self.base_url)
    }

    /// Fetch one chapter with its verses.
    pub fn get_surah(&self, number: u32) -> Result<SurahDetail> {
        self.get_json(&format!("{}/surah/{}", self.base_url, number))
    }

    /// Fetch the verse at `key`, ready to be stored as a favorite or
    /// last-read marker.
    pub fn ayah(&self, key: AyahKey) -> Result<Ayah> {
        let surah = self.get_surah(key.surah_id)?;
        let ayat = surah
            .ayat(key.ayah_number)
            .ok_or(MushafError::AyahNotFound {
                surah_id: key.surah_id,
                ayah_number: key.ayah_number,
            })?;

        Ok(Ayah {
            surah_id: key.surah_id,
            surah_name: surah.summary.nama_latin.clone(),
            surah_slug: slugify(&surah.summary.nama_latin),
            ayah_number: ayat.nomor,
            ayah_text: ayat.ar.clone(),
            translation: ayat.idn.clone(),
        })
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!("GET {}", url);

        let remote = |message: String| MushafError::Remote {
            url: url.to_string(),
            message,
        };

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| remote(e.to_string()))?;

        if !response.status().is_success() {
            return Err(remote(format!("HTTP {}", response.status())));
        }

        response
            .json::<T>()
            .map_err(|e| remote(format!("unexpected response body: {}", e)))
    }
}
