//! Access to the remote Quran content API.
//!
//! The API is trusted as-is: responses are deserialized into the types in
//! [`types`] and used without further validation.

mod client;
pub mod types;

pub use client::{QuranClient, DEFAULT_API_URL};
pub use types::{Ayat, SurahDetail, SurahSummary};

use regex::Regex;
use std::sync::LazyLock;

static NON_ALNUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]").expect("valid slug regex"));
static DASH_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-+").expect("valid slug regex"));

/// Turn a chapter name into its URL slug.
///
/// ```
/// use mushaf::quran::slugify;
///
/// assert_eq!(slugify("Al-Baqarah"), "al-baqarah");
/// assert_eq!(slugify("Ali 'Imran"), "ali-imran");
/// ```
pub fn slugify(name: &str) -> String {
    let lower = name.to_lowercase();
    let replaced = NON_ALNUM.replace_all(&lower, "-");
    let collapsed = DASH_RUNS.replace_all(&replaced, "-");
    collapsed.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_lowercases() {
        assert_eq!(slugify("Yasin"), "yasin");
    }

    #[test]
    fn slugify_replaces_punctuation_and_spaces() {
        assert_eq!(slugify("Ali 'Imran"), "ali-imran");
        assert_eq!(slugify("Al-Mu'minun"), "al-mu-minun");
    }

    #[test]
    fn slugify_collapses_and_trims_dashes() {
        assert_eq!(slugify("  --Al   Fatihah--  "), "al-fatihah");
    }

    #[test]
    fn slugify_replaces_non_ascii_letters() {
        assert_eq!(slugify("Ṭā Hā"), "h");
        assert_eq!(slugify("Al-Ḥajj"), "al-ajj");
    }

    #[test]
    fn slugify_empty_and_symbol_only() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("'''"), "");
    }
}
