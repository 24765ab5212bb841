//! XML sitemap for the reading site.
//!
//! The sitemap lists the static pages, one page per chapter and one tafsir
//! page per verse. When the chapter list is unavailable a fallback sitemap
//! with only the core pages is produced instead, so the route never fails.

use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt::{self, Write};

use crate::quran::{slugify, QuranClient, SurahSummary};

/// Default public site root.
pub const DEFAULT_BASE_URL: &str = "https://quran.portal-islam.com";

const XML_HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
"#;
const XML_FOOTER: &str = "</urlset>";

/// Chapter and verse of Ayat al-Kursi, which gets its own anchor entry.
const KURSI_SURAH: u32 = 2;
const KURSI_AYAH: u32 = 255;

/// How often a page is expected to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFreq {
    Daily,
    Weekly,
    Monthly,
}

impl fmt::Display for ChangeFreq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        };
        f.write_str(s)
    }
}

/// A single `<url>` element.
#[derive(Debug, Clone, PartialEq)]
pub struct UrlEntry {
    pub loc: String,
    pub changefreq: ChangeFreq,
    pub priority: f32,
    /// Optional XML comment written above the element.
    pub comment: Option<String>,
}

impl UrlEntry {
    fn new(loc: String, changefreq: ChangeFreq, priority: f32) -> Self {
        Self {
            loc,
            changefreq,
            priority,
            comment: None,
        }
    }

    fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// Builds sitemap documents for one site root and one `lastmod` stamp.
#[derive(Debug, Clone)]
pub struct SitemapBuilder {
    base_url: String,
    lastmod: String,
}

impl SitemapBuilder {
    pub fn new(base_url: &str, generated_at: DateTime<Utc>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            lastmod: generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn lastmod(&self) -> &str {
        &self.lastmod
    }

    /// Home plus the favorites and history pages.
    fn core_pages(&self) -> Vec<UrlEntry> {
        vec![
            UrlEntry::new(self.base_url.clone(), ChangeFreq::Daily, 1.0).with_comment("Homepage"),
            UrlEntry::new(self.page("favorites"), ChangeFreq::Weekly, 0.7)
                .with_comment("Favorites Page"),
            UrlEntry::new(self.page("history"), ChangeFreq::Weekly, 0.7)
                .with_comment("History Page"),
        ]
    }

    /// Every page known to the site, given the chapter list.
    pub fn entries(&self, surahs: &[SurahSummary]) -> Vec<UrlEntry> {
        let mut entries = self.core_pages();
        entries.push(
            UrlEntry::new(self.page("hafalan"), ChangeFreq::Weekly, 0.7)
                .with_comment("Hafalan Page"),
        );
        entries.push(
            UrlEntry::new(self.page("jadwal-sholat"), ChangeFreq::Weekly, 0.7)
                .with_comment("Jadwal Sholat Page"),
        );

        for surah in surahs {
            let surah_url = format!(
                "{}/surah/{}/{}",
                self.base_url,
                slugify(&surah.nama_latin),
                surah.nomor
            );

            entries.push(
                UrlEntry::new(surah_url.clone(), ChangeFreq::Weekly, 0.8)
                    .with_comment(format!("Surah {}", surah.nama_latin)),
            );

            for ayah in 1..=surah.jumlah_ayat {
                entries.push(UrlEntry::new(
                    format!("{}/tafsir/{}", surah_url, ayah),
                    ChangeFreq::Monthly,
                    0.6,
                ));
            }

            if surah.nomor == KURSI_SURAH {
                entries.push(
                    UrlEntry::new(
                        format!("{}#ayat{}", surah_url, KURSI_AYAH),
                        ChangeFreq::Weekly,
                        0.9,
                    )
                    .with_comment("Ayat Kursi"),
                );
            }
        }

        entries
    }

    /// Full sitemap for `surahs`.
    pub fn build(&self, surahs: &[SurahSummary]) -> String {
        self.render(&self.entries(surahs))
    }

    /// Minimal sitemap used when the chapter list cannot be fetched.
    pub fn fallback(&self) -> String {
        self.render(&self.core_pages())
    }

    /// Render entries as a complete XML document.
    pub fn render(&self, entries: &[UrlEntry]) -> String {
        let mut xml = String::from(XML_HEADER);
        for entry in entries {
            if let Some(comment) = &entry.comment {
                let _ = writeln!(xml, "  <!-- {} -->", comment.replace("--", "- -"));
            }
            let _ = write!(
                xml,
                "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n    <changefreq>{}</changefreq>\n    <priority>{:.1}</priority>\n  </url>\n",
                escape_xml(&entry.loc),
                self.lastmod,
                entry.changefreq,
                entry.priority
            );
        }
        xml.push_str(XML_FOOTER);
        xml
    }

    fn page(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

/// Fetch the chapter list and build the sitemap.
///
/// A body that is not an array yields the static pages without any
/// chapters. The minimal sitemap is used only when the request fails or
/// the chapter entries cannot be read.
pub fn generate(client: &QuranClient, builder: &SitemapBuilder) -> String {
    let index = match client.surah_index() {
        Ok(index) => index,
        Err(e) => {
            tracing::error!("Error generating sitemap: {}", e);
            return builder.fallback();
        }
    };

    if !index.is_array() {
        tracing::warn!("Chapter list is not an array, leaving chapters out of the sitemap");
        return builder.build(&[]);
    }

    match serde_json::from_value::<Vec<SurahSummary>>(index) {
        Ok(surahs) => {
            tracing::info!("Generating sitemap for {} surahs", surahs.len());
            builder.build(&surahs)
        }
        Err(e) => {
            tracing::error!("Error generating sitemap: {}", e);
            builder.fallback()
        }
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
