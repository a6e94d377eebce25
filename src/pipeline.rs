use std::collections::HashSet;

use tracing::warn;

use crate::config::{Category, SourceConfig};
use crate::fetcher::{FeedFetcher, RawEntry};

/// Entries taken from each feed, in feed order.
pub const MAX_ENTRIES_PER_SOURCE: usize = 6;
/// Entries shown per category section.
pub const SECTION_CAP: usize = 4;

const SUMMARY_MAX_CHARS: usize = 200;
const FALLBACK_SUMMARY: &str = "Read the full story on the official source.";
const FALLBACK_TITLE: &str = "No title";
const FALLBACK_LINK: &str = "#";

/// Display-ready article. Every field is a plain string; absence collapsed
/// to `""` at this boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRecord {
    pub title: String,
    pub summary: String,
    pub link: String,
    pub source: String,
    pub category: Category,
    pub published: String,
    pub image: String,
}

/// Map one raw entry to a display record. Infallible: missing fields
/// degrade to placeholders rather than erroring.
pub fn normalize(entry: RawEntry, source: &SourceConfig) -> DisplayRecord {
    let image = extract_image(&entry);

    DisplayRecord {
        title: entry
            .title
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| FALLBACK_TITLE.to_string()),
        summary: safe_summary(entry.summary),
        link: entry
            .link
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| FALLBACK_LINK.to_string()),
        source: source.name.clone(),
        category: source.category,
        published: entry.published.unwrap_or_default(),
        image,
    }
}

/// Short, non-plagiarized summary: newlines collapsed, trimmed, capped at
/// 200 characters with an ellipsis. Blank input gets a stock line so the
/// page never shows an empty blurb.
fn safe_summary(raw: Option<String>) -> String {
    let text = match raw {
        Some(text) => text,
        None => return FALLBACK_SUMMARY.to_string(),
    };

    let cleaned = text.replace('\n', " ");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return FALLBACK_SUMMARY.to_string();
    }

    if cleaned.chars().count() > SUMMARY_MAX_CHARS {
        let truncated: String = cleaned.chars().take(SUMMARY_MAX_CHARS).collect();
        format!("{}...", truncated)
    } else {
        cleaned.to_string()
    }
}

/// Best-effort image URL: first thumbnail reference wins over the first
/// content reference.
fn extract_image(entry: &RawEntry) -> String {
    if let Some(thumb) = entry.thumbnails.first() {
        return thumb.url.clone().unwrap_or_default();
    }
    if let Some(content) = entry.content.first() {
        return content.url.clone().unwrap_or_default();
    }
    String::new()
}

pub struct Aggregator {
    fetcher: FeedFetcher,
    sources: Vec<SourceConfig>,
}

impl Aggregator {
    pub fn new(fetcher: FeedFetcher, sources: Vec<SourceConfig>) -> Self {
        Self { fetcher, sources }
    }

    /// Fetch every source and normalize up to [`MAX_ENTRIES_PER_SOURCE`]
    /// entries from each. Output is grouped by source in registry order,
    /// then feed order within each source; there is no re-sort by date.
    ///
    /// Never fails: a source whose fetch errors contributes zero entries.
    pub async fn collect(&self) -> Vec<DisplayRecord> {
        let mut records = Vec::new();

        for source in &self.sources {
            match self.fetcher.fetch(&source.url).await {
                Ok(entries) => {
                    for entry in entries.into_iter().take(MAX_ENTRIES_PER_SOURCE) {
                        records.push(normalize(entry, source));
                    }
                }
                Err(e) => {
                    warn!("Skipping source '{}': {}", source.name, e);
                }
            }
        }

        records
    }
}

/// What the index page renders.
#[derive(Debug, Clone, Default)]
pub struct NewsBundle {
    pub featured: Option<DisplayRecord>,
    pub games: Vec<DisplayRecord>,
    pub anime: Vec<DisplayRecord>,
    pub all: Vec<DisplayRecord>,
}

/// Deduplicate by title (first occurrence wins, order preserved), partition
/// into capped category sections, and pick the featured item: the first
/// entry with an image, else the first entry, else nothing.
pub fn select(entries: Vec<DisplayRecord>) -> NewsBundle {
    let mut seen = HashSet::new();
    let all: Vec<DisplayRecord> = entries
        .into_iter()
        .filter(|entry| seen.insert(entry.title.clone()))
        .collect();

    let games = all
        .iter()
        .filter(|entry| entry.category == Category::Games)
        .take(SECTION_CAP)
        .cloned()
        .collect();
    let anime = all
        .iter()
        .filter(|entry| entry.category == Category::Anime)
        .take(SECTION_CAP)
        .cloned()
        .collect();

    let featured = all
        .iter()
        .find(|entry| !entry.image.is_empty())
        .or_else(|| all.first())
        .cloned();

    NewsBundle {
        featured,
        games,
        anime,
        all,
    }
}
