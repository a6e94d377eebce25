use std::time::Duration;

use feed_rs::parser;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::debug;

/// One source's feed could not be turned into entries. The aggregator
/// treats every variant the same way: zero entries for that source.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("feed returned HTTP {0}")]
    Status(StatusCode),
    #[error("unparsable feed body: {0}")]
    Parse(#[from] feed_rs::parser::ParseFeedError),
}

/// One article pulled out of a feed. Fields stay optional here so that
/// "absent" and "empty" remain distinguishable until normalization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawEntry {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub link: Option<String>,
    /// RFC 2822 formatted publish date, falling back to the update date.
    pub published: Option<String>,
    pub thumbnails: Vec<MediaRef>,
    pub content: Vec<MediaRef>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MediaRef {
    pub url: Option<String>,
}

impl RawEntry {
    pub fn from_feed_entry(entry: feed_rs::model::Entry) -> Self {
        let mut thumbnails = Vec::new();
        let mut content = Vec::new();
        for media in &entry.media {
            for thumb in &media.thumbnails {
                thumbnails.push(MediaRef {
                    url: Some(thumb.image.uri.clone()),
                });
            }
            for item in &media.content {
                content.push(MediaRef {
                    url: item.url.as_ref().map(|u| u.to_string()),
                });
            }
        }

        RawEntry {
            title: entry.title.map(|t| t.content),
            summary: entry.summary.map(|t| t.content),
            link: entry.links.first().map(|l| l.href.clone()),
            published: entry
                .published
                .or(entry.updated)
                .map(|dt| dt.to_rfc2822()),
            thumbnails,
            content,
        }
    }
}

pub struct FeedFetcher {
    client: Client,
}

impl FeedFetcher {
    pub fn new(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("AnimeGamesNews/1.0 (RSS Aggregator)")
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// Fetch and parse one feed. Timeouts surface as `FeedError::Http`
    /// and are handled no differently from any other fetch failure.
    pub async fn fetch(&self, url: &str) -> Result<Vec<RawEntry>, FeedError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status(status));
        }

        let bytes = response.bytes().await?;
        let parsed = parser::parse(&bytes[..])?;
        debug!("Parsed {} entries from {}", parsed.entries.len(), url);

        Ok(parsed
            .entries
            .into_iter()
            .map(RawEntry::from_feed_entry)
            .collect())
    }
}
