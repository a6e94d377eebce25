use std::fmt;
use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_site_name")]
    pub site_name: String,
    #[serde(default = "default_description")]
    pub description: String,
    /// Per-feed fetch timeout in seconds
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
    pub sources: Vec<SourceConfig>,
}

fn default_site_name() -> String {
    "Anime & Games News".to_string()
}

fn default_description() -> String {
    "Latest Anime & Gaming news with proper credits from trusted sources like IGN and Crunchyroll."
        .to_string()
}

fn default_fetch_timeout_secs() -> u64 {
    5
}

#[derive(Debug, Deserialize, Clone)]
pub struct SourceConfig {
    pub name: String,
    pub category: Category,
    pub url: String,
}

/// Coarse topic tag assigned per source, used to split the page into sections.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Games,
    Anime,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Games => write!(f, "Games"),
            Category::Anime => write!(f, "Anime"),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Parse config from a TOML string (useful for testing)
    pub fn from_str(content: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Load from `path` if the file exists, otherwise fall back to the
    /// built-in IGN/Crunchyroll registry.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            site_name: default_site_name(),
            description: default_description(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
            sources: vec![
                SourceConfig {
                    name: "IGN".to_string(),
                    category: Category::Games,
                    url: "https://feeds.feedburner.com/ign/games-all".to_string(),
                },
                SourceConfig {
                    name: "Crunchyroll".to_string(),
                    category: Category::Anime,
                    url: "https://www.crunchyroll.com/rss/news".to_string(),
                },
            ],
        }
    }
}
