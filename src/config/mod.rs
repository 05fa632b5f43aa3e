use crate::render::VideoFrame;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_FEED_URL: &str = "https://cdn.jsdelivr.net/gh/GCA-Classroom/apod/data.json";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct FeedConfig {
    pub url: String,
    pub timeout_secs: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_FEED_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GalleryConfig {
    /// How long the loading placeholder stays up after a successful fetch
    pub min_loading_ms: u64,
    pub video_width: String,
    pub video_height: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        let frame = VideoFrame::default();
        Self {
            min_loading_ms: 1500,
            video_width: frame.width,
            video_height: frame.height,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: "json".to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub feed: FeedConfig,
    pub gallery: GalleryConfig,
    pub logging: LoggingConfig,
}

impl Config {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::parse(&contents).with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents).context("Failed to parse TOML")?;
        url::Url::parse(&config.feed.url)
            .with_context(|| format!("Invalid feed url: {}", config.feed.url))?;
        anyhow::ensure!(
            config.feed.timeout_secs > 0,
            "feed.timeout_secs must be greater than zero"
        );
        Ok(config)
    }

    pub fn get_logging_format(&self) -> &str {
        &self.logging.format
    }

    pub fn feed_timeout(&self) -> Duration {
        Duration::from_secs(self.feed.timeout_secs)
    }

    pub fn min_loading(&self) -> Duration {
        Duration::from_millis(self.gallery.min_loading_ms)
    }

    pub fn video_frame(&self) -> VideoFrame {
        VideoFrame {
            width: self.gallery.video_width.clone(),
            height: self.gallery.video_height.clone(),
        }
    }
}
