use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Image => "image",
            MediaType::Video => "video",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One day's entry from the APOD feed. Extra fields in the feed are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub title: String,
    pub date: String,
    pub media_type: MediaType,
    pub url: String,
    #[serde(default)]
    pub hdurl: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub explanation: String,
}

impl GalleryItem {
    /// High resolution source for the modal, falling back to `url` when
    /// `hdurl` is missing or empty.
    pub fn hd_source(&self) -> &str {
        self.hdurl
            .as_deref()
            .filter(|hd| !hd.is_empty())
            .unwrap_or(&self.url)
    }
}
