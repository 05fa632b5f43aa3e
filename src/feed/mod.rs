mod http;
mod source;
mod types;

pub use http::HttpFeed;
pub use source::FeedSource;
pub use types::{GalleryItem, MediaType};

use crate::error::GalleryError;
use tracing::{debug, info};

/// Fetch the feed and decode it as a list of items.
pub async fn load_items(source: &dyn FeedSource) -> Result<Vec<GalleryItem>, GalleryError> {
    info!("Fetching feed from {}", source.name());

    let body = source.fetch().await?;
    let items = parse_items(&body)?;

    info!("Feed returned {} items", items.len());
    Ok(items)
}

pub fn parse_items(body: &str) -> Result<Vec<GalleryItem>, GalleryError> {
    let items: Vec<GalleryItem> = serde_json::from_str(body)?;
    debug!("Parsed {} gallery items", items.len());
    Ok(items)
}
