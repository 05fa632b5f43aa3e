use crate::error::GalleryError;
use async_trait::async_trait;

#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Human-readable name of the source, used in logs
    fn name(&self) -> &str;

    /// Fetch the raw feed body
    async fn fetch(&self) -> Result<String, GalleryError>;
}
