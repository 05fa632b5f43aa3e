use super::source::FeedSource;
use crate::error::GalleryError;
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

pub struct HttpFeed {
    url: String,
    client: reqwest::Client,
}

impl HttpFeed {
    pub fn new(url: &str, timeout: Duration) -> Result<Self, GalleryError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GalleryError::Network(e.into()))?;

        Ok(Self {
            url: url.to_string(),
            client,
        })
    }
}

#[async_trait]
impl FeedSource for HttpFeed {
    fn name(&self) -> &str {
        &self.url
    }

    async fn fetch(&self) -> Result<String, GalleryError> {
        debug!("Requesting feed: {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| GalleryError::Network(e.into()))?;

        if !response.status().is_success() {
            return Err(GalleryError::Status(response.status().as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| GalleryError::Network(e.into()))?;

        debug!("Received {} bytes from {}", body.len(), self.url);
        Ok(body)
    }
}
