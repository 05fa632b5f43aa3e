use crate::feed::{self, FeedSource};
use crate::page::Page;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Populated(usize),
    Failed,
    /// A newer fetch was issued before this one finished.
    Superseded,
}

/// Drives the fetch button: loading placeholder, feed request, minimum
/// loading display, then gallery or error placeholder.
pub struct Gallery {
    page: Mutex<Page>,
    feed: Arc<dyn FeedSource>,
    min_loading: Duration,
    latest_request: AtomicU64,
}

impl Gallery {
    pub fn new(page: Page, feed: Arc<dyn FeedSource>, min_loading: Duration) -> Self {
        Self {
            page: Mutex::new(page),
            feed,
            min_loading,
            latest_request: AtomicU64::new(0),
        }
    }

    pub async fn page(&self) -> MutexGuard<'_, Page> {
        self.page.lock().await
    }

    /// Only the most recently issued fetch may touch the gallery once it
    /// completes; older ones are dropped whatever order they finish in.
    pub async fn fetch(&self) -> FetchOutcome {
        let request = self.latest_request.fetch_add(1, Ordering::SeqCst) + 1;
        info!("Fetch #{} started", request);

        self.page.lock().await.show_loading();

        let result = match feed::load_items(self.feed.as_ref()).await {
            Ok(items) => {
                tokio::time::sleep(self.min_loading).await;
                Ok(items)
            }
            Err(e) => Err(e),
        };

        let mut page = self.page.lock().await;
        if self.latest_request.load(Ordering::SeqCst) != request {
            debug!("Dropping result of superseded fetch #{}", request);
            return FetchOutcome::Superseded;
        }

        match result.and_then(|items| page.populate(items)) {
            Ok(count) => {
                info!("Fetch #{} rendered {} items", request, count);
                FetchOutcome::Populated(count)
            }
            Err(e) => {
                error!(kind = e.kind(), "Error: {}", e);
                page.show_error();
                FetchOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GalleryError;
    use crate::feed::testing::{FakeFeed, SAMPLE_FEED};
    use crate::page::{ClickTarget, PageState};
    use crate::render::VideoFrame;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::time::Instant;

    fn gallery(feed: FakeFeed, min_loading: Duration) -> Gallery {
        let page = Page::load(VideoFrame::default(), &mut StdRng::seed_from_u64(1));
        Gallery::new(page, Arc::new(feed), min_loading)
    }

    #[tokio::test]
    async fn test_fetch_populates_gallery() {
        let gallery = gallery(FakeFeed::new().with_body(SAMPLE_FEED), Duration::ZERO);
        assert_eq!(gallery.page().await.state(), PageState::Idle);

        assert_eq!(gallery.fetch().await, FetchOutcome::Populated(3));

        let page = gallery.page().await;
        assert_eq!(page.state(), PageState::Populated);
        assert_eq!(page.entries().len(), 3);
        assert!(!page.render().contains("Loading space photos..."));
    }

    #[tokio::test]
    async fn test_fetch_waits_minimum_loading_time() {
        let gallery = gallery(
            FakeFeed::new().with_body(SAMPLE_FEED),
            Duration::from_millis(100),
        );
        let started = Instant::now();
        gallery.fetch().await;
        assert!(started.elapsed() >= Duration::from_millis(100));
    }

    #[tokio::test]
    async fn test_loading_placeholder_shown_while_in_flight() {
        let feed = FakeFeed::new().with_delayed(
            Duration::from_millis(200),
            Ok(SAMPLE_FEED.to_string()),
        );
        let gallery = Arc::new(gallery(feed, Duration::ZERO));

        let task = tokio::spawn({
            let gallery = gallery.clone();
            async move { gallery.fetch().await }
        });
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(gallery.page().await.state(), PageState::Loading);

        assert_eq!(task.await.unwrap(), FetchOutcome::Populated(3));
    }

    #[tokio::test]
    async fn test_network_failure_shows_error() {
        let feed = FakeFeed::new().with_error(GalleryError::Network("connection refused".into()));
        let gallery = gallery(feed, Duration::ZERO);

        assert_eq!(gallery.fetch().await, FetchOutcome::Failed);
        let page = gallery.page().await;
        assert_eq!(page.state(), PageState::ErrorShown);
        assert!(page.entries().is_empty());
        assert!(page.render().contains("Error loading images. Please try again."));
    }

    #[tokio::test]
    async fn test_render_failure_shows_error() {
        let body = r#"[
            {"date":"2024-06-01","media_type":"image","title":"Fine","url":"f.jpg"},
            {"date":"2024-06-02","media_type":"video","title":"No Thumb","url":"https://www.youtube.com/embed/x"}
        ]"#;
        let gallery = gallery(FakeFeed::new().with_body(body), Duration::ZERO);

        assert_eq!(gallery.fetch().await, FetchOutcome::Failed);
        let page = gallery.page().await;
        assert_eq!(page.state(), PageState::ErrorShown);
        assert!(page.entries().is_empty());
        assert!(page.render().contains("Error loading images. Please try again."));
    }

    #[tokio::test]
    async fn test_failed_refetch_with_open_overlay_shows_error() {
        let feed = FakeFeed::new()
            .with_body(SAMPLE_FEED)
            .with_error(GalleryError::Network("connection reset".into()));
        let gallery = gallery(feed, Duration::ZERO);

        gallery.fetch().await;
        gallery.page().await.activate(0);

        assert_eq!(gallery.fetch().await, FetchOutcome::Failed);
        let page = gallery.page().await;
        assert_eq!(page.state(), PageState::ErrorShown);
        assert!(page.overlay().is_none());
        assert!(page.entries().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_body_shows_error_and_clears_entries() {
        let feed = FakeFeed::new()
            .with_body(SAMPLE_FEED)
            .with_body("{ this is not json");
        let gallery = gallery(feed, Duration::ZERO);

        gallery.fetch().await;
        assert_eq!(gallery.fetch().await, FetchOutcome::Failed);
        assert!(gallery.page().await.entries().is_empty());
    }

    #[tokio::test]
    async fn test_refetch_replaces_entries() {
        let single = r#"[{"date":"2024-07-04","media_type":"image","title":"Fireworks","url":"f.jpg"}]"#;
        let feed = FakeFeed::new().with_body(SAMPLE_FEED).with_body(single);
        let gallery = gallery(feed, Duration::ZERO);

        gallery.fetch().await;
        assert_eq!(gallery.fetch().await, FetchOutcome::Populated(1));

        let page = gallery.page().await;
        assert_eq!(page.entries().len(), 1);
        assert_eq!(page.entries()[0].item().title, "Fireworks");
    }

    #[tokio::test]
    async fn test_retry_after_error() {
        let feed = FakeFeed::new()
            .with_error(GalleryError::Status(503))
            .with_body(SAMPLE_FEED);
        let gallery = gallery(feed, Duration::ZERO);

        assert_eq!(gallery.fetch().await, FetchOutcome::Failed);
        assert_eq!(gallery.fetch().await, FetchOutcome::Populated(3));
    }

    #[tokio::test]
    async fn test_later_request_wins_over_slow_earlier_one() {
        let slow = r#"[{"date":"2024-01-01","media_type":"image","title":"Stale","url":"s.jpg"}]"#;
        let feed = FakeFeed::new()
            .with_delayed(Duration::from_millis(200), Ok(slow.to_string()))
            .with_delayed(Duration::ZERO, Ok(SAMPLE_FEED.to_string()));
        let gallery = Arc::new(gallery(feed, Duration::ZERO));

        let first = tokio::spawn({
            let gallery = gallery.clone();
            async move { gallery.fetch().await }
        });
        tokio::time::sleep(Duration::from_millis(20)).await;
        let second = gallery.fetch().await;

        assert_eq!(second, FetchOutcome::Populated(3));
        assert_eq!(first.await.unwrap(), FetchOutcome::Superseded);

        let page = gallery.page().await;
        assert_eq!(page.entries().len(), 3);
        assert!(page.entries().iter().all(|e| e.item().title != "Stale"));
    }

    #[tokio::test]
    async fn test_open_and_dismiss_after_fetch() {
        let gallery = gallery(FakeFeed::new().with_body(SAMPLE_FEED), Duration::ZERO);
        gallery.fetch().await;

        let mut page = gallery.page().await;
        let hd = page.activate(0).unwrap().markup().to_string();
        assert!(hd.contains("galaxy_hd.jpg"));
        assert!(page.click(ClickTarget::Background));
        assert_eq!(page.state(), PageState::Populated);
    }
}
