pub mod interactive;

use crate::config::Config;
use crate::feed::HttpFeed;
use crate::gallery::{FetchOutcome, Gallery};
use crate::page::Page;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tempfile::NamedTempFile;
use tracing::{info, warn};

/// Page load: fact callout picked, gallery idle.
pub fn build_gallery(config: &Config) -> Result<Gallery> {
    let feed = HttpFeed::new(&config.feed.url, config.feed_timeout())
        .context("Failed to initialize feed client")?;
    let page = Page::load(config.video_frame(), &mut rand::rng());
    info!("Did you know? {}", page.fact());

    Ok(Gallery::new(page, Arc::new(feed), config.min_loading()))
}

/// Fetch once, optionally open one entry, and emit the resulting document.
pub async fn render(config: &Config, out: Option<&Path>, open: Option<usize>) -> Result<()> {
    let gallery = build_gallery(config)?;

    if let FetchOutcome::Failed = gallery.fetch().await {
        warn!("Gallery fetch failed, writing error page");
    }

    let html = {
        let mut page = gallery.page().await;
        if let Some(position) = open {
            match page.activate(position) {
                Some(overlay) => info!("Opened detail view for {}", overlay.item().title),
                None => warn!(
                    "Cannot open entry {}: gallery has {}",
                    position,
                    page.entries().len()
                ),
            }
        }
        page.render()
    };

    match out {
        Some(path) => {
            write_atomically(path, &html)?;
            info!("Wrote gallery page to {}", path.display());
        }
        None => {
            std::io::stdout()
                .write_all(html.as_bytes())
                .context("Failed to write page to stdout")?;
        }
    }

    Ok(())
}

pub async fn interactive(config: &Config) -> Result<()> {
    let gallery = build_gallery(config)?;
    interactive::Session::new(gallery).run().await
}

fn write_atomically(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temp file in {}", dir.display()))?;
    file.write_all(contents.as_bytes())
        .context("Failed to write page")?;
    file.persist(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(())
}
