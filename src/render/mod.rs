//! HTML fragments for the gallery page.
//!
//! Item fields are interpolated as-is: the feed is a fixed, curated source.

use crate::error::GalleryError;
use crate::feed::{GalleryItem, MediaType};
use crate::utils::format_date;

/// Size of the embedded player in the detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoFrame {
    pub width: String,
    pub height: String,
}

impl Default for VideoFrame {
    fn default() -> Self {
        Self {
            width: "100%".to_string(),
            height: "400".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Loading,
    Error,
}

impl Placeholder {
    fn icon(&self) -> &'static str {
        match self {
            Placeholder::Loading => "🔄",
            Placeholder::Error => "❌",
        }
    }

    fn message(&self) -> &'static str {
        match self {
            Placeholder::Loading => "Loading space photos...",
            Placeholder::Error => "Error loading images. Please try again.",
        }
    }
}

pub fn placeholder(kind: Placeholder) -> String {
    format!(
        r#"
        <div class="placeholder">
            <div class="placeholder-icon">{}</div>
            <p>{}</p>
        </div>
    "#,
        kind.icon(),
        kind.message()
    )
}

/// Render one gallery tile. `index` only feeds the error message.
pub fn gallery_item(index: usize, item: &GalleryItem) -> Result<String, GalleryError> {
    let media = match item.media_type {
        MediaType::Video => {
            let thumbnail = item
                .thumbnail_url
                .as_deref()
                .ok_or_else(|| GalleryError::Render {
                    index,
                    title: item.title.clone(),
                    reason: "video item has no thumbnail_url".to_string(),
                })?;
            format!(
                r#"<img src="{}" alt="{}" data-video-url="{}">"#,
                thumbnail, item.title, item.url
            )
        }
        MediaType::Image => format!(
            r#"<img src="{}" alt="{}" data-hdurl="{}">"#,
            item.url,
            item.title,
            item.hd_source()
        ),
    };

    Ok(format!(
        r#"
        <div class="gallery-item" data-type="{}">
            {}
            <p>{}</p>
            <p>{}</p>
        </div>
    "#,
        item.media_type,
        media,
        item.title,
        format_date(&item.date)
    ))
}

/// Render the detail overlay for an item.
pub fn modal(item: &GalleryItem, frame: &VideoFrame) -> String {
    let media = match item.media_type {
        MediaType::Video => format!(
            r#"
            <iframe width="{}" height="{}"
                src="{}"
                frameborder="0"
                allowfullscreen>
            </iframe>"#,
            frame.width, frame.height, item.url
        ),
        MediaType::Image => format!(r#"<img src="{}" alt="{}">"#, item.hd_source(), item.title),
    };

    format!(
        r#"<div class="modal">
        <div class="modal-content">
            <span class="close">&times;</span>
            {}
            <h2>{}</h2>
            <p class="date">{}</p>
            <p class="explanation">{}</p>
        </div>
    </div>"#,
        media,
        item.title,
        format_date(&item.date),
        item.explanation
    )
}

pub fn fact_callout(fact: &str) -> String {
    format!(
        r#"<div class="space-fact">
        <p><strong>Did You Know?</strong> {}</p>
    </div>"#,
        fact
    )
}

/// Full page: header, trigger control, fact callout, gallery and overlay.
pub fn document(fact: Option<&str>, gallery: &str, overlay: Option<&str>) -> String {
    let fact = fact.map(fact_callout).unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>NASA Space Explorer</title>
    <link rel="stylesheet" href="style.css">
</head>
<body>
    <div class="container">
        <header class="site-header">
            <h1>Space Explorer</h1>
        </header>
        <div class="filters">
            <button id="getImageBtn">Fetch Space Images</button>
        </div>
        {}
        <div id="gallery" class="gallery">{}</div>
    </div>
    {}
</body>
</html>
"#,
        fact,
        gallery,
        overlay.unwrap_or_default()
    )
}
