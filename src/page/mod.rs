//! In-memory model of the gallery page: fact callout, gallery container and
//! the detail overlay.

use crate::error::GalleryError;
use crate::facts::random_fact;
use crate::feed::GalleryItem;
use crate::render::{self, Placeholder, VideoFrame};
use rand::Rng;
use std::fmt;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageState {
    Idle,
    Loading,
    Populated,
    ModalOpen,
    ErrorShown,
}

impl fmt::Display for PageState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PageState::Idle => "idle",
            PageState::Loading => "loading",
            PageState::Populated => "populated",
            PageState::ModalOpen => "modal-open",
            PageState::ErrorShown => "error",
        };
        f.write_str(name)
    }
}

/// Where a pointer activation landed while the overlay is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    CloseButton,
    Background,
    Content,
}

/// A rendered gallery tile. Owns its item so activation never goes back
/// through a shared list.
#[derive(Debug, Clone)]
pub struct Entry {
    item: GalleryItem,
    markup: String,
}

impl Entry {
    pub fn item(&self) -> &GalleryItem {
        &self.item
    }

    pub fn markup(&self) -> &str {
        &self.markup
    }
}

#[derive(Debug, Clone)]
pub struct Overlay {
    item: GalleryItem,
    markup: String,
}

impl Overlay {
    pub fn item(&self) -> &GalleryItem {
        &self.item
    }

    pub fn markup(&self) -> &str {
        &self.markup
    }
}

#[derive(Debug)]
enum GalleryContent {
    Empty,
    Placeholder(Placeholder),
    Entries(Vec<Entry>),
}

#[derive(Debug)]
pub struct Page {
    fact: &'static str,
    gallery: GalleryContent,
    overlay: Option<Overlay>,
    frame: VideoFrame,
}

impl Page {
    /// Page load: picks the fact for this page's lifetime.
    pub fn load<R: Rng>(frame: VideoFrame, rng: &mut R) -> Self {
        let fact = random_fact(rng);
        debug!("Showing fact: {}", fact);

        Self {
            fact,
            gallery: GalleryContent::Empty,
            overlay: None,
            frame,
        }
    }

    pub fn fact(&self) -> &'static str {
        self.fact
    }

    pub fn state(&self) -> PageState {
        if self.overlay.is_some() {
            return PageState::ModalOpen;
        }

        match &self.gallery {
            GalleryContent::Empty => PageState::Idle,
            GalleryContent::Placeholder(Placeholder::Loading) => PageState::Loading,
            GalleryContent::Placeholder(Placeholder::Error) => PageState::ErrorShown,
            GalleryContent::Entries(_) => PageState::Populated,
        }
    }

    pub fn entries(&self) -> &[Entry] {
        match &self.gallery {
            GalleryContent::Entries(entries) => entries,
            _ => &[],
        }
    }

    pub fn overlay(&self) -> Option<&Overlay> {
        self.overlay.as_ref()
    }

    /// The overlay covers the trigger control, so a new fetch always starts
    /// from a closed detail view.
    pub fn show_loading(&mut self) {
        if self.overlay.take().is_some() {
            debug!("Closing overlay for refetch");
        }
        self.gallery = GalleryContent::Placeholder(Placeholder::Loading);
    }

    pub fn show_error(&mut self) {
        self.gallery = GalleryContent::Placeholder(Placeholder::Error);
    }

    /// Replace the gallery with `items`. Every tile is rendered before the
    /// container is touched, so a bad item leaves no partial gallery.
    pub fn populate(&mut self, items: Vec<GalleryItem>) -> Result<usize, GalleryError> {
        let entries = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                let markup = render::gallery_item(index, &item)?;
                Ok(Entry { item, markup })
            })
            .collect::<Result<Vec<_>, GalleryError>>()?;

        let count = entries.len();
        self.gallery = GalleryContent::Entries(entries);
        info!("Gallery populated with {} entries", count);
        Ok(count)
    }

    /// Open the detail view for the entry at `position`, replacing any
    /// overlay that is already open.
    pub fn activate(&mut self, position: usize) -> Option<&Overlay> {
        let Some(entry) = self.entries().get(position) else {
            warn!("No gallery entry at position {}", position);
            return None;
        };

        let item = entry.item().clone();
        if self.overlay().is_some() {
            debug!("Replacing open overlay");
        }

        let markup = render::modal(&item, &self.frame);
        info!("Opening detail view: {}", item.title);
        self.overlay = Some(Overlay { item, markup });
        self.overlay.as_ref()
    }

    /// Returns true if the click dismissed the overlay.
    pub fn click(&mut self, target: ClickTarget) -> bool {
        if self.overlay.is_none() {
            return false;
        }

        match target {
            ClickTarget::CloseButton | ClickTarget::Background => {
                self.overlay = None;
                debug!("Overlay dismissed via {:?}", target);
                true
            }
            ClickTarget::Content => false,
        }
    }

    pub fn render(&self) -> String {
        let gallery = match &self.gallery {
            GalleryContent::Empty => String::new(),
            GalleryContent::Placeholder(kind) => render::placeholder(*kind),
            GalleryContent::Entries(entries) => {
                entries.iter().map(Entry::markup).collect()
            }
        };

        render::document(
            Some(self.fact),
            &gallery,
            self.overlay.as_ref().map(|o| o.markup.as_str()),
        )
    }
}
