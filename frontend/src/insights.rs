//! Tag-selected insight panel state.
//!
//! [`MediaPanel`] keeps the selected tag, the set of image URLs that finished
//! loading at least once and whether the image for the current selection is
//! still loading. Every selection gets a fresh [`LoadTicket`]; load results
//! carry the ticket they were issued for, so a late result for an earlier
//! selection never touches the current one, even when two tags share an image.

use std::collections::{HashMap, HashSet};
use std::fmt;

use log::{debug, warn};
use serde::Deserialize;

use crate::config;
use crate::error::ConfigError;

pub type TagId = String;

const BUNDLED_CATALOG: &str = include_str!("../content/insights.json");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Insight {
    pub id: TagId,
    /// Text on the tag button
    pub label: String,
    pub title: String,
    pub description: String,
    pub image_ref: String,
}

impl Insight {
    pub fn image_url(&self) -> String {
        config::image_url(&self.image_ref)
    }
}

/// Insights in display order, with lookup by tag.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    entries: Vec<Insight>,
    position_by_tag: HashMap<TagId, usize>,
}

impl Catalog {
    /// Builds a catalog whose tag order is the order of `entries`.
    pub fn new(entries: Vec<Insight>) -> Result<Self, ConfigError> {
        let mut content_by_tag = HashMap::with_capacity(entries.len());
        let mut tag_order = Vec::with_capacity(entries.len());
        for insight in entries {
            if content_by_tag.contains_key(&insight.id) {
                return Err(ConfigError::DuplicateTag(insight.id));
            }
            tag_order.push(insight.id.clone());
            content_by_tag.insert(insight.id.clone(), insight);
        }
        Self::from_parts(content_by_tag, tag_order)
    }

    pub fn from_parts(
        mut content_by_tag: HashMap<TagId, Insight>,
        tag_order: Vec<TagId>,
    ) -> Result<Self, ConfigError> {
        if tag_order.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }

        let mut entries = Vec::with_capacity(tag_order.len());
        let mut position_by_tag = HashMap::with_capacity(tag_order.len());
        for id in tag_order {
            if position_by_tag.contains_key(&id) {
                return Err(ConfigError::DuplicateTag(id));
            }
            let insight = content_by_tag
                .remove(&id)
                .ok_or_else(|| ConfigError::UnknownTagInOrder(id.clone()))?;
            position_by_tag.insert(id, entries.len());
            entries.push(insight);
        }

        if let Some(id) = content_by_tag.into_keys().next() {
            return Err(ConfigError::UnorderedTag(id));
        }

        Ok(Self {
            entries,
            position_by_tag,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let entries: Vec<Insight> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    /// The industry insights shipped with the page.
    pub fn bundled() -> Result<Self, ConfigError> {
        Self::from_json(BUNDLED_CATALOG)
    }

    pub fn get(&self, id: &str) -> Option<&Insight> {
        self.position(id).map(|position| &self.entries[position])
    }

    pub fn default_tag(&self) -> &str {
        &self.entries[0].id
    }

    pub fn tags(&self) -> impl Iterator<Item = &Insight> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.position_by_tag.get(id).copied()
    }
}

/// Identifies one selection's display load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadTicket(u64);

impl fmt::Display for LoadTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageState {
    Loading,
    Ready,
    Failed,
}

/// Fetches images in the background. Completion is reported back to the
/// panel with [`MediaPanel::record_loaded`] or [`MediaPanel::record_failed`].
#[cfg_attr(test, mockall::automock)]
pub trait ImageLoader {
    fn load(&mut self, url: &str);
}

#[derive(Debug)]
pub struct MediaPanel {
    catalog: Catalog,
    selected: usize,
    ticket: LoadTicket,
    image_state: ImageState,
    // Only ever grows
    loaded_urls: HashSet<String>,
    in_flight: HashSet<String>,
    torn_down: bool,
}

impl MediaPanel {
    /// Selects the first tag and starts warming every catalog image.
    pub fn new(catalog: Catalog, loader: &mut impl ImageLoader) -> Self {
        let urls: Vec<String> = catalog.tags().map(Insight::image_url).collect();
        let mut panel = Self {
            catalog,
            selected: 0,
            ticket: LoadTicket(0),
            image_state: ImageState::Loading,
            loaded_urls: HashSet::new(),
            in_flight: HashSet::new(),
            torn_down: false,
        };
        for url in urls {
            panel.fetch(url, loader);
        }
        panel
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selected_tag(&self) -> &str {
        &self.current().id
    }

    pub fn current(&self) -> &Insight {
        &self.catalog.entries[self.selected]
    }

    pub fn image_url(&self) -> String {
        self.current().image_url()
    }

    pub fn ticket(&self) -> LoadTicket {
        self.ticket
    }

    pub fn image_state(&self) -> ImageState {
        self.image_state
    }

    pub fn is_loading(&self) -> bool {
        self.image_state == ImageState::Loading
    }

    pub fn is_cached(&self, url: &str) -> bool {
        self.loaded_urls.contains(url)
    }

    pub fn loaded_count(&self) -> usize {
        self.loaded_urls.len()
    }

    /// Switches to `id`, or to the default tag if `id` is not in the catalog.
    /// Returns whether the selection changed.
    pub fn select_tag(&mut self, id: &str, loader: &mut impl ImageLoader) -> bool {
        if self.torn_down {
            return false;
        }
        let position = self.catalog.position(id).unwrap_or_else(|| {
            debug!("Unknown insight tag '{}', using the default", id);
            0
        });
        if position == self.selected {
            return false;
        }

        self.selected = position;
        self.ticket = LoadTicket(self.ticket.0 + 1);
        self.image_state = ImageState::Loading;
        debug!("Selected insight tag '{}' (ticket {})", self.selected_tag(), self.ticket);

        let url = self.image_url();
        self.fetch(url, loader);
        true
    }

    /// A background fetch finished.
    pub fn record_loaded(&mut self, url: &str) {
        if self.torn_down {
            return;
        }
        self.in_flight.remove(url);
        self.loaded_urls.insert(url.to_owned());
    }

    /// A background fetch failed; a later selection may try again.
    pub fn record_failed(&mut self, url: &str) {
        if self.torn_down {
            return;
        }
        warn!("Preloading {} failed", url);
        self.in_flight.remove(url);
    }

    /// The displayed image issued under `ticket` finished loading. Only counts
    /// if `ticket` is still the current selection's; a late arrival after the
    /// fallback kicked in still shows the image.
    pub fn complete_display_load(&mut self, ticket: LoadTicket, url: &str) -> bool {
        if self.torn_down {
            return false;
        }
        self.record_loaded(url);
        if ticket != self.ticket {
            debug!("Ignoring image load for superseded ticket {}", ticket);
            return false;
        }
        if self.image_state == ImageState::Ready {
            return false;
        }
        self.image_state = ImageState::Ready;
        true
    }

    /// The displayed image issued under `ticket` errored or took too long.
    pub fn fail_display_load(&mut self, ticket: LoadTicket) -> bool {
        if self.torn_down || ticket != self.ticket || self.image_state != ImageState::Loading {
            return false;
        }
        warn!("Insight image {} did not load", self.image_url());
        self.image_state = ImageState::Failed;
        true
    }

    /// After this every completion is ignored.
    pub fn teardown(&mut self) {
        self.torn_down = true;
    }

    fn fetch(&mut self, url: String, loader: &mut impl ImageLoader) {
        if self.loaded_urls.contains(&url) || self.in_flight.contains(&url) {
            return;
        }
        loader.load(&url);
        self.in_flight.insert(url);
    }
}
