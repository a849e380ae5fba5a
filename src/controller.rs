//! Deck controller: the shared state behind the TOC and the scroll synchronizer.
//!
//! Every interaction arrives as an [`Event`] and is handled synchronously against the owned
//! state, returning the [`Effect`]s the host must carry out (scroll the viewport, replace the
//! location fragment). Nothing here touches a real viewport, so the whole click/scroll
//! interplay can be driven with synthetic offsets.
//!
//! # Ordering with hydration
//!
//! Labels and offsets are never cached across content changes. [`Event::Mount`] takes whatever
//! the document reads at that moment, and each [`Event::ContentChanged`] relabels the existing
//! entries in place and re-syncs at the current scroll position. Hydration may therefore land
//! before or after the TOC is built with the same end state.

use crate::config::Config;
use crate::layout::ScrollBehavior;
use crate::nav::Navigation;
use crate::section::SectionDescriptor;
use crate::sync::{ScrollSynchronizer, DEFAULT_SCROLL_THRESHOLD};
use crate::toc::{self, DEFAULT_CLICK_OFFSET, DEFAULT_TOC_LABEL};
use tracing::{debug, warn};

#[derive(Clone, Debug, PartialEq, Eq)]
/// Tunables for click and scroll behaviour.
pub struct DeckSettings {
    /// Heading shown above the navigation entries.
    pub toc_label: String,
    /// Gap in pixels left above a section after a click.
    pub click_offset: i64,
    /// Distance in pixels below a section top at which it counts as reached.
    pub scroll_threshold: i64,
    /// Whether clicks replace the location fragment.
    pub shareable_links: bool,
    /// How click-driven scrolls move the viewport.
    pub scroll_behavior: ScrollBehavior,
}

impl Default for DeckSettings {
    fn default() -> Self {
        Self {
            toc_label: DEFAULT_TOC_LABEL.to_string(),
            click_offset: DEFAULT_CLICK_OFFSET,
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
            shareable_links: true,
            scroll_behavior: ScrollBehavior::Smooth,
        }
    }
}

impl From<&Config> for DeckSettings {
    fn from(cfg: &Config) -> Self {
        Self {
            toc_label: cfg.toc_label.clone(),
            click_offset: cfg.click_offset,
            scroll_threshold: cfg.scroll_threshold,
            shareable_links: cfg.shareable_links,
            scroll_behavior: if cfg.smooth_scroll {
                ScrollBehavior::Smooth
            } else {
                ScrollBehavior::Instant
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
/// Something that happened to the deck.
pub enum Event {
    /// Content became visible: build the TOC from these descriptors and sync eagerly.
    Mount {
        /// Measured descriptors at mount time.
        sections: Vec<SectionDescriptor>,
        /// Scroll position at mount time.
        scroll_y: i64,
    },
    /// The entry at this index was clicked.
    Click(usize),
    /// The viewport scrolled to this position.
    Scroll(i64),
    /// Section text or layout changed; descriptors were re-read and re-measured.
    ContentChanged {
        /// Fresh descriptors.
        sections: Vec<SectionDescriptor>,
        /// Scroll position after the change.
        scroll_y: i64,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Side effect requested by the deck.
pub enum Effect {
    /// Scroll the viewport; fire-and-forget.
    ScrollTo {
        /// Target scroll position in pixels.
        top: i64,
        /// Animate or jump.
        behavior: ScrollBehavior,
    },
    /// Replace the shareable location fragment without adding history.
    ReplaceFragment(String),
}

#[derive(Debug)]
/// Owns the section list and the navigation state shared by the TOC and the synchronizer.
pub struct Deck {
    settings: DeckSettings,
    synchronizer: ScrollSynchronizer,
    sections: Vec<SectionDescriptor>,
    nav: Option<Navigation>,
    mounted: bool,
}

impl Deck {
    #[must_use]
    /// Creates an unmounted deck.
    pub fn new(settings: DeckSettings) -> Self {
        let synchronizer = ScrollSynchronizer::new(settings.scroll_threshold);
        Self {
            settings,
            synchronizer,
            sections: Vec::new(),
            nav: None,
            mounted: false,
        }
    }

    #[must_use]
    /// Settings the deck was created with.
    pub fn settings(&self) -> &DeckSettings {
        &self.settings
    }

    #[must_use]
    /// Whether [`Event::Mount`] has been handled.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    #[must_use]
    /// Current descriptors, in document order.
    pub fn sections(&self) -> &[SectionDescriptor] {
        &self.sections
    }

    #[must_use]
    /// The navigation list, absent before mount or when there are no sections.
    pub fn navigation(&self) -> Option<&Navigation> {
        self.nav.as_ref()
    }

    #[must_use]
    /// Descriptor of the active entry.
    pub fn active_section(&self) -> Option<&SectionDescriptor> {
        let index = self.nav.as_ref()?.active_index()?;
        self.sections.get(index)
    }

    /// Applies an event and returns the effects the host should perform.
    pub fn handle(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::Mount { sections, scroll_y } => {
                if self.mounted {
                    debug!("deck already mounted; ignoring");
                    return Vec::new();
                }
                self.mounted = true;
                self.nav = toc::build(&sections, &self.settings.toc_label);
                self.sections = sections;
                self.sync(scroll_y);
                Vec::new()
            }
            Event::Click(index) => match self.nav.as_mut() {
                Some(nav) => toc::click(nav, &self.sections, index, &self.settings),
                None => Vec::new(),
            },
            Event::Scroll(scroll_y) => {
                self.sync(scroll_y);
                Vec::new()
            }
            Event::ContentChanged { sections, scroll_y } => {
                if !self.mounted {
                    return Vec::new();
                }
                if sections.len() != self.sections.len() {
                    warn!(
                        expected = self.sections.len(),
                        got = sections.len(),
                        "section count changed after mount; keeping existing entries"
                    );
                    return Vec::new();
                }
                if let Some(nav) = self.nav.as_mut() {
                    nav.relabel(&sections);
                }
                self.sections = sections;
                self.sync(scroll_y);
                Vec::new()
            }
        }
    }

    fn sync(&mut self, scroll_y: i64) {
        if let Some(nav) = self.nav.as_mut() {
            self.synchronizer.sync(&self.sections, nav, scroll_y);
        }
    }
}

#[cfg(test)]
#[path = "tests/controller.rs"]
mod tests;
