//! TOC builder: mirrors the section list as a navigation list and handles entry clicks.
//!
//! Building from an empty section list does nothing. A click is one atomic action: it requests
//! a scroll that parks the section just below the viewport top, moves the active marker to the
//! clicked entry at once (without waiting for the scroll to land), and optionally replaces the
//! shareable fragment.

use crate::controller::{DeckSettings, Effect};
use crate::nav::Navigation;
use crate::section::SectionDescriptor;

/// Default gap, in pixels, left above a section after clicking its entry.
pub const DEFAULT_CLICK_OFFSET: i64 = 24;

/// Default heading shown above the navigation entries.
pub const DEFAULT_TOC_LABEL: &str = "Structure";

#[must_use]
/// Builds the navigation list, or `None` when there are no sections.
pub fn build(sections: &[SectionDescriptor], label: &str) -> Option<Navigation> {
    if sections.is_empty() {
        return None;
    }
    Some(Navigation::new(label, sections))
}

/// Handles a click on entry `index`.
///
/// The active marker moves before this returns; the returned effects carry the scroll request
/// and, when shareable links are on, the fragment replacement. Unknown indices do nothing.
pub fn click(
    nav: &mut Navigation,
    sections: &[SectionDescriptor],
    index: usize,
    settings: &DeckSettings,
) -> Vec<Effect> {
    let Some(section) = sections.get(index) else {
        return Vec::new();
    };
    if !nav.activate(index) {
        return Vec::new();
    }

    let mut effects = vec![Effect::ScrollTo {
        top: section.top_offset - settings.click_offset,
        behavior: settings.scroll_behavior,
    }];
    if settings.shareable_links {
        effects.push(Effect::ReplaceFragment(section.id.clone()));
    }
    effects
}

#[cfg(test)]
#[path = "tests/toc.rs"]
mod tests;
