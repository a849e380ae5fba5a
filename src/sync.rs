//! Scroll synchronizer: projects the scroll position onto the active TOC entry.
//!
//! A section counts as reached once `top_offset - threshold <= scroll_y`. Scanning in document
//! order and keeping the last reached section means the section scrolled past most recently
//! wins, and the first section is the fallback at the top of the page. The scan is recomputed
//! from scratch on every call, so it is idempotent at a fixed scroll position.

use crate::nav::Navigation;
use crate::section::SectionDescriptor;

/// Default distance, in pixels, below a section top at which the section already counts as reached.
pub const DEFAULT_SCROLL_THRESHOLD: i64 = 40;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Maps scroll positions to the current section.
pub struct ScrollSynchronizer {
    threshold: i64,
}

impl Default for ScrollSynchronizer {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_THRESHOLD)
    }
}

impl ScrollSynchronizer {
    #[must_use]
    /// Creates a synchronizer with the given reach threshold in pixels.
    pub fn new(threshold: i64) -> Self {
        Self { threshold }
    }

    #[must_use]
    /// Reach threshold in pixels.
    pub fn threshold(&self) -> i64 {
        self.threshold
    }

    #[must_use]
    /// Index of the current section at `scroll_y`, or `None` when there are no sections.
    pub fn current_index(&self, sections: &[SectionDescriptor], scroll_y: i64) -> Option<usize> {
        if sections.is_empty() {
            return None;
        }
        let mut current = 0;
        for (i, section) in sections.iter().enumerate() {
            if section.top_offset - self.threshold <= scroll_y {
                current = i;
            }
        }
        Some(current)
    }

    /// Moves the active marker in `nav` to the current section at `scroll_y`.
    ///
    /// Inert on an empty section list. Returns the identifier that was activated.
    pub fn sync<'a>(
        &self,
        sections: &'a [SectionDescriptor],
        nav: &mut Navigation,
        scroll_y: i64,
    ) -> Option<&'a str> {
        let current = &sections[self.current_index(sections, scroll_y)?];
        nav.activate_id(&current.id).then_some(current.id.as_str())
    }
}

#[cfg(test)]
#[path = "tests/sync.rs"]
mod tests;
