//! Layout capability: where sections sit and where the viewport is.
//!
//! The TOC and scroll logic never measure anything themselves. They read offsets through a
//! [`LayoutProvider`] so the same code runs against the terminal viewport or synthetic offsets.

use crate::section::SectionDescriptor;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// How a programmatic scroll reaches its target.
pub enum ScrollBehavior {
    /// Animate towards the target; the caller does not wait for it to land.
    #[default]
    Smooth,
    /// Jump straight to the target.
    Instant,
}

/// Rendering-engine queries needed by the TOC and the scroll synchronizer.
pub trait LayoutProvider {
    /// Top of the section with this identifier, in pixels from the document top.
    fn section_top(&self, id: &str) -> Option<i64>;

    /// Current vertical scroll position in pixels.
    fn scroll_position(&self) -> i64;

    /// Requests a scroll to `top` pixels.
    fn scroll_to(&mut self, top: i64, behavior: ScrollBehavior);
}

/// Refreshes `top_offset` for every descriptor the provider can place.
///
/// Sections the provider does not know keep their previous offset. Call this after content is
/// final for the current render, since offsets shift whenever content changes size.
pub fn measure(sections: &mut [SectionDescriptor], layout: &impl LayoutProvider) {
    for section in sections {
        if let Some(top) = layout.section_top(&section.id) {
            section.top_offset = top;
        }
    }
}
