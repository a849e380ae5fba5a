//! Section descriptors shared by the TOC builder and the scroll synchronizer.
//!
//! A descriptor is the navigation-facing view of a deck section: its identifier, its position in
//! the document, the two labels shown in the TOC and its measured vertical offset. Descriptors
//! are derived from the current document text every time they are needed, so labels never lag
//! behind hydrated content.

use crate::document::DeckSection;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// Navigation-facing summary of a section with its measured position.
pub struct SectionDescriptor {
    /// Unique section identifier.
    pub id: String,
    /// Zero-based position in document order.
    pub order: usize,
    /// Short code shown before the title, e.g. `[01]`.
    pub code_label: String,
    /// Title shown in the TOC.
    pub title_label: String,
    /// Vertical position of the section top, in pixels. Only meaningful once measured.
    pub top_offset: i64,
}

#[must_use]
/// Positional code used when a section has no short code element, e.g. `[01]`.
pub fn fallback_code(order: usize) -> String {
    format!("[{:02}]", order + 1)
}

#[must_use]
/// Positional title used when a section has no title element, e.g. `Section 1`.
pub fn fallback_title(order: usize) -> String {
    format!("Section {}", order + 1)
}

#[must_use]
/// Code shown for `section`, or the positional fallback when it has none or it is blank.
pub fn code_label(section: &DeckSection, order: usize) -> String {
    non_empty(section.code.as_deref()).map_or_else(|| fallback_code(order), str::to_string)
}

#[must_use]
/// Title shown for `section`, or the positional fallback when it has none or it is blank.
pub fn title_label(section: &DeckSection, order: usize) -> String {
    non_empty(section.title.as_deref()).map_or_else(|| fallback_title(order), str::to_string)
}

#[must_use]
/// Derives descriptors from the sections as they currently read.
///
/// Offsets start at zero; run [`crate::layout::measure`] once the content has been laid out.
pub fn describe(sections: &[DeckSection]) -> Vec<SectionDescriptor> {
    sections
        .iter()
        .enumerate()
        .map(|(order, section)| SectionDescriptor {
            id: section.id.clone(),
            order,
            code_label: code_label(section, order),
            title_label: title_label(section, order),
            top_offset: 0,
        })
        .collect()
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.map(str::trim).filter(|t| !t.is_empty())
}

#[cfg(test)]
#[path = "tests/section.rs"]
mod tests;
