//! The deck document as parsed from markdown and later rewritten by hydration.
//!
//! A deck is a flat sequence of sections. Each section keeps the raw parts the section markup
//! exposes (identifier, short code, title, subtitle, body) so that the TOC can re-read labels at
//! any point, whether or not remote content has landed yet.

#[derive(Clone, Debug, Default, PartialEq)]
/// A parsed deck: optional document title followed by its sections in document order.
pub struct Document {
    /// Text of the first level-1 heading, shown above the sections.
    pub title: Option<String>,
    /// Sections in the order they appear in the source.
    pub sections: Vec<DeckSection>,
}

#[derive(Clone, Debug, Default, PartialEq)]
/// One section of the deck, addressed by a unique identifier.
pub struct DeckSection {
    /// Stable identifier, unique within the document.
    pub id: String,
    /// Short code element such as `[03]`, if the heading carried one.
    pub code: Option<String>,
    /// Title element, if the heading carried any title text.
    pub title: Option<String>,
    /// Subtitle element taken from a directly following level-3 heading.
    pub subtitle: Option<String>,
    /// Body container text, trimmed.
    pub body: String,
    /// Reflection sub-block appended by hydration.
    pub reflection: Option<Reflection>,
}

#[derive(Clone, Debug, Default, PartialEq)]
/// Closing prompts attached to a section by remote content.
pub struct Reflection {
    /// Heading shown above the prompts.
    pub title: Option<String>,
    /// Prompts in display order.
    pub items: Vec<String>,
}

impl Document {
    #[must_use]
    /// Looks up a section by identifier.
    pub fn section(&self, id: &str) -> Option<&DeckSection> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Mutable lookup by identifier, used when hydrated content is written in place.
    pub fn section_mut(&mut self, id: &str) -> Option<&mut DeckSection> {
        self.sections.iter_mut().find(|s| s.id == id)
    }

    #[must_use]
    /// Position of the section with this identifier.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    #[must_use]
    /// True when the deck has no section markers.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
