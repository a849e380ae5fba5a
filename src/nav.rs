//! Navigation list state: one entry per section and a single active marker.
//!
//! The TOC builder creates the list and the scroll synchronizer only moves the active marker.
//! Activation always goes through [`Navigation::activate`], which clears every other entry, so
//! at most one entry is active and, once anything has been activated, exactly one is.

use crate::section::SectionDescriptor;

#[derive(Clone, Debug, PartialEq, Eq)]
/// A clickable TOC entry mirroring one section.
pub struct NavigationEntry {
    /// Identifier of the section this entry scrolls to.
    pub section_id: String,
    /// Short code shown before the label.
    pub display_code: String,
    /// Title shown for the section.
    pub display_label: String,
    is_active: bool,
}

impl NavigationEntry {
    #[must_use]
    /// Whether this entry carries the active marker.
    pub fn is_active(&self) -> bool {
        self.is_active
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// The rendered navigation list: a label node and the ordered entries.
pub struct Navigation {
    label: String,
    entries: Vec<NavigationEntry>,
}

impl Navigation {
    #[must_use]
    /// Creates an entry per descriptor, in descriptor order, none active yet.
    pub fn new(label: impl Into<String>, sections: &[SectionDescriptor]) -> Self {
        let entries = sections
            .iter()
            .map(|s| NavigationEntry {
                section_id: s.id.clone(),
                display_code: s.code_label.clone(),
                display_label: s.title_label.clone(),
                is_active: false,
            })
            .collect();
        Self {
            label: label.into(),
            entries,
        }
    }

    #[must_use]
    /// Heading shown above the entries.
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    /// Entries in document order.
    pub fn entries(&self) -> &[NavigationEntry] {
        &self.entries
    }

    #[must_use]
    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    /// True when there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    /// Index of the active entry, if any.
    pub fn active_index(&self) -> Option<usize> {
        self.entries.iter().position(NavigationEntry::is_active)
    }

    #[must_use]
    /// Section identifier of the active entry, if any.
    pub fn active_id(&self) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.is_active)
            .map(|e| e.section_id.as_str())
    }

    /// Marks entry `index` active and every other entry inactive.
    ///
    /// Out-of-range indices leave the list untouched and return `false`.
    pub fn activate(&mut self, index: usize) -> bool {
        if index >= self.entries.len() {
            return false;
        }
        for (i, entry) in self.entries.iter_mut().enumerate() {
            entry.is_active = i == index;
        }
        true
    }

    /// Activates the entry for `section_id`.
    ///
    /// An identifier with no entry leaves the current marker where it is.
    pub fn activate_id(&mut self, section_id: &str) -> bool {
        match self.entries.iter().position(|e| e.section_id == section_id) {
            Some(index) => self.activate(index),
            None => false,
        }
    }

    /// Re-reads display labels from fresh descriptors, keeping order and the active marker.
    ///
    /// Entries are matched by section identifier; entries without a descriptor keep their labels.
    pub fn relabel(&mut self, sections: &[SectionDescriptor]) {
        for entry in &mut self.entries {
            if let Some(s) = sections.iter().find(|s| s.id == entry.section_id) {
                entry.display_code.clone_from(&s.code_label);
                entry.display_label.clone_from(&s.title_label);
            }
        }
    }
}
