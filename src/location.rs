//! Shareable location: a deck path plus an optional section fragment.
//!
//! The fragment slot is only ever replaced, never pushed, so navigating the TOC leaves no
//! history behind.

use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq, Eq)]
/// `path#fragment` pointing at a deck and optionally one of its sections.
pub struct Location {
    resource: PathBuf,
    fragment: Option<String>,
}

impl Location {
    #[must_use]
    /// Splits `deck.md#section` at the last `#`; an empty fragment counts as none.
    pub fn parse(raw: &str) -> Self {
        match raw.rsplit_once('#') {
            Some((resource, fragment)) if !resource.is_empty() => Self {
                resource: PathBuf::from(resource),
                fragment: (!fragment.is_empty()).then(|| fragment.to_string()),
            },
            _ => Self {
                resource: PathBuf::from(raw),
                fragment: None,
            },
        }
    }

    #[must_use]
    /// The deck path.
    pub fn resource(&self) -> &Path {
        &self.resource
    }

    #[must_use]
    /// The current section fragment.
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Overwrites the fragment in place.
    pub fn replace_fragment(&mut self, fragment: impl Into<String>) {
        self.fragment = Some(fragment.into());
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.resource.display())?;
        if let Some(fragment) = &self.fragment {
            write!(f, "#{fragment}")?;
        }
        Ok(())
    }
}
