//! Configuration to acknowledge deck preferences as well as set defaults.
//!
//! Specifically, we look for a deck.toml (or an explicit `--config` path), and if present we load
//! settings from there. Every field has a default, so an empty or missing file is valid.

use crate::error::ConfigError;
use facet::Facet;
use std::fs;
use std::io;
use std::path::Path;

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "deck.toml";

#[derive(Facet, Clone, Debug)]
/// Deck preferences loaded from deck.toml or falling back to defaults.
pub struct Config {
    #[facet(default = 100)]
    /// Maximum line width for the document pane.
    pub wrap_width: usize,
    #[facet(default = 24)]
    /// Gap in pixels left above a section after clicking its TOC entry.
    pub click_offset: i64,
    #[facet(default = 40)]
    /// Distance in pixels below a section top at which scrolling marks it current.
    pub scroll_threshold: i64,
    #[facet(default = 20)]
    /// Pixels per rendered line, used to express terminal rows as pixel offsets.
    pub line_height: i64,
    #[facet(default = true)]
    /// Animate click-driven scrolls rather than jumping.
    pub smooth_scroll: bool,
    #[facet(default = true)]
    /// Reflect clicked sections in the location fragment.
    pub shareable_links: bool,
    #[facet(default = "Structure".to_string())]
    /// Heading shown above the TOC entries.
    pub toc_label: String,
    #[facet(default)]
    /// Credential required before the deck is shown; no gate when absent.
    pub password: Option<String>,
    #[facet(default)]
    /// Endpoint returning section content as a JSON array.
    pub content_url: Option<String>,
    #[facet(default)]
    /// Bearer token sent to the content endpoint.
    pub content_api_key: Option<String>,
}

impl Config {
    /// Load configuration from `path`, or deck.toml in the working directory.
    ///
    /// A missing deck.toml yields the defaults; a missing explicit path is an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::read(path),
            None => match Self::read(Path::new(DEFAULT_CONFIG_FILE)) {
                Err(ConfigError::Read { source, .. })
                    if source.kind() == io::ErrorKind::NotFound =>
                {
                    Self::parse("")
                }
                other => other,
            },
        }
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents)
    }

    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML for this struct.
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        facet_toml::from_str::<Self>(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
