//! Error types for deck parsing, configuration and content hydration.
//!
//! Missing structure (no sections, no gate, no content source) is never an error: those paths
//! degrade to the static deck. The enums here cover the failures that an operator might need to
//! see in the log.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to turn deck source text into sections.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The tree-sitter grammar could not be loaded into the parser.
    #[error("failed to load markdown grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),
    /// The heading query did not compile against the grammar.
    #[error("invalid section query: {0}")]
    Query(#[from] tree_sitter::QueryError),
    /// The parser returned no tree for the source.
    #[error("parser produced no syntax tree")]
    NoTree,
}

/// Failure to read or decode `deck.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("failed to read config {path}: {source}")]
    Read {
        /// Location of the config file.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },
    /// The config file is not valid TOML for [`crate::config::Config`].
    #[error("invalid config: {0}")]
    Parse(String),
}

/// Failure to fetch hydrated section content from the remote store.
#[derive(Debug, Error)]
pub enum HydrationError {
    /// The request could not be sent or the body could not be read.
    #[error("content request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The store answered with a non-success status code.
    #[error("content store returned status {0}")]
    Status(u16),
    /// The payload was not a list of section records.
    #[error("malformed content payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Top-level error for the library entry points.
#[derive(Debug, Error)]
pub enum Error {
    /// Deck file could not be read.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// Deck source could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Remote content could not be fetched.
    #[error(transparent)]
    Hydration(#[from] HydrationError),
}
