//! Markdown format implementation using tree-sitter-md.
//!
//! Sections are level-2 ATX headings (`## [01] Title {#id}`), subtitles are level-3 headings
//! directly beneath them, and the first level-1 heading titles the whole deck.

use crate::formats::Format;

/// Tree-sitter queries for ATX-style markdown headings (# syntax).
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn language(&self) -> tree_sitter::Language {
        tree_sitter_md::LANGUAGE.into()
    }

    fn heading_query(&self) -> &'static str {
        "(atx_heading [(atx_h1_marker) (atx_h2_marker) (atx_h3_marker) (atx_h4_marker) (atx_h5_marker) (atx_h6_marker)] @marker (inline)? @title) @heading"
    }

    fn marker_level(&self, kind: &str) -> Option<usize> {
        kind.strip_prefix("atx_h")?
            .strip_suffix("_marker")?
            .parse()
            .ok()
    }

    fn section_level(&self) -> usize {
        2
    }
}
