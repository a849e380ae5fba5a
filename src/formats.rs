//! Format trait describing how a source language marks deck sections.
//!
//! A format supplies the tree-sitter language and a heading query, plus the heading levels that
//! act as section markers and subtitles. Splitting a heading into its code, title and identifier
//! parts is shared by all formats through [`Format::heading_parts`].

pub mod markdown;

/// Source language and queries for locating section markers.
pub trait Format {
    /// Tree-sitter grammar used to parse the source.
    fn language(&self) -> tree_sitter::Language;

    /// Query capturing `@heading`, its level `@marker` and its text `@title`.
    fn heading_query(&self) -> &str;

    /// Heading level encoded by a `@marker` capture's node kind.
    fn marker_level(&self, kind: &str) -> Option<usize>;

    /// Heading level that starts a new section.
    fn section_level(&self) -> usize;

    /// Heading level treated as a subtitle when it directly follows a section heading.
    fn subtitle_level(&self) -> usize {
        self.section_level() + 1
    }

    /// Splits heading text of the form `[CODE] Title {#id}` into its parts.
    fn heading_parts<'a>(&self, text: &'a str) -> HeadingParts<'a> {
        HeadingParts::parse(text)
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
/// The optional parts of a section heading.
pub struct HeadingParts<'a> {
    /// Leading bracketed short code, brackets included.
    pub code: Option<&'a str>,
    /// Remaining title text.
    pub title: Option<&'a str>,
    /// Identifier from a trailing `{#id}` attribute.
    pub id: Option<&'a str>,
}

impl<'a> HeadingParts<'a> {
    #[must_use]
    /// Parses `[CODE] Title {#id}`; every part may be absent.
    pub fn parse(text: &'a str) -> Self {
        let mut rest = text.trim();

        let mut id = None;
        if let Some(stripped) = rest.strip_suffix('}') {
            if let Some(open) = stripped.rfind("{#") {
                let candidate = stripped[open + 2..].trim();
                if !candidate.is_empty() && !candidate.contains(char::is_whitespace) {
                    id = Some(candidate);
                    rest = stripped[..open].trim_end();
                }
            }
        }

        let mut code = None;
        if rest.starts_with('[') {
            if let Some(close) = rest.find(']') {
                code = Some(&rest[..=close]);
                rest = rest[close + 1..].trim_start();
            }
        }

        let title = (!rest.is_empty()).then_some(rest);
        Self { code, title, id }
    }
}
