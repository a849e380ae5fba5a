//! Deck loading: turns source text into a [`Document`] using a [`Format`]'s heading query.
//!
//! Headings are collected in one query pass. Section bodies then run from the end of a section
//! heading (or its subtitle) to the next heading at the section level or above.

use crate::document::{DeckSection, Document};
use crate::error::{Error, ParseError};
use crate::formats::Format;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use streaming_iterator::StreamingIterator;
use tree_sitter::{Parser, Query, QueryCursor};

#[derive(Debug)]
struct Heading {
    level: usize,
    text: String,
    start: usize,
    end: usize,
}

/// Reads and parses a deck file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the grammar fails to load.
pub fn load_document(path: &Path, format: &impl Format) -> Result<Document, Error> {
    let source = fs::read_to_string(path)?;
    Ok(extract_document(&source, format)?)
}

/// Parses deck source text into a document.
///
/// A source with no section headings yields a document with no sections.
///
/// # Errors
///
/// Returns an error if the grammar or the heading query cannot be loaded.
pub fn extract_document(source: &str, format: &impl Format) -> Result<Document, ParseError> {
    let headings = collect_headings(source, format)?;
    let level = format.section_level();

    let title = headings
        .iter()
        .find(|h| h.level == 1 && !h.text.is_empty())
        .map(|h| h.text.clone());

    let mut sections = Vec::new();
    let mut seen = HashSet::new();

    for (i, heading) in headings.iter().enumerate() {
        if heading.level != level {
            continue;
        }

        let end = headings[i + 1..]
            .iter()
            .find(|h| h.level <= level)
            .map_or(source.len(), |h| h.start);

        let mut body_start = heading.end;
        let mut subtitle = None;
        if let Some(next) = headings.get(i + 1) {
            if next.level == format.subtitle_level()
                && next.start < end
                && source[heading.end..next.start].trim().is_empty()
            {
                subtitle = (!next.text.is_empty()).then(|| next.text.clone());
                body_start = next.end;
            }
        }

        let parts = format.heading_parts(&heading.text);
        let order = sections.len();
        let id = parts
            .id
            .map_or_else(|| format!("section-{:02}", order + 1), str::to_string);

        sections.push(DeckSection {
            id: unique_id(id, &mut seen),
            code: parts.code.map(str::to_string),
            title: parts.title.map(str::to_string),
            subtitle,
            body: source[body_start.min(end)..end].trim().to_string(),
            reflection: None,
        });
    }

    Ok(Document { title, sections })
}

fn collect_headings(source: &str, format: &impl Format) -> Result<Vec<Heading>, ParseError> {
    let language = format.language();
    let mut parser = Parser::new();
    parser.set_language(&language)?;
    let tree = parser.parse(source, None).ok_or(ParseError::NoTree)?;

    let query = Query::new(&language, format.heading_query())?;
    let names = query.capture_names();
    let bytes = source.as_bytes();

    let mut cursor = QueryCursor::new();
    let mut matches = cursor.matches(&query, tree.root_node(), bytes);
    let mut headings = Vec::new();

    while let Some(m) = matches.next() {
        let mut level = None;
        let mut text = String::new();
        let mut span = None;

        for capture in m.captures {
            let node = capture.node;
            match names[capture.index as usize] {
                "marker" => level = format.marker_level(node.kind()),
                "title" => text = node.utf8_text(bytes).unwrap_or_default().trim().to_string(),
                "heading" => span = Some((node.start_byte(), node.end_byte())),
                _ => {}
            }
        }

        if let (Some(level), Some((start, end))) = (level, span) {
            headings.push(Heading {
                level,
                text,
                start,
                end,
            });
        }
    }

    headings.sort_by_key(|h| h.start);
    headings.dedup_by_key(|h| h.start);
    Ok(headings)
}

fn unique_id(id: String, seen: &mut HashSet<String>) -> String {
    if seen.insert(id.clone()) {
        return id;
    }
    let mut n = 2;
    loop {
        let candidate = format!("{id}-{n}");
        if seen.insert(candidate.clone()) {
            return candidate;
        }
        n += 1;
    }
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
