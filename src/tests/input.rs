use super::{extract_document, load_document};
use crate::formats::markdown::MarkdownFormat;
use crate::formats::HeadingParts;
use std::io::Write;
use tempfile::NamedTempFile;

const DECK: &str = "# Field Notes

## [01] The Problem {#problem}

### Why long decks lose readers

Readers scroll past the point.

## [02] Approach {#approach}

Build the structure first.

Then fill it in.

## Untitled code {#ask}

Closing words.
";

#[test]
fn test_heading_parts_all_present() {
    let parts = HeadingParts::parse("[07] Market Size {#market}");
    assert_eq!(parts.code, Some("[07]"));
    assert_eq!(parts.title, Some("Market Size"));
    assert_eq!(parts.id, Some("market"));
}

#[test]
fn test_heading_parts_optional_pieces() {
    assert_eq!(
        HeadingParts::parse("Just a title"),
        HeadingParts {
            code: None,
            title: Some("Just a title"),
            id: None,
        }
    );
    assert_eq!(
        HeadingParts::parse("[03] {#intro}"),
        HeadingParts {
            code: Some("[03]"),
            title: None,
            id: Some("intro"),
        }
    );
    // Braces with whitespace inside are title text, not an identifier.
    assert_eq!(HeadingParts::parse("Sets {# a b}").id, None);
}

#[test]
fn test_extract_sections_in_order() {
    let doc = extract_document(DECK, &MarkdownFormat).unwrap();

    assert_eq!(doc.title.as_deref(), Some("Field Notes"));
    let ids: Vec<&str> = doc.sections.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["problem", "approach", "ask"]);

    let problem = &doc.sections[0];
    assert_eq!(problem.code.as_deref(), Some("[01]"));
    assert_eq!(problem.title.as_deref(), Some("The Problem"));
    assert_eq!(
        problem.subtitle.as_deref(),
        Some("Why long decks lose readers")
    );
    assert_eq!(problem.body, "Readers scroll past the point.");

    let approach = &doc.sections[1];
    assert_eq!(approach.subtitle, None);
    assert!(approach.body.starts_with("Build the structure first."));
    assert!(approach.body.ends_with("Then fill it in."));

    let ask = &doc.sections[2];
    assert_eq!(ask.code, None);
    assert_eq!(ask.title.as_deref(), Some("Untitled code"));
    assert_eq!(ask.body, "Closing words.");
}

#[test]
fn test_missing_ids_get_positional_fallback() {
    let source = "## First\n\nA\n\n## Second\n\nB\n";
    let doc = extract_document(source, &MarkdownFormat).unwrap();

    let ids: Vec<&str> = doc.sections.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["section-01", "section-02"]);
}

#[test]
fn test_duplicate_ids_are_disambiguated() {
    let source = "## One {#dup}\n\nA\n\n## Two {#dup}\n\nB\n\n## Three {#dup}\n\nC\n";
    let doc = extract_document(source, &MarkdownFormat).unwrap();

    let ids: Vec<&str> = doc.sections.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["dup", "dup-2", "dup-3"]);
}

#[test]
fn test_no_sections_is_not_an_error() {
    let doc = extract_document("# Title only\n\nSome prose.\n", &MarkdownFormat).unwrap();
    assert!(doc.is_empty());
    assert_eq!(doc.title.as_deref(), Some("Title only"));

    let empty = extract_document("", &MarkdownFormat).unwrap();
    assert!(empty.is_empty());
}

#[test]
fn test_load_document_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{DECK}").unwrap();

    let doc = load_document(file.path(), &MarkdownFormat).unwrap();
    assert_eq!(doc.sections.len(), 3);
}
