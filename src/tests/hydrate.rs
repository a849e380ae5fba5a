use super::{apply, load, ContentSource, SectionContent};
use crate::document::{DeckSection, Document};
use crate::error::HydrationError;
use async_trait::async_trait;

fn fallback_document() -> Document {
    Document {
        title: Some("Deck".to_string()),
        sections: vec![
            DeckSection {
                id: "problem".to_string(),
                code: Some("[01]".to_string()),
                title: Some("Fallback problem".to_string()),
                subtitle: Some("Fallback subtitle".to_string()),
                body: "Fallback body.".to_string(),
                reflection: None,
            },
            DeckSection {
                id: "ask".to_string(),
                code: Some("[02]".to_string()),
                title: Some("Fallback ask".to_string()),
                subtitle: None,
                body: "Ask body.".to_string(),
                reflection: None,
            },
        ],
    }
}

fn record(id: &str) -> SectionContent {
    SectionContent {
        section_id: id.to_string(),
        title: format!("Remote {id}"),
        subtitle: String::new(),
        body: "  Remote body.\n".to_string(),
        reflection_title: None,
        reflections: Vec::new(),
    }
}

struct FailingSource(u16);

#[async_trait]
impl ContentSource for FailingSource {
    async fn fetch(&self) -> Result<Vec<SectionContent>, HydrationError> {
        Err(HydrationError::Status(self.0))
    }
}

struct MalformedSource;

#[async_trait]
impl ContentSource for MalformedSource {
    async fn fetch(&self) -> Result<Vec<SectionContent>, HydrationError> {
        let records: Vec<SectionContent> = serde_json::from_str(r#"{"not": "a list"}"#)?;
        Ok(records)
    }
}

struct FixedSource(Vec<SectionContent>);

#[async_trait]
impl ContentSource for FixedSource {
    async fn fetch(&self) -> Result<Vec<SectionContent>, HydrationError> {
        Ok(self.0.clone())
    }
}

#[tokio::test]
async fn test_failed_fetch_leaves_fallback_untouched() {
    let mut doc = fallback_document();
    let before = doc.clone();

    for source in [
        &FailingSource(500) as &dyn ContentSource,
        &FailingSource(404),
        &MalformedSource,
    ] {
        if let Some(records) = load(source).await {
            apply(&mut doc, &records);
        }
    }

    assert_eq!(doc, before);
}

#[tokio::test]
async fn test_successful_fetch_rewrites_sections() {
    let mut doc = fallback_document();
    let source = FixedSource(vec![record("ask")]);

    let records = load(&source).await.unwrap();
    assert_eq!(apply(&mut doc, &records), 1);

    let ask = doc.section("ask").unwrap();
    assert_eq!(ask.title.as_deref(), Some("Remote ask"));
    assert_eq!(ask.body, "Remote body.");
    assert_eq!(ask.code.as_deref(), Some("[02]"));

    assert_eq!(doc.sections[0], fallback_document().sections[0]);
}

#[test]
fn test_apply_sets_reflection_and_clears_empty_subtitle() {
    let mut doc = fallback_document();
    let mut content = record("problem");
    content.reflection_title = Some("Reflect".to_string());
    content.reflections = vec!["What changed?".to_string(), "Why now?".to_string()];

    apply(&mut doc, &[content]);

    let problem = doc.section("problem").unwrap();
    assert_eq!(problem.subtitle, None);
    let reflection = problem.reflection.as_ref().unwrap();
    assert_eq!(reflection.title.as_deref(), Some("Reflect"));
    assert_eq!(reflection.items, ["What changed?", "Why now?"]);
}

#[test]
fn test_apply_skips_unknown_sections() {
    let mut doc = fallback_document();
    let before = doc.clone();

    assert_eq!(apply(&mut doc, &[record("missing")]), 0);
    assert_eq!(doc, before);
}

#[test]
fn test_records_decode_with_optional_reflection() {
    let json = r#"[
        {"section_id": "problem", "title": "T", "subtitle": "S", "body": "<p>B</p>"},
        {"section_id": "ask", "title": "T2", "subtitle": "", "body": "B2",
         "reflection_title": "Think", "reflections": ["one", "two"]}
    ]"#;

    let records: Vec<SectionContent> = serde_json::from_str(json).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].reflection_title, None);
    assert!(records[0].reflections.is_empty());
    assert_eq!(records[1].reflections, ["one", "two"]);
}
