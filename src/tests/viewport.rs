use super::{render, LineKind, Viewport};
use crate::document::{DeckSection, Document, Reflection};
use crate::layout::{measure, LayoutProvider, ScrollBehavior};
use crate::section::describe;
use crate::sync::ScrollSynchronizer;

fn document() -> Document {
    Document {
        title: Some("Deck".to_string()),
        sections: vec![
            DeckSection {
                id: "intro".to_string(),
                code: Some("[01]".to_string()),
                title: Some("Intro".to_string()),
                body: "Hello".to_string(),
                ..DeckSection::default()
            },
            DeckSection {
                id: "detail".to_string(),
                subtitle: Some("Sub".to_string()),
                body: "A\n\nB".to_string(),
                ..DeckSection::default()
            },
        ],
    }
}

fn tall_document(sections: usize, body_lines: usize) -> Document {
    let body = vec!["line"; body_lines].join("\n");
    Document {
        title: None,
        sections: (0..sections)
            .map(|i| DeckSection {
                id: format!("s{i}"),
                body: body.clone(),
                ..DeckSection::default()
            })
            .collect(),
    }
}

#[test]
fn test_render_rows_and_tops() {
    let deck = render(&document(), 80);
    let kinds: Vec<LineKind> = deck.lines().iter().map(|l| l.kind).collect();

    assert_eq!(
        kinds,
        [
            LineKind::DocTitle,
            LineKind::Blank,
            LineKind::Heading,
            LineKind::Blank,
            LineKind::Body,
            LineKind::Blank,
            LineKind::Heading,
            LineKind::Subtitle,
            LineKind::Blank,
            LineKind::Body,
            LineKind::Blank,
            LineKind::Body,
        ]
    );
    assert_eq!(deck.lines()[2].text, "[01] Intro");
    assert_eq!(deck.lines()[6].text, "[02] Section 2");
    assert_eq!(deck.top_row("intro"), Some(2));
    assert_eq!(deck.top_row("detail"), Some(6));
    assert_eq!(deck.top_row("missing"), None);
}

#[test]
fn test_blank_hydrated_title_uses_fallback_heading() {
    let mut doc = document();
    doc.sections[0].title = Some(String::new());
    doc.sections[0].code = Some("  ".to_string());

    let deck = render(&doc, 80);
    let labels = describe(&doc.sections);

    assert_eq!(deck.lines()[2].text, "[01] Section 1");
    assert_eq!(
        deck.lines()[2].text,
        format!("{} {}", labels[0].code_label, labels[0].title_label)
    );
}

#[test]
fn test_section_span_ends_at_next_section() {
    let deck = render(&document(), 80);

    assert_eq!(deck.section_span("intro"), Some((2, 6)));
    assert_eq!(deck.section_span("detail"), Some((6, 12)));
    assert_eq!(deck.section_span("missing"), None);
}

#[test]
fn test_render_wraps_and_appends_reflection() {
    let mut doc = document();
    doc.sections[0].body = "one two three four five six".to_string();
    doc.sections[0].reflection = Some(Reflection {
        title: None,
        items: vec!["Why?".to_string()],
    });

    let deck = render(&doc, 10);
    let body_rows = deck
        .lines()
        .iter()
        .filter(|l| l.kind == LineKind::Body)
        .count();

    // "one two three four five six" at width 10 plus the two body lines of "detail".
    assert!(body_rows > 3);
    assert!(deck
        .lines()
        .iter()
        .any(|l| l.kind == LineKind::ReflectionTitle && l.text == "Reflection"));
    assert!(deck
        .lines()
        .iter()
        .any(|l| l.kind == LineKind::Reflection && l.text == "• Why?"));
}

#[test]
fn test_layout_provider_reports_pixels() {
    let mut viewport = Viewport::new(render(&document(), 80), 20);
    viewport.set_height(4);

    assert_eq!(viewport.section_top("intro"), Some(40));
    assert_eq!(viewport.section_top("detail"), Some(120));
    assert_eq!(viewport.scroll_position(), 0);

    viewport.scroll_to(120, ScrollBehavior::Instant);
    assert_eq!(viewport.scroll_row(), 6);
    assert_eq!(viewport.scroll_position(), 120);
}

#[test]
fn test_scroll_to_clamps() {
    let mut viewport = Viewport::new(render(&document(), 80), 20);
    viewport.set_height(4);

    viewport.scroll_to(-24, ScrollBehavior::Instant);
    assert_eq!(viewport.scroll_row(), 0);

    viewport.scroll_to(100_000, ScrollBehavior::Instant);
    assert_eq!(viewport.scroll_row(), viewport.max_scroll());
    assert_eq!(viewport.visible().len(), 4);
}

#[test]
fn test_smooth_scroll_is_fire_and_forget() {
    let mut viewport = Viewport::new(render(&tall_document(5, 30), 80), 20);
    viewport.set_height(10);

    viewport.scroll_to(2_000, ScrollBehavior::Smooth);
    assert_eq!(viewport.scroll_row(), 0);
    assert!(viewport.is_animating());

    let mut ticks = 0;
    while viewport.tick() {
        ticks += 1;
        assert!(ticks < 1_000, "animation never settled");
    }
    assert!(!viewport.is_animating());
    assert_eq!(viewport.scroll_row(), 100);
    assert!(ticks > 1);
}

#[test]
fn test_user_scroll_cancels_animation() {
    let mut viewport = Viewport::new(render(&tall_document(5, 30), 80), 20);
    viewport.set_height(10);

    viewport.scroll_to(2_000, ScrollBehavior::Smooth);
    viewport.tick();
    assert!(viewport.scroll_by(-1));
    assert!(!viewport.is_animating());
    assert!(!viewport.tick());
}

#[test]
fn test_click_target_lands_on_clicked_section() {
    let doc = tall_document(4, 25);
    let mut viewport = Viewport::new(render(&doc, 80), 20);
    viewport.set_height(10);

    let mut sections = describe(&doc.sections);
    measure(&mut sections, &viewport);
    let sync = ScrollSynchronizer::new(40);

    for (i, section) in sections.iter().enumerate().take(3) {
        viewport.scroll_to(section.top_offset - 24, ScrollBehavior::Instant);
        assert_eq!(
            sync.current_index(&sections, viewport.scroll_position()),
            Some(i)
        );
    }
}
