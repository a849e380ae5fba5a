use super::{build, click};
use crate::controller::{DeckSettings, Effect};
use crate::layout::ScrollBehavior;
use crate::section::SectionDescriptor;

fn sections() -> Vec<SectionDescriptor> {
    [("intro", 0), ("problem", 480), ("ask", 1300)]
        .iter()
        .enumerate()
        .map(|(i, &(id, top))| SectionDescriptor {
            id: id.to_string(),
            order: i,
            code_label: format!("[{:02}]", i + 1),
            title_label: id.to_uppercase(),
            top_offset: top,
        })
        .collect()
}

#[test]
fn test_build_mirrors_sections() {
    let sections = sections();
    let nav = build(&sections, "Structure").unwrap();

    assert_eq!(nav.label(), "Structure");
    assert_eq!(nav.len(), sections.len());
    for (entry, section) in nav.entries().iter().zip(&sections) {
        assert_eq!(entry.section_id, section.id);
        assert_eq!(entry.display_code, section.code_label);
        assert_eq!(entry.display_label, section.title_label);
        assert!(!entry.is_active());
    }
}

#[test]
fn test_build_with_no_sections_does_nothing() {
    assert!(build(&[], "Structure").is_none());
}

#[test]
fn test_click_activates_entry_and_scrolls_with_offset() {
    let sections = sections();
    let mut nav = build(&sections, "Structure").unwrap();
    nav.activate(2);

    let effects = click(&mut nav, &sections, 1, &DeckSettings::default());

    assert_eq!(nav.active_index(), Some(1));
    assert_eq!(nav.entries().iter().filter(|e| e.is_active()).count(), 1);
    assert_eq!(
        effects,
        vec![
            Effect::ScrollTo {
                top: 456,
                behavior: ScrollBehavior::Smooth,
            },
            Effect::ReplaceFragment("problem".to_string()),
        ]
    );
}

#[test]
fn test_click_without_shareable_links() {
    let sections = sections();
    let mut nav = build(&sections, "Structure").unwrap();
    let settings = DeckSettings {
        shareable_links: false,
        click_offset: 10,
        scroll_behavior: ScrollBehavior::Instant,
        ..DeckSettings::default()
    };

    let effects = click(&mut nav, &sections, 2, &settings);

    assert_eq!(
        effects,
        vec![Effect::ScrollTo {
            top: 1290,
            behavior: ScrollBehavior::Instant,
        }]
    );
}

#[test]
fn test_click_out_of_range_is_ignored() {
    let sections = sections();
    let mut nav = build(&sections, "Structure").unwrap();
    nav.activate(0);

    let effects = click(&mut nav, &sections, 7, &DeckSettings::default());

    assert!(effects.is_empty());
    assert_eq!(nav.active_index(), Some(0));
}
