use super::Config;
use crate::error::ConfigError;
use crate::controller::DeckSettings;
use crate::layout::ScrollBehavior;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_empty_config_uses_defaults() {
    let cfg = Config::parse("").unwrap();

    assert_eq!(cfg.wrap_width, 100);
    assert_eq!(cfg.click_offset, 24);
    assert_eq!(cfg.scroll_threshold, 40);
    assert_eq!(cfg.line_height, 20);
    assert!(cfg.smooth_scroll);
    assert!(cfg.shareable_links);
    assert_eq!(cfg.toc_label, "Structure");
    assert_eq!(cfg.password, None);
    assert_eq!(cfg.content_url, None);
}

#[test]
fn test_settings_follow_config() {
    let cfg = Config::parse(
        "click_offset = 8\nscroll_threshold = 60\nsmooth_scroll = false\nshareable_links = false\n",
    )
    .unwrap();

    let settings = DeckSettings::from(&cfg);

    assert_eq!(settings.click_offset, 8);
    assert_eq!(settings.scroll_threshold, 60);
    assert!(!settings.shareable_links);
    assert_eq!(settings.scroll_behavior, ScrollBehavior::Instant);
}

#[test]
fn test_load_reads_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "password = \"letmein\"\nwrap_width = 72").unwrap();

    let cfg = Config::load(Some(file.path())).unwrap();

    assert_eq!(cfg.password.as_deref(), Some("letmein"));
    assert_eq!(cfg.wrap_width, 72);
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    let err = Config::load(Some(path.as_path())).unwrap_err();

    assert!(matches!(err, ConfigError::Read { path: p, .. } if p == path));
}

#[test]
fn test_missing_default_file_falls_back_to_defaults() {
    // Tests run from the package root, which has no deck.toml.
    let cfg = Config::load(None).unwrap();
    assert_eq!(cfg.wrap_width, 100);
}
