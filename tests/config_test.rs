//! Tests for loading driver configuration from TOML.

use square_game::{GameConfig, OutputFormat, SelectorKind};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_defaults() {
    let config = GameConfig::default();
    assert_eq!(*config.selector(), SelectorKind::FirstFree);
    assert_eq!(*config.seed(), 0);
    assert_eq!(*config.format(), OutputFormat::Text);
    assert_eq!(config.build_selector().name(), "first-free");
}

#[test]
fn test_load_full_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("square_game.toml");
    fs::write(
        &path,
        r#"
selector = "random"
seed = 42
format = "json"
"#,
    )
    .unwrap();

    let config = GameConfig::load(Some(path.as_path())).unwrap();
    assert_eq!(*config.selector(), SelectorKind::Random);
    assert_eq!(*config.seed(), 42);
    assert_eq!(*config.format(), OutputFormat::Json);
    assert_eq!(config.build_selector().name(), "random");
}

#[test]
fn test_partial_file_uses_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("partial.toml");
    fs::write(&path, "seed = 7\n").unwrap();

    let config = GameConfig::from_file(&path).unwrap();
    assert_eq!(*config.selector(), SelectorKind::FirstFree);
    assert_eq!(*config.seed(), 7);
    assert_eq!(*config.format(), OutputFormat::Text);
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let dir = tempdir().unwrap();
    let err = GameConfig::load(Some(dir.path().join("absent.toml").as_path())).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"), "{err}");
}

#[test]
fn test_invalid_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "selector = \"smartest\"\n").unwrap();

    let err = GameConfig::from_file(&path).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"), "{err}");
}

#[test]
fn test_overrides_replace_only_given_fields() {
    let config = GameConfig::default().with_overrides(Some(SelectorKind::Random), None, Some(OutputFormat::Json));
    assert_eq!(*config.selector(), SelectorKind::Random);
    assert_eq!(*config.seed(), 0);
    assert_eq!(*config.format(), OutputFormat::Json);

    let config = config.with_overrides(None, Some(9), None);
    assert_eq!(*config.selector(), SelectorKind::Random);
    assert_eq!(*config.seed(), 9);
}
