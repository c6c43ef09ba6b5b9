//! Configuration loading tests against real files.

use pretty_assertions::assert_eq;
use sketchbook::config::Config;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let config = Config::load_from_file(&path).unwrap();

    assert!(config.sketches.is_empty());
    assert_eq!(config.registry().names(), vec!["initial"]);
}

#[test]
fn test_load_config_file_with_sketches() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[sketches.wave]
title = "Wave"
created_at = 1600000000000
text = "let mut phase = 0.0;"
"#,
    )
    .unwrap();

    let config = Config::load_from_file(&path).unwrap();
    let registry = config.registry();

    assert_eq!(registry.names(), vec!["initial", "wave"]);

    let wave = registry.get("wave").unwrap();
    assert_eq!(wave.title, "Wave");
    assert_eq!(wave.created_at, 1_600_000_000_000);
    assert_eq!(wave.text, "let mut phase = 0.0;");
}

#[test]
fn test_config_file_can_replace_the_builtin_sketch() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[sketches.initial]
title = "Mine"
"#,
    )
    .unwrap();

    let config = Config::load_from_file(&path).unwrap();
    let registry = config.registry();

    assert_eq!(registry.names(), vec!["initial"]);
    assert_eq!(registry.get("initial").unwrap().title, "Mine");
    assert_eq!(registry.get("initial").unwrap().page_title(), "Mine.rs @ ");
}

#[test]
fn test_invalid_config_file_reports_the_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "sketches = 42").unwrap();

    let err = Config::load_from_file(&path).unwrap_err();

    assert_eq!(err.category(), "Configuration Error");
    assert!(err.to_string().contains("config.toml"));
}
