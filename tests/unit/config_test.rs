//! Tests for configuration management

use std::path::PathBuf;

use roster::config::Config;
use roster::input::{DEFAULT_MAX_LINE_LENGTH, LinePolicy};
use roster::output::OutputMode;

use crate::common::TestDir;

// =============================================================================
// BASIC CONFIG TESTS
// =============================================================================

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.input.max_line_length, DEFAULT_MAX_LINE_LENGTH);
    assert_eq!(config.input.overlong_lines, LinePolicy::Reject);
    assert_eq!(config.storage.data_dir, None);
    assert!(!config.storage.strict_totals);
    assert!(!config.output.json);
    assert!(!config.output.color);
    assert_eq!(config.data_dir(), PathBuf::from("."));
}

#[test]
fn test_empty_toml_is_default() {
    assert_eq!(Config::from_toml("").unwrap(), Config::default());
}

#[test]
fn test_partial_toml() {
    let config = Config::from_toml(
        r#"
        [input]
        overlong_lines = "truncate"

        [storage]
        data_dir = "/srv/rosters"
        "#,
    )
    .unwrap();

    assert_eq!(config.input.max_line_length, DEFAULT_MAX_LINE_LENGTH);
    assert_eq!(config.input.overlong_lines, LinePolicy::Truncate);
    assert_eq!(config.data_dir(), PathBuf::from("/srv/rosters"));
}

#[test]
fn test_invalid_toml_rejected() {
    assert!(Config::from_toml("[input]\noverlong_lines = \"explode\"\n").is_err());
    assert!(Config::from_toml("[input]\nmax_line_length = 1\n").is_err());
    assert!(Config::from_toml("not toml at all [").is_err());
}

// =============================================================================
// FILE LOADING
// =============================================================================

#[test]
fn test_load_from_file() {
    let dir = TestDir::new();
    let path = dir.write("config.toml", "[output]\njson = true\ncolor = true\n");

    let config = Config::load_from(&path).unwrap();
    assert!(config.output.json);
    assert!(config.output.color);
    assert_eq!(config.renderer().mode(), OutputMode::Json);
}

#[test]
fn test_load_from_missing_file_fails() {
    let dir = TestDir::new();
    let err = Config::load_from(&dir.file("missing.toml")).unwrap_err();
    assert!(format!("{err:#}").contains("missing.toml"));
}

#[test]
fn test_file_store_follows_config() {
    let mut config = Config::default();
    config.storage.data_dir = Some(PathBuf::from("/tmp/rosters"));
    let store = config.file_store();
    assert_eq!(store.path_for("a.txt"), PathBuf::from("/tmp/rosters/a.txt"));
}
