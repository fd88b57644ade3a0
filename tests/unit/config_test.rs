//! Tests for settings loading

use std::fs;

use loanscreen::config::{ConfigError, Settings};
use tempfile::TempDir;

#[test]
fn test_defaults() {
    let settings = Settings::default();
    assert!(settings.display.color);
    assert_eq!(settings.display.currency, "GBP");
}

#[test]
fn test_empty_toml_gives_defaults() {
    assert_eq!(Settings::from_toml("").unwrap(), Settings::default());
}

#[test]
fn test_partial_display_section() {
    let settings = Settings::from_toml("[display]\ncolor = false\n").unwrap();
    assert!(!settings.display.color);
    assert_eq!(settings.display.currency, "GBP");
}

#[test]
fn test_load_explicit_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[display]\ncurrency = \"EUR\"\n").unwrap();

    let settings = Settings::load(Some(&path)).unwrap();
    assert_eq!(settings.display.currency, "EUR");
    assert!(settings.display.color);
}

#[test]
fn test_load_missing_explicit_file_fails() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("absent.toml");

    let err = Settings::load(Some(&path)).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn test_load_malformed_explicit_file_fails() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[display\ncolor = maybe").unwrap();

    assert!(matches!(Settings::load(Some(&path)), Err(ConfigError::Parse { .. })));
}

#[test]
fn test_round_trip_through_toml() {
    let settings = Settings::from_toml("[display]\ncolor = false\ncurrency = \"USD\"\n").unwrap();
    let written = toml::to_string_pretty(&settings).unwrap();
    assert_eq!(Settings::from_toml(&written).unwrap(), settings);
}
