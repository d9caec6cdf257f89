//! Tests for configuration loading

use std::fs;

use codetint::config::{Config, ConfigError};
use codetint::highlight::Grammar;
use tempfile::TempDir;

#[test]
fn test_load_from_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("codetint.toml");
    fs::write(
        &path,
        "class_prefix = \"hl-\"\nmax_input_bytes = 64\n\n[aliases]\nsnippet = \"js\"\n",
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.class_prefix, "hl-");
    assert_eq!(config.max_input_bytes, 64);
    assert_eq!(config.resolve("snippet"), Grammar::Script);
}

#[test]
fn test_highlighter_uses_config() {
    let config = Config::from_toml("class_prefix = \"hl-\"\nmax_input_bytes = 8\n").unwrap();
    let highlighter = config.highlighter();

    let short = highlighter.highlight("1", Grammar::Script);
    assert_eq!(short.markup, "<span class=\"hl-number\">1</span>");

    let long = highlighter.highlight("return 1234;", Grammar::Script);
    assert_eq!(long.grammar, Grammar::Plain);
    assert_eq!(long.markup, "return 1234;");
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope.toml");
    let err = Config::discover(Some(missing.as_path())).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn test_invalid_toml_is_an_error() {
    let err = Config::from_toml("class_prefix = [").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_save_and_reload() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested/config.toml");

    let mut config = Config::default();
    config.aliases.insert("tmpl".to_string(), "component".to_string());
    config.save(&path).unwrap();

    assert_eq!(Config::load_from(&path).unwrap(), config);
}
