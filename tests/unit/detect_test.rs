//! Tests for grammar detection

use codetint::config::Config;
use codetint::detect::{detect, from_hint, sniff};
use codetint::highlight::Grammar;

#[test]
fn test_explicit_identifier_hint() {
    assert_eq!(detect(Some("qml"), ""), Grammar::Component);
    assert_eq!(detect(Some("JS"), ""), Grammar::Script);
}

#[test]
fn test_file_name_hint() {
    assert_eq!(detect(Some("install.bash"), ""), Grammar::Shell);
    assert_eq!(detect(Some("index.mjs"), ""), Grammar::Script);
}

#[test]
fn test_plain_hint_is_not_authoritative() {
    assert_eq!(from_hint("plain"), None);
    assert_eq!(detect(Some("plain"), "let x = 1;"), Grammar::Script);
}

#[test]
fn test_console_transcript() {
    let transcript = "Install it:\n$ npm install --save codetint\nadded 1 package";
    assert_eq!(sniff(transcript), Grammar::Shell);
}

#[test]
fn test_component_with_dotted_element() {
    assert_eq!(sniff("Controls.Button {\n  text: \"Go\"\n}"), Grammar::Component);
}

#[test]
fn test_prose_is_plain() {
    assert_eq!(sniff("The quick brown fox."), Grammar::Plain);
}

#[test]
fn test_config_alias_beats_builtin_detection() {
    let config = Config::from_toml("[aliases]\nconf = \"shell\"\n").unwrap();
    assert_eq!(config.detect(Some("app.conf"), "const x = 1;"), Grammar::Shell);
    assert_eq!(config.detect(None, "const x = 1;"), Grammar::Script);
}
