//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same test logic with different inputs.

use codetint::highlight::{Grammar, TokenClass, highlight_code};
use test_case::test_case;

// =============================================================================
// Grammar Identifier Tests
// =============================================================================

#[test_case("js", Grammar::Script ; "js")]
#[test_case("TypeScript", Grammar::Script ; "typescript mixed case")]
#[test_case("qml", Grammar::Component ; "qml")]
#[test_case("component", Grammar::Component ; "component")]
#[test_case("bash", Grammar::Shell ; "bash")]
#[test_case("shell-session", Grammar::Shell ; "shell session")]
#[test_case("text", Grammar::Plain ; "text")]
#[test_case("unknown-lang", Grammar::Plain ; "unknown falls back to plain")]
#[test_case("", Grammar::Plain ; "empty falls back to plain")]
fn test_grammar_from_identifier(identifier: &str, expected: Grammar) {
    assert_eq!(Grammar::from_identifier(identifier), expected);
}

// =============================================================================
// Word Boundary Tests
// =============================================================================

#[test_case("iffy" ; "if prefix")]
#[test_case("classes" ; "class prefix")]
#[test_case("newValue" ; "new prefix")]
#[test_case("my_return" ; "return suffix")]
#[test_case("forEach" ; "for prefix")]
fn test_keyword_inside_identifier_is_plain(source: &str) {
    assert_eq!(highlight_code(source, Grammar::Script), source);
}

#[test_case("if", TokenClass::Keyword ; "if")]
#[test_case("42", TokenClass::Number ; "integer")]
#[test_case("'x'", TokenClass::String ; "single quoted")]
#[test_case("// note", TokenClass::Comment ; "line comment")]
#[test_case("/* a\nb */", TokenClass::Comment ; "block comment")]
#[test_case("@Input", TokenClass::Directive ; "decorator")]
fn test_whole_input_is_one_script_token(source: &str, class: TokenClass) {
    assert_eq!(
        highlight_code(source, Grammar::Script),
        format!("<span class=\"token-{class}\">{source}</span>")
    );
}

// =============================================================================
// Escaping Tests
// =============================================================================

#[test_case("a < b", "a &lt; b" ; "less than")]
#[test_case("a > b", "a &gt; b" ; "greater than")]
#[test_case("a && b", "a &amp;&amp; b" ; "ampersands")]
#[test_case("&lt;", "&amp;lt;" ; "existing entity")]
#[test_case("", "" ; "empty")]
fn test_plain_grammar_escapes(source: &str, expected: &str) {
    assert_eq!(highlight_code(source, Grammar::Plain), expected);
}
