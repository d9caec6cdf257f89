//! Property-based tests for the highlighting engine
//!
//! Uses proptest to verify properties that should hold for all inputs.

use codetint::highlight::{Grammar, escape_html, highlight_code, is_marker};
use proptest::prelude::*;
use regex::Regex;

/// Remove the span tags the engine generates
fn strip_tags(markup: &str) -> String {
    let tags = Regex::new(r#"<span class="token-[a-z]+">|</span>"#).unwrap();
    tags.replace_all(markup, "").into_owned()
}

fn unescape(text: &str) -> String {
    text.replace("&lt;", "<").replace("&gt;", ">").replace("&amp;", "&")
}

fn any_grammar() -> impl Strategy<Value = Grammar> {
    prop_oneof![
        Just(Grammar::Script),
        Just(Grammar::Component),
        Just(Grammar::Shell),
        Just(Grammar::Plain),
    ]
}

proptest! {
    /// Outside engine tags there is no raw `<` or `>`, and every `&` starts an entity
    #[test]
    fn output_is_escaped(source in "[ -~\n\t]{0,200}", grammar in any_grammar()) {
        let text = strip_tags(&highlight_code(&source, grammar));
        prop_assert!(!text.contains('<') && !text.contains('>'), "{text:?}");

        let entity = Regex::new(r"^&(?:amp|lt|gt|#x[0-9A-F]+);").unwrap();
        for (i, _) in text.match_indices('&') {
            prop_assert!(entity.is_match(&text[i..]), "{text:?}");
        }
    }

    /// Removing tags and unescaping gives back the source text exactly
    #[test]
    fn output_preserves_text(source in "[ -~\n\t]{0,200}", grammar in any_grammar()) {
        let markup = highlight_code(&source, grammar);
        prop_assert_eq!(unescape(&strip_tags(&markup)), source);
    }

    /// No placeholder marker survives, even when the input contains markers
    #[test]
    fn markers_never_survive(
        before in ".{0,40}",
        digits in "[0-9]{0,3}",
        after in ".{0,40}",
        grammar in any_grammar()
    ) {
        let source = format!("{before}\u{E000}{digits}\u{E001}{after}\u{E000}");
        let markup = highlight_code(&source, grammar);
        prop_assert!(!markup.contains(is_marker), "{markup:?}");
    }

    /// The same input always renders the same way
    #[test]
    fn highlighting_is_deterministic(source in "[ -~\n]{0,120}", grammar in any_grammar()) {
        prop_assert_eq!(highlight_code(&source, grammar), highlight_code(&source, grammar));
    }

    /// The plain grammar is exactly entity escaping
    #[test]
    fn plain_is_escape_only(source in "[ -~\n]{0,120}") {
        prop_assert_eq!(highlight_code(&source, Grammar::Plain), escape_html(&source).into_owned());
    }
}

#[cfg(test)]
mod deterministic_tests {
    use super::*;

    #[test]
    fn strip_tags_leaves_escaped_lookalikes() {
        let markup = highlight_code("\"<span class=\\\"token-x\\\">\"", Grammar::Script);
        assert!(strip_tags(&markup).contains("&lt;span"));
    }
}
