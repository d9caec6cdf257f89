//! Grammar table validation
//!
//! Placeholders are only safe if no rule can match inside one. That holds by
//! construction for the built-in grammars; this pass checks it mechanically by
//! running every rule over a probe buffer packed with placeholders in the
//! contexts rules care about (line starts, after whitespace, before `(`, `{`
//! or `:`, next to digits and dashes).

use std::ops::Range;

use thiserror::Error;

use super::grammar::Grammar;
use super::registry::Registry;
use super::rule::Rule;
use super::token::{Piece, TokenClass, is_marker, pieces, placeholder_id};

/// A rule that breaks the placeholder discipline
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    /// The pattern source mentions a marker character
    #[error("{grammar}/{rule}: pattern refers to the placeholder marker alphabet")]
    ReservedInPattern {
        /// Grammar name
        grammar: String,
        /// Rule name
        rule: String,
    },

    /// The pattern can match the empty string
    #[error("{grammar}/{rule}: pattern matches the empty string")]
    MatchesEmpty {
        /// Grammar name
        grammar: String,
        /// Rule name
        rule: String,
    },

    /// An accepted match starts or ends inside a placeholder id
    #[error("{grammar}/{rule}: match {matched:?} splits a placeholder")]
    SplitsPlaceholder {
        /// Grammar name
        grammar: String,
        /// Rule name
        rule: String,
        /// Offending match text (markers shown escaped)
        matched: String,
    },
}

const PREFIXES: &[&str] = &[
    "", " ", "\t", "x", "_", "0", "-", "--", "@", "#", "# ", "$ ", ".", "(", "{", "//", "\"",
];
const SUFFIXES: &[&str] = &["", "(", " {", "{", ":", "x", "1", "-", ".5", " # c"];

/// Validate every built-in grammar
#[must_use]
pub fn validate_all() -> Vec<GrammarError> {
    Grammar::all()
        .into_iter()
        .flat_map(|g| validate_rules(g.name(), g.rules()))
        .collect()
}

/// Validate one rule list
#[must_use]
pub fn validate_rules(grammar: &str, rules: &[Rule]) -> Vec<GrammarError> {
    let (probe, placeholders) = probe_buffer();
    let mut errors = Vec::new();

    for rule in rules {
        if mentions_markers(rule.pattern().as_str()) {
            errors.push(GrammarError::ReservedInPattern {
                grammar: grammar.to_string(),
                rule: rule.name().to_string(),
            });
        }

        if rule.pattern().is_match("") {
            errors.push(GrammarError::MatchesEmpty {
                grammar: grammar.to_string(),
                rule: rule.name().to_string(),
            });
        }

        let split = rule.find_iter(&probe).find(|m| {
            placeholders
                .iter()
                .any(|p| strictly_inside(m.token.start, p) || strictly_inside(m.token.end, p))
        });
        if let Some(m) = split {
            errors.push(GrammarError::SplitsPlaceholder {
                grammar: grammar.to_string(),
                rule: rule.name().to_string(),
                matched: show_markers(&probe[m.token]),
            });
        }
    }

    errors
}

const fn strictly_inside(offset: usize, placeholder: &Range<usize>) -> bool {
    offset > placeholder.start && offset < placeholder.end
}

fn mentions_markers(pattern: &str) -> bool {
    let upper = pattern.to_ascii_uppercase();
    pattern.contains(is_marker)
        || upper.contains("E000")
        || upper.contains("E001")
        || upper.contains(r"\P{CO}")
        || upper.contains(r"\P{PRIVATE")
}

/// Probe text plus the byte range of every placeholder in it
fn probe_buffer() -> (String, Vec<Range<usize>>) {
    let mut registry = Registry::new("");
    let mut probe = String::new();

    // One placeholder per site, so ids run from one to three digits.
    for prefix in PREFIXES {
        for suffix in SUFFIXES {
            probe.push_str(prefix);
            probe.push_str(&registry.mint_span(TokenClass::String, "p"));
            probe.push_str(suffix);
            probe.push('\n');
        }
    }

    let mut placeholders = Vec::new();
    let mut offset = 0;
    for piece in pieces(&probe) {
        let len = match piece {
            Piece::Text(text) => text.len(),
            Piece::Placeholder(index) => {
                let len = placeholder_id(index).len();
                placeholders.push(offset..offset + len);
                len
            },
            Piece::Stray(c) => c.len_utf8(),
        };
        offset += len;
    }

    (probe, placeholders)
}

fn show_markers(text: &str) -> String {
    text.chars()
        .map(|c| if is_marker(c) { c.escape_unicode().to_string() } else { c.to_string() })
        .collect()
}
