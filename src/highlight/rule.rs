//! Rules and the generic rule pipeline
//!
//! A rule is a regular expression plus the class it assigns. When the
//! expression defines a capture group named `tok`, only that group is
//! classified; the rest of the match (a trailing `{` or `(`, leading
//! whitespace) stays in the buffer as plain text.

use std::ops::Range;

use log::debug;
use regex::Regex;

use super::registry::Registry;
use super::token::{TokenClass, is_marker};

/// Name of the capture group holding the classified part of a match
pub const TOKEN_GROUP: &str = "tok";

/// Extra condition a match must satisfy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Guard {
    /// Accept every match
    #[default]
    Always,
    /// Reject matches whose classified part directly follows this character
    NotAfter(char),
}

impl Guard {
    /// Check whether a token starting at `start` in `buffer` passes the guard
    #[must_use]
    pub fn accepts(self, buffer: &str, start: usize) -> bool {
        match self {
            Self::Always => true,
            Self::NotAfter(c) => buffer[..start].chars().next_back() != Some(c),
        }
    }
}

/// A single (matcher, classifier) pair
#[derive(Debug, Clone)]
pub struct Rule {
    name: &'static str,
    pattern: Regex,
    class: TokenClass,
    guard: Guard,
}

/// An accepted match of a rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMatch {
    /// Byte range of the whole regex match
    pub whole: Range<usize>,
    /// Byte range of the classified part
    pub token: Range<usize>,
}

impl Rule {
    /// Compile a rule
    pub fn new(name: &'static str, pattern: &str, class: TokenClass) -> Result<Self, regex::Error> {
        Ok(Self {
            name,
            pattern: Regex::new(pattern)?,
            class,
            guard: Guard::Always,
        })
    }

    /// Set the guard
    #[must_use]
    pub fn with_guard(mut self, guard: Guard) -> Self {
        self.guard = guard;
        self
    }

    /// Rule name (for diagnostics)
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Class assigned to matches
    #[must_use]
    pub const fn class(&self) -> TokenClass {
        self.class
    }

    /// Compiled pattern
    #[must_use]
    pub const fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// Guard applied to matches
    #[must_use]
    pub const fn guard(&self) -> Guard {
        self.guard
    }

    /// Accepted, non-overlapping matches in `buffer`, leftmost first
    ///
    /// Matches with an empty classified part, or rejected by the guard, are
    /// skipped.
    pub fn find_iter<'a>(&'a self, buffer: &'a str) -> impl Iterator<Item = RuleMatch> + 'a {
        self.pattern.captures_iter(buffer).filter_map(move |caps| {
            let whole = caps.get(0)?;
            let token = caps.name(TOKEN_GROUP).unwrap_or(whole);
            if token.is_empty() || !self.guard.accepts(buffer, token.start()) {
                return None;
            }
            Some(RuleMatch {
                whole: whole.range(),
                token: token.range(),
            })
        })
    }

    /// Replace every accepted match in `buffer` with a freshly minted placeholder
    #[must_use]
    pub fn apply(&self, buffer: &str, registry: &mut Registry) -> String {
        let mut out = String::with_capacity(buffer.len());
        let mut last = 0;
        let mut count = 0usize;

        for m in self.find_iter(buffer) {
            out.push_str(&buffer[last..m.token.start]);
            out.push_str(&registry.mint_span(self.class, &buffer[m.token.clone()]));
            last = m.token.end;
            count += 1;
        }
        out.push_str(&buffer[last..]);

        debug!("rule {} ({}): {} match(es)", self.name, self.class, count);
        out
    }
}

/// Replace marker characters already present in the source with shielded entries
#[must_use]
pub fn shield_reserved(source: &str, registry: &mut Registry) -> String {
    if !source.contains(is_marker) {
        return source.to_owned();
    }

    let mut out = String::with_capacity(source.len());
    for c in source.chars() {
        if is_marker(c) {
            out.push_str(&registry.shield(c));
        } else {
            out.push(c);
        }
    }
    out
}

/// Run an ordered rule list over `source`
///
/// Each rule scans the output of the previous one, so text claimed by an
/// earlier rule is hidden behind a placeholder from every later rule.
#[must_use]
pub fn run_rules(rules: &[Rule], source: &str, registry: &mut Registry) -> String {
    let shielded = shield_reserved(source, registry);
    rules.iter().fold(shielded, |buffer, rule| rule.apply(&buffer, registry))
}
