//! Grammar detection for callers that have no explicit identifier
//!
//! The engine itself only ever receives a [`Grammar`]. Documentation tooling
//! usually knows something weaker: a file name, a fence label, or nothing but
//! the snippet. [`detect`] turns that into a best guess.

use std::path::Path;

use crate::highlight::Grammar;

/// Interpreters whose shebang marks a shell script
const SHELLS: &[&str] = &["sh", "bash", "zsh", "dash", "ksh", "fish"];

/// Interpreters whose shebang marks a script
const SCRIPT_RUNTIMES: &[&str] = &["node", "deno", "bun"];

/// Guess the grammar from an optional hint and the snippet content
///
/// A hint that names a known grammar, directly or through a file extension,
/// wins. Otherwise the content is sniffed.
#[must_use]
pub fn detect(hint: Option<&str>, content: &str) -> Grammar {
    hint.and_then(from_hint).unwrap_or_else(|| sniff(content))
}

/// Resolve a hint: a grammar identifier or a file name
#[must_use]
pub fn from_hint(hint: &str) -> Option<Grammar> {
    let hint = hint.trim();
    if let Ok(grammar) = hint.parse::<Grammar>() {
        return Some(grammar).filter(|g| *g != Grammar::Plain);
    }

    Path::new(hint)
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(|ext| ext.parse::<Grammar>().ok())
        .filter(|g| *g != Grammar::Plain)
}

/// Guess the grammar from content alone
#[must_use]
pub fn sniff(content: &str) -> Grammar {
    let mut significant = content.lines().map(str::trim).filter(|l| !l.is_empty());
    let Some(first) = significant.next() else {
        return Grammar::Plain;
    };

    if let Some(interpreter) = first.strip_prefix("#!") {
        let program = interpreter
            .split_whitespace()
            .filter(|w| *w != "-S")
            .map(|w| w.rsplit('/').next().unwrap_or(w))
            .find(|w| *w != "env")
            .unwrap_or("");
        if SCRIPT_RUNTIMES.contains(&program) {
            return Grammar::Script;
        }
        if SHELLS.contains(&program) {
            return Grammar::Shell;
        }
    }

    if content.lines().any(|l| l.trim_start().starts_with("$ ")) {
        return Grammar::Shell;
    }

    if first.starts_with("import Qt") || is_element_header(first) {
        return Grammar::Component;
    }

    if looks_like_script(content) {
        return Grammar::Script;
    }

    Grammar::Plain
}

/// `Rectangle {`, `Controls.Button {`
fn is_element_header(line: &str) -> bool {
    let Some(name) = line.strip_suffix('{').map(str::trim_end) else {
        return false;
    };
    let last = name.rsplit('.').next().unwrap_or(name);
    last.starts_with(|c: char| c.is_ascii_uppercase())
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
}

fn looks_like_script(content: &str) -> bool {
    const MARKERS: &[&str] = &["function ", "const ", "let ", "var ", "=>", "console."];

    MARKERS.iter().any(|m| content.contains(m))
        || content.lines().map(str::trim_end).any(|l| l.ends_with(';'))
}
