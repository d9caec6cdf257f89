//! Output formatting for human and JSON modes
//!
//! Results can be rendered either as plain text for people or as JSON for
//! tooling that embeds the markup itself.

use serde::Serialize;

use crate::highlight::{Grammar, GrammarError, Highlighted, TokenClass};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a highlight operation
#[derive(Debug, Serialize)]
pub struct HighlightResult {
    /// Grammar applied
    pub grammar: Grammar,
    /// Rendered markup
    pub markup: String,
    /// Classified tokens in creation order
    pub tokens: Vec<TokenInfo>,
}

/// A classified token
#[derive(Debug, Serialize)]
pub struct TokenInfo {
    /// Token class
    pub class: TokenClass,
    /// Original source text
    pub text: String,
}

impl From<Highlighted> for HighlightResult {
    fn from(highlighted: Highlighted) -> Self {
        let tokens = highlighted
            .classified()
            .map(|(class, text)| TokenInfo {
                class,
                text: text.to_string(),
            })
            .collect();
        Self {
            grammar: highlighted.grammar,
            markup: highlighted.markup,
            tokens,
        }
    }
}

impl HighlightResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            // Markup goes out verbatim so it can be piped into a page.
            OutputMode::Human if self.markup.ends_with('\n') => print!("{}", self.markup),
            OutputMode::Human => println!("{}", self.markup),
            OutputMode::Json => print_json(self),
        }
    }
}

/// Description of one grammar
#[derive(Debug, Serialize)]
pub struct GrammarInfo {
    /// Canonical name
    pub name: &'static str,
    /// Identifiers that select it
    pub identifiers: Vec<&'static str>,
    /// Rule names in precedence order
    pub rules: Vec<&'static str>,
}

impl GrammarInfo {
    /// Describe a grammar
    #[must_use]
    pub fn describe(grammar: Grammar) -> Self {
        Self {
            name: grammar.name(),
            identifiers: grammar.identifiers().to_vec(),
            rules: grammar.rules().iter().map(crate::highlight::Rule::name).collect(),
        }
    }
}

/// Result of listing grammars
#[derive(Debug, Serialize)]
pub struct GrammarListResult {
    /// Known grammars
    pub grammars: Vec<GrammarInfo>,
}

impl GrammarListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                for g in &self.grammars {
                    println!("{}", g.name);
                    println!("  identifiers: {}", g.identifiers.join(", "));
                    if g.rules.is_empty() {
                        println!("  rules:       (escape only)");
                    } else {
                        println!("  rules:       {}", g.rules.join(" > "));
                    }
                }
            },
            OutputMode::Json => print_json(self),
        }
    }
}

/// Result of validating the grammar table
#[derive(Debug, Serialize)]
pub struct CheckResult {
    /// Whether every grammar passed
    pub passed: bool,
    /// Number of grammars checked
    pub grammars_checked: usize,
    /// Problems found
    pub errors: Vec<String>,
}

impl CheckResult {
    /// Build a result from validation errors
    #[must_use]
    pub fn new(grammars_checked: usize, errors: &[GrammarError]) -> Self {
        Self {
            passed: errors.is_empty(),
            grammars_checked,
            errors: errors.iter().map(ToString::to_string).collect(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                if self.passed {
                    println!("All {} grammar(s) are valid.", self.grammars_checked);
                } else {
                    println!("Grammar table problems:");
                    for e in &self.errors {
                        println!("  {e}");
                    }
                }
            },
            OutputMode::Json => print_json(self),
        }
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("failed to serialize output: {e}"),
    }
}
