//! Tokenization engine
//!
//! Turns a code snippet into HTML with `<span class="token-...">` wrappers:
//!
//! 1. marker characters already present in the input are shielded,
//! 2. the grammar's rules run in order, each replacing its matches with
//!    placeholders,
//! 3. whatever plain text remains is entity-escaped,
//! 4. a single pass swaps every placeholder for its rendered span.
//!
//! # Examples
//!
//! ```
//! use codetint::highlight::{Grammar, highlight_code};
//!
//! let html = highlight_code("foo(1)", Grammar::Script);
//! assert_eq!(
//!     html,
//!     "<span class=\"token-function\">foo</span>(<span class=\"token-number\">1</span>)"
//! );
//! ```

mod escape;
mod grammar;
mod registry;
mod rule;
mod token;
mod validate;

use log::{debug, warn};
use serde::Serialize;

pub use escape::{escape_html, numeric_reference};
pub use grammar::{Grammar, ParseGrammarError};
pub use registry::Registry;
pub use rule::{Guard, Rule, RuleMatch, TOKEN_GROUP, run_rules, shield_reserved};
pub use token::{CLOSE, OPEN, Token, TokenClass, is_marker, placeholder_id};
pub use validate::{GrammarError, validate_all, validate_rules};

/// Default prefix of span classes
pub const DEFAULT_CLASS_PREFIX: &str = "token-";

/// Default upper bound on the size of a tokenized input (1 MiB)
pub const DEFAULT_MAX_INPUT_BYTES: usize = 1024 * 1024;

/// Highlight `source` with default options
#[must_use]
pub fn highlight_code(source: &str, grammar: Grammar) -> String {
    Highlighter::new().highlight(source, grammar).markup
}

/// Result of a highlight call
#[derive(Debug, Clone, Serialize)]
pub struct Highlighted {
    /// Grammar actually applied
    pub grammar: Grammar,
    /// Rendered markup
    pub markup: String,
    /// Every minted token in creation order, including nested and shielded ones
    #[serde(skip)]
    pub tokens: Vec<Token>,
}

impl Highlighted {
    /// Classified tokens in creation order
    pub fn classified(&self) -> impl Iterator<Item = (TokenClass, &str)> {
        self.tokens
            .iter()
            .filter_map(|t| t.class.map(|class| (class, t.text.as_str())))
    }
}

/// Highlighting options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlighter {
    class_prefix: String,
    max_input_bytes: usize,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter {
    /// Create a highlighter with default options
    #[must_use]
    pub fn new() -> Self {
        Self {
            class_prefix: DEFAULT_CLASS_PREFIX.to_string(),
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }

    /// Set the span class prefix
    #[must_use]
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }

    /// Set the input size above which only escaping is performed
    #[must_use]
    pub fn with_max_input_bytes(mut self, max_input_bytes: usize) -> Self {
        self.max_input_bytes = max_input_bytes;
        self
    }

    /// Span class prefix
    #[must_use]
    pub fn class_prefix(&self) -> &str {
        &self.class_prefix
    }

    /// Input size bound
    #[must_use]
    pub const fn max_input_bytes(&self) -> usize {
        self.max_input_bytes
    }

    /// Highlight `source` with `grammar`
    ///
    /// Inputs larger than the size bound fall back to [`Grammar::Plain`].
    #[must_use]
    pub fn highlight(&self, source: &str, grammar: Grammar) -> Highlighted {
        let grammar = if source.len() > self.max_input_bytes && grammar != Grammar::Plain {
            warn!(
                "input is {} bytes (limit {}), rendering as plain text",
                source.len(),
                self.max_input_bytes
            );
            Grammar::Plain
        } else {
            grammar
        };

        debug!("highlighting {} bytes as {}", source.len(), grammar);
        let (markup, tokens) = self.run(grammar.rules(), source);
        Highlighted {
            grammar,
            markup,
            tokens,
        }
    }

    /// Highlight `source` with a caller-supplied rule list
    #[must_use]
    pub fn highlight_with_rules(&self, source: &str, rules: &[Rule]) -> String {
        self.run(rules, source).0
    }

    fn run(&self, rules: &[Rule], source: &str) -> (String, Vec<Token>) {
        let mut registry = Registry::new(self.class_prefix.as_str());
        let buffer = run_rules(rules, source, &mut registry);
        let markup = registry.restore(&escape_html(&buffer));
        (markup, registry.into_tokens())
    }
}
