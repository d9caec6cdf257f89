//! Per-call placeholder registry
//!
//! Every classified span is parked in the registry and replaced in the working
//! buffer by a placeholder id. Ids are the token's index wrapped in two Private
//! Use Area markers, so no rule can match inside one. A single restoration pass
//! at the end swaps every id for its rendered markup.

use log::trace;

use super::escape::{escape_html, numeric_reference};
use super::token::{CLOSE, OPEN, Piece, Token, TokenClass, pieces, placeholder_id};

/// Ordered list of minted tokens for one highlight call
#[derive(Debug, Clone)]
pub struct Registry {
    class_prefix: String,
    tokens: Vec<Token>,
}

impl Registry {
    /// Create an empty registry rendering spans as `class="{prefix}{class}"`
    #[must_use]
    pub fn new(class_prefix: impl Into<String>) -> Self {
        Self {
            class_prefix: class_prefix.into(),
            tokens: Vec::new(),
        }
    }

    /// Record a token and return its placeholder id
    pub fn mint(&mut self, class: Option<TokenClass>, text: String, markup: String) -> String {
        let id = placeholder_id(self.tokens.len());
        trace!("minted token {} ({:?}): {:?}", self.tokens.len(), class, text);
        self.tokens.push(Token {
            id: id.clone(),
            class,
            text,
            markup,
        });
        id
    }

    /// Render `text` as a span of `class`, record it, and return its id
    ///
    /// `text` comes from the working buffer and may enclose placeholders minted
    /// by earlier rules. Their markup is nested inside the new span and their
    /// original text is folded back into the new token's text.
    pub fn mint_span(&mut self, class: TokenClass, text: &str) -> String {
        let markup = format!(
            "<span class=\"{}{}\">{}</span>",
            self.class_prefix,
            class,
            self.render(text, true)
        );
        let original = self.original_text(text);
        self.mint(Some(class), original, markup)
    }

    /// Shield a reserved marker character found in the input
    pub fn shield(&mut self, c: char) -> String {
        self.mint(None, c.to_string(), numeric_reference(c))
    }

    /// Replace every placeholder in an already-escaped buffer with its markup
    ///
    /// One left-to-right scan; inserted markup is never rescanned.
    #[must_use]
    pub fn restore(&self, buffer: &str) -> String {
        self.render(buffer, false)
    }

    /// Tokens in creation order
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Consume the registry, returning its tokens
    #[must_use]
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// Number of minted tokens
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if nothing has been minted
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    fn render(&self, buffer: &str, escape_text: bool) -> String {
        let mut out = String::with_capacity(buffer.len());
        for piece in pieces(buffer) {
            match piece {
                Piece::Text(text) if escape_text => out.push_str(&escape_html(text)),
                Piece::Text(text) => out.push_str(text),
                Piece::Placeholder(index) => match self.tokens.get(index) {
                    Some(token) => out.push_str(&token.markup),
                    None => {
                        out.push_str(&numeric_reference(OPEN));
                        out.push_str(&index.to_string());
                        out.push_str(&numeric_reference(CLOSE));
                    },
                },
                Piece::Stray(c) => out.push_str(&numeric_reference(c)),
            }
        }
        out
    }

    fn original_text(&self, buffer: &str) -> String {
        let mut out = String::with_capacity(buffer.len());
        for piece in pieces(buffer) {
            match piece {
                Piece::Text(text) => out.push_str(text),
                Piece::Placeholder(index) => match self.tokens.get(index) {
                    Some(token) => out.push_str(&token.text),
                    None => out.push_str(&placeholder_id(index)),
                },
                Piece::Stray(c) => out.push(c),
            }
        }
        out
    }
}
