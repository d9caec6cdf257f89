//! Token types and the placeholder id format

use serde::Serialize;

/// Opening marker of a placeholder id (Private Use Area)
pub const OPEN: char = '\u{E000}';

/// Closing marker of a placeholder id (Private Use Area)
pub const CLOSE: char = '\u{E001}';

/// Check whether a character is one of the placeholder markers
#[must_use]
pub const fn is_marker(c: char) -> bool {
    c == OPEN || c == CLOSE
}

/// Placeholder id for the token at `index` in a registry
///
/// The closing marker makes ids self-delimiting: `\u{E000}1\u{E001}` is not a
/// prefix of `\u{E000}12\u{E001}`.
#[must_use]
pub fn placeholder_id(index: usize) -> String {
    format!("{OPEN}{index}{CLOSE}")
}

/// Classification of a highlighted span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenClass {
    /// Quoted literal
    String,
    /// Line or block comment
    Comment,
    /// Directive, annotation, decorator or shebang
    Directive,
    /// Reserved word
    Keyword,
    /// Type or element name
    Type,
    /// Property binding name
    Property,
    /// Numeric literal
    Number,
    /// Call site of a function
    Function,
    /// Shell command name
    Command,
    /// Shell flag
    Flag,
}

impl TokenClass {
    /// Class name as used in markup (without prefix)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Comment => "comment",
            Self::Directive => "directive",
            Self::Keyword => "keyword",
            Self::Type => "type",
            Self::Property => "property",
            Self::Number => "number",
            Self::Function => "function",
            Self::Command => "command",
            Self::Flag => "flag",
        }
    }
}

impl std::fmt::Display for TokenClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A committed classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// Placeholder id standing in for this token while rules run
    #[serde(skip)]
    pub id: String,
    /// Class of the token (`None` for shielded marker characters)
    pub class: Option<TokenClass>,
    /// Original source text covered by the token
    pub text: String,
    /// Rendered markup
    #[serde(skip)]
    pub markup: String,
}

/// A piece of a placeholder-bearing buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Piece<'a> {
    /// Text containing no marker characters
    Text(&'a str),
    /// A well-formed placeholder id and its index
    Placeholder(usize),
    /// A marker character that does not start a well-formed id
    Stray(char),
}

/// Split a buffer into text runs and placeholder ids
pub(crate) const fn pieces(buffer: &str) -> Pieces<'_> {
    Pieces { rest: buffer }
}

/// Iterator returned by [`pieces`]
#[derive(Debug, Clone)]
pub(crate) struct Pieces<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Pieces<'a> {
    type Item = Piece<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        match self.rest.find(is_marker) {
            Some(0) => {
                let marker = self.rest.chars().next()?;
                let after = &self.rest[marker.len_utf8()..];
                if marker == OPEN {
                    if let Some((index, consumed)) = parse_id_body(after) {
                        self.rest = &after[consumed..];
                        return Some(Piece::Placeholder(index));
                    }
                }
                self.rest = after;
                Some(Piece::Stray(marker))
            },
            Some(pos) => {
                let (text, rest) = self.rest.split_at(pos);
                self.rest = rest;
                Some(Piece::Text(text))
            },
            None => {
                let text = self.rest;
                self.rest = "";
                Some(Piece::Text(text))
            },
        }
    }
}

/// Parse `<digits><CLOSE>`, returning the index and the bytes consumed
fn parse_id_body(s: &str) -> Option<(usize, usize)> {
    let digits = s.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let index = s[..digits].parse().ok()?;
    s[digits..].starts_with(CLOSE).then_some((index, digits + CLOSE.len_utf8()))
}
