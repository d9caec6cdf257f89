//! Grammar table
//!
//! Each grammar is a fixed, ordered rule list. Order encodes precedence:
//! literals and comments first so nothing inside them is reclassified, then
//! directives, block introducers, keywords, numbers and call sites.

use std::str::FromStr;
use std::sync::LazyLock;

use serde::Serialize;
use thiserror::Error;

use super::rule::{Guard, Rule};
use super::token::{OPEN, TokenClass};

/// Error returned when parsing an unknown grammar name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown grammar: {0}")]
pub struct ParseGrammarError(pub String);

/// Supported grammars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Grammar {
    /// C-like scripting language
    Script,
    /// Declarative component description language
    Component,
    /// Shell command language
    Shell,
    /// Unknown language: escape only
    Plain,
}

impl Grammar {
    /// Every grammar, in display order
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Script, Self::Component, Self::Shell, Self::Plain]
    }

    /// Canonical name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Script => "script",
            Self::Component => "component",
            Self::Shell => "shell",
            Self::Plain => "plain",
        }
    }

    /// Identifiers that select this grammar (canonical name first)
    #[must_use]
    pub const fn identifiers(self) -> &'static [&'static str] {
        match self {
            Self::Script => &[
                "script",
                "js",
                "javascript",
                "mjs",
                "cjs",
                "jsx",
                "ts",
                "typescript",
                "tsx",
            ],
            Self::Component => &["component", "qml"],
            Self::Shell => &["shell", "sh", "bash", "zsh", "console", "shell-session"],
            Self::Plain => &["plain", "text", "unknown"],
        }
    }

    /// Resolve an identifier, falling back to [`Grammar::Plain`]
    ///
    /// Matching ignores case and surrounding whitespace.
    #[must_use]
    pub fn from_identifier(identifier: &str) -> Self {
        identifier.parse().unwrap_or(Self::Plain)
    }

    /// Ordered rules of this grammar
    ///
    /// # Panics
    ///
    /// Panics on first use if a built-in pattern fails to compile, which the
    /// grammar tests rule out.
    #[must_use]
    pub fn rules(self) -> &'static [Rule] {
        match self {
            Self::Script => SCRIPT.as_slice(),
            Self::Component => COMPONENT.as_slice(),
            Self::Shell => SHELL.as_slice(),
            Self::Plain => &[],
        }
    }
}

impl FromStr for Grammar {
    type Err = ParseGrammarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::all()
            .into_iter()
            .find(|g| g.identifiers().contains(&wanted.as_str()))
            .ok_or_else(|| ParseGrammarError(s.to_string()))
    }
}

impl std::fmt::Display for Grammar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Uncompiled rule
struct RuleSpec {
    name: &'static str,
    pattern: &'static str,
    class: TokenClass,
    guard: Guard,
}

const fn spec(name: &'static str, pattern: &'static str, class: TokenClass) -> RuleSpec {
    RuleSpec {
        name,
        pattern,
        class,
        guard: Guard::Always,
    }
}

const fn guarded(
    name: &'static str,
    pattern: &'static str,
    class: TokenClass,
    guard: Guard,
) -> RuleSpec {
    RuleSpec {
        name,
        pattern,
        class,
        guard,
    }
}

fn compile(specs: &[RuleSpec]) -> Vec<Rule> {
    specs
        .iter()
        .map(|s| match Rule::new(s.name, s.pattern, s.class) {
            Ok(rule) => rule.with_guard(s.guard),
            Err(e) => panic!("built-in rule `{}` does not compile: {e}", s.name),
        })
        .collect()
}

// Shared patterns

const LINE_COMMENT: &str = r"//[^\r\n]*";
const BLOCK_COMMENT: &str = r"/\*[\s\S]*?\*/";
const ANNOTATION: &str = r"@[A-Za-z_]\w*";
const NUMBER: &str = r"\b(?:0[xX][0-9a-fA-F]+|[0-9]+(?:\.[0-9]+)?(?:[eE][+-]?[0-9]+)?)\b";
const CALL_SITE: &str = r"\b(?P<tok>[A-Za-z_]\w*)\(";

// Script

const SCRIPT_RULES: &[RuleSpec] = &[
    spec(
        "string",
        r#""(?:[^"\\\n]|\\[\s\S])*"|'(?:[^'\\\n]|\\[\s\S])*'|`(?:[^`\\]|\\[\s\S])*`"#,
        TokenClass::String,
    ),
    spec("line-comment", LINE_COMMENT, TokenClass::Comment),
    spec("block-comment", BLOCK_COMMENT, TokenClass::Comment),
    spec("shebang", r"\A#![^\r\n]*", TokenClass::Directive),
    spec("decorator", ANNOTATION, TokenClass::Directive),
    spec(
        "block-keyword",
        r"\b(?P<tok>else|try|finally|do)\s*\{",
        TokenClass::Keyword,
    ),
    spec(
        "keyword",
        r"\b(?:async|await|break|case|catch|class|const|continue|debugger|default|delete|do|else|export|extends|false|finally|for|from|function|if|import|in|instanceof|let|new|null|of|return|static|super|switch|this|throw|true|try|typeof|undefined|var|void|while|with|yield)\b",
        TokenClass::Keyword,
    ),
    guarded("number", NUMBER, TokenClass::Number, Guard::NotAfter(OPEN)),
    spec("call-site", CALL_SITE, TokenClass::Function),
];

// Component

const COMPONENT_RULES: &[RuleSpec] = &[
    spec(
        "string",
        r#""(?:[^"\\\n]|\\[\s\S])*"|'(?:[^'\\\n]|\\[\s\S])*'"#,
        TokenClass::String,
    ),
    spec("line-comment", LINE_COMMENT, TokenClass::Comment),
    spec("block-comment", BLOCK_COMMENT, TokenClass::Comment),
    spec(
        "import",
        r"(?m)^[ \t]*(?P<tok>import|pragma)\b",
        TokenClass::Directive,
    ),
    spec("annotation", ANNOTATION, TokenClass::Directive),
    spec(
        "element",
        r"\b(?P<tok>(?:[a-z_]\w*\.)*[A-Z]\w*)\s*\{",
        TokenClass::Type,
    ),
    spec(
        "keyword",
        r"\b(?:alias|component|const|default|else|enum|false|function|if|inline|let|null|on|parent|property|readonly|required|return|signal|true|var)\b",
        TokenClass::Keyword,
    ),
    spec(
        "property",
        r"(?m)(?:^|[{;])[ \t]*(?:[^\s?:{};,()]+[ \t]+)*(?P<tok>[a-z_]\w*(?:\.[a-z_]\w*)*)[ \t]*:",
        TokenClass::Property,
    ),
    guarded("number", NUMBER, TokenClass::Number, Guard::NotAfter(OPEN)),
    spec("call-site", CALL_SITE, TokenClass::Function),
];

// Shell

const SHELL_RULES: &[RuleSpec] = &[
    spec(
        "comment",
        r"(?m)(?:^|[ \t])(?P<tok>#[^\r\n]*)",
        TokenClass::Comment,
    ),
    spec(
        "command",
        r"(?m)^[ \t]*(?:\$[ \t]+)?(?P<tok>[A-Za-z_./~][\w./~+-]*)",
        TokenClass::Command,
    ),
    spec(
        "flag",
        r"(?m)(?:^|[ \t])(?P<tok>--?[A-Za-z0-9][\w-]*=?)",
        TokenClass::Flag,
    ),
];

static SCRIPT: LazyLock<Vec<Rule>> = LazyLock::new(|| compile(SCRIPT_RULES));
static COMPONENT: LazyLock<Vec<Rule>> = LazyLock::new(|| compile(COMPONENT_RULES));
static SHELL: LazyLock<Vec<Rule>> = LazyLock::new(|| compile(SHELL_RULES));
