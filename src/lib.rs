//! codetint - Rule-based syntax highlighting for code snippets in documentation
//!
//! This library turns a raw code sample and a grammar identifier into HTML
//! markup with `<span class="token-...">` wrappers, using an ordered,
//! placeholder-protected rule pipeline instead of a full lexer.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod detect;
pub mod highlight;
pub mod output;

pub use highlight::{Grammar, Highlighted, Highlighter, highlight_code};
