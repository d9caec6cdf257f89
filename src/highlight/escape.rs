//! HTML entity escaping

use std::borrow::Cow;

/// Escape `&`, `<` and `>` as HTML entities
///
/// Runs as a single character scan, so an `&` introduced by one substitution is
/// never escaped a second time. Text without any of the three characters is
/// returned borrowed.
#[must_use]
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>']) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + text.len() / 4);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Hexadecimal numeric character reference for a character (`&#xE000;`)
#[must_use]
pub fn numeric_reference(c: char) -> String {
    format!("&#x{:X};", u32::from(c))
}
