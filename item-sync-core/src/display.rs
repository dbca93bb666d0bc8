//! Rendering helpers for untrusted item names

use std::borrow::Cow;
use std::fmt::Write;

/// Whether a char must not reach a terminal as is
///
/// Covers control characters (ESC included) and the bidirectional formatting
/// marks, which reorder how the rest of a row is drawn.
fn needs_escape(c: char) -> bool {
    c.is_control()
        || matches!(
            c,
            '\u{061c}'
                | '\u{200e}'
                | '\u{200f}'
                | '\u{202a}'..='\u{202e}'
                | '\u{2066}'..='\u{2069}'
        )
}

/// Make a name safe to print as literal text on a terminal.
///
/// Control characters and bidi formatting marks are replaced by their
/// `\u{..}` escape so a name can never restyle, move or reorder the terminal
/// output. Everything else, markup included, is returned as is.
#[must_use]
pub fn literal_text(name: &str) -> Cow<'_, str> {
    if !name.chars().any(needs_escape) {
        return Cow::Borrowed(name);
    }
    let mut out = String::with_capacity(name.len() + 8);
    for c in name.chars() {
        if needs_escape(c) {
            let _ = write!(out, "\\u{{{:x}}}", u32::from(c));
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}

/// Escape a name for inclusion in HTML text or attribute content.
///
/// The terminal front-end does not need it; it is the counterpart of
/// [`literal_text`] for front-ends that render items as HTML.
#[must_use]
pub fn escape_html(name: &str) -> Cow<'_, str> {
    if !name.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(name);
    }
    let mut out = String::with_capacity(name.len() + 16);
    for c in name.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}
