//! Log sanitization utilities
//!
//! Item names and response bodies come from the remote side and are untrusted.
//! Keep them from flooding the log or smuggling line breaks and terminal
//! escape sequences into it.

/// Maximum number of bytes of a response body included in a log line.
const TRUNCATE_LIMIT: usize = 256;

/// Maximum number of characters of a single value (e.g. an item name) in a log line.
const VALUE_LIMIT: usize = 64;

/// Largest char boundary not greater than `index`.
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Truncate a string for safe logging.
///
/// Returns the original string if it's within the limit, otherwise the first
/// `TRUNCATE_LIMIT` bytes (on a char boundary) with a suffix giving the total
/// length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

/// Make a single untrusted value safe to embed in one log line.
///
/// Control characters (newlines, ESC, ...) are replaced by their escaped form
/// and the result is capped at `VALUE_LIMIT` characters.
pub fn sanitize_for_log(value: &str) -> String {
    let mut out = String::with_capacity(value.len().min(VALUE_LIMIT));
    for (count, c) in value.chars().enumerate() {
        if count == VALUE_LIMIT {
            out.push('…');
            break;
        }
        if c.is_control() {
            out.extend(c.escape_default());
        } else {
            out.push(c);
        }
    }
    out
}
