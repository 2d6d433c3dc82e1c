//! Bounded text helpers
//!
//! Every string field in the arena has a fixed capacity. Writes past it are
//! truncated silently, on a char boundary.

/// Whitespace as the markup, style and script scanners see it
#[inline]
pub fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Trim scanner whitespace from both ends
#[inline]
pub fn trim(s: &str) -> &str {
    s.trim_matches(is_space)
}

/// Copy at most `max` chars of `s`
pub fn bounded(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((cut, _)) => s[..cut].to_string(),
        None => s.to_string(),
    }
}

/// Signed decimal prefix parse
///
/// Accepts an optional sign followed by leading digits; parsing stops at the
/// first non-digit. No digits yields 0. Overflow wraps like the fixed-width
/// integers the box fields are.
pub fn parse_int(s: &str) -> i32 {
    let mut chars = s.chars().peekable();
    let sign = match chars.peek() {
        Some('-') => {
            chars.next();
            -1
        }
        Some('+') => {
            chars.next();
            1
        }
        _ => 1,
    };

    let mut value: i32 = 0;
    for c in chars {
        match c.to_digit(10) {
            Some(d) => value = value.wrapping_mul(10).wrapping_add(d as i32),
            None => break,
        }
    }
    value.wrapping_mul(sign)
}
