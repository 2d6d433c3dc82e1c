//! Attribute parsing
//!
//! Recognizes `id`, `class`, `style`, `width` and `height`. Everything else,
//! including names with no `=value`, is consumed and ignored.

use textweb_css::apply_inline;
use textweb_dom::{is_space, parse_int, Element};

/// Parse the attribute text that follows a tag name and apply it
pub fn apply_attributes(attrs: &str, element: &mut Element) {
    let mut rest = attrs;

    loop {
        rest = rest.trim_start_matches(is_space);
        if rest.is_empty() {
            break;
        }

        let name_end = rest
            .find(|c: char| c == '=' || is_space(c))
            .unwrap_or(rest.len());
        let name = &rest[..name_end];
        rest = &rest[name_end..];

        let Some(after_eq) = rest.strip_prefix('=') else {
            tracing::trace!("Attribute {} has no value", name);
            continue;
        };
        rest = after_eq.trim_start_matches(is_space);

        let (value, after) = split_value(rest);
        rest = after;

        match name {
            "id" => element.set_id(value),
            "class" => element.set_class_name(value),
            "style" => apply_inline(value, element),
            "width" => element.width = parse_int(value),
            "height" => element.height = parse_int(value),
            _ => tracing::trace!("Ignoring attribute {}", name),
        }
    }
}

/// Split a quoted or bare value off the front of `s`
fn split_value(s: &str) -> (&str, &str) {
    match s.chars().next() {
        Some(quote @ ('"' | '\'')) => {
            let inner = &s[1..];
            match inner.find(quote) {
                Some(end) => (&inner[..end], &inner[end + 1..]),
                None => (inner, ""),
            }
        }
        _ => {
            let end = s.find(is_space).unwrap_or(s.len());
            (&s[..end], &s[end..])
        }
    }
}
