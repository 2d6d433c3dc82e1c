//! CSS Parser
//!
//! Hand-written scanner for the small CSS subset the text grid understands:
//! `selector { property: value; ... }` blocks and `/* */` comments. Every
//! pair in a block becomes its own [`StyleDeclaration`].

use textweb_dom::{bounded, is_space, trim, Element};

use crate::properties::apply_property;
use crate::{StyleDeclaration, Stylesheet, MAX_PROPERTY_LEN, MAX_VALUE_LEN};

/// CSS Parser
pub struct CssParser;

impl CssParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a stylesheet, appending declarations to `sheet`
    ///
    /// Never fails: a block whose next pair has no `:` before `}` ends at
    /// that point, a selector with no `{` ends the sheet, and parsing stops
    /// once the sheet is full.
    pub fn parse(&self, css: &str, sheet: &mut Stylesheet) -> bool {
        let start_len = sheet.len();
        let mut rest = css;

        while !sheet.is_full() {
            rest = rest.trim_start_matches(is_space);
            if rest.is_empty() {
                break;
            }

            if let Some(after) = rest.strip_prefix("/*") {
                rest = match after.find("*/") {
                    Some(end) => &after[end + 2..],
                    None => "",
                };
                continue;
            }

            let Some(open) = rest.find('{') else {
                break;
            };
            let selector = trim(&rest[..open]);
            rest = &rest[open + 1..];
            rest = self.parse_block(selector, rest, sheet);

            if let Some(after) = rest.strip_prefix('}') {
                rest = after;
            }
        }

        tracing::debug!(
            "Parsed {} declarations ({} total)",
            sheet.len() - start_len,
            sheet.len()
        );
        true
    }

    /// Parse `property: value` pairs up to `}`; returns the unconsumed input
    fn parse_block<'a>(&self, selector: &str, mut rest: &'a str, sheet: &mut Stylesheet) -> &'a str {
        loop {
            rest = rest.trim_start_matches(is_space);
            if rest.is_empty() || rest.starts_with('}') {
                return rest;
            }

            let colon = match rest.find([':', '}']) {
                Some(pos) if rest.as_bytes()[pos] == b':' => pos,
                Some(pos) => {
                    tracing::trace!("Malformed block for {}, skipping rest", selector);
                    return &rest[pos..];
                }
                None => return "",
            };
            let property = trim(&rest[..colon]);
            rest = &rest[colon + 1..];

            let end = rest.find([';', '}']).unwrap_or(rest.len());
            let value = trim(&rest[..end]);
            rest = &rest[end..];
            if let Some(after) = rest.strip_prefix(';') {
                rest = after;
            }

            if !sheet.push(StyleDeclaration::new(selector, property, value)) {
                return rest;
            }
        }
    }
}

impl Default for CssParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse an inline `style` attribute into `(property, value)` pairs
pub fn parse_inline(style: &str) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    let mut rest = style;

    loop {
        rest = rest.trim_start_matches(is_space);
        let Some(colon) = rest.find(':') else {
            break;
        };
        let property = bounded(trim(&rest[..colon]), MAX_PROPERTY_LEN);
        rest = &rest[colon + 1..];

        let end = rest.find(';').unwrap_or(rest.len());
        let value = bounded(trim(&rest[..end]), MAX_VALUE_LEN);
        rest = &rest[end..];
        if let Some(after) = rest.strip_prefix(';') {
            rest = after;
        }

        pairs.push((property, value));
    }

    pairs
}

/// Parse an inline `style` attribute and apply it to `element` immediately
pub fn apply_inline(style: &str, element: &mut Element) {
    for (property, value) in parse_inline(style) {
        apply_property(element, &property, &value);
    }
}
