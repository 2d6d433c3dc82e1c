//! textweb CSS Parser & Style System
//!
//! Stylesheet and inline-style parsing into flat declarations, simple
//! selector matching, and a cascade that applies declarations in source
//! order with the last one applied winning.

mod cascade;
mod parser;
pub mod properties;
mod selectors;

pub use cascade::StyleResolver;
pub use parser::{apply_inline, parse_inline, CssParser};
pub use properties::{apply_property, parse_color, PropertyId};
pub use selectors::{matches, Selector};

use textweb_dom::bounded;

/// Maximum declarations per stylesheet
pub const MAX_DECLARATIONS: usize = 100;
/// Maximum selector length (chars)
pub const MAX_SELECTOR_LEN: usize = 63;
/// Maximum property name length (chars)
pub const MAX_PROPERTY_LEN: usize = 31;
/// Maximum property value length (chars)
pub const MAX_VALUE_LEN: usize = 63;

/// Parse a stylesheet into a fresh [`Stylesheet`]
pub fn parse_stylesheet(css: &str) -> Stylesheet {
    let mut sheet = Stylesheet::new();
    CssParser::new().parse(css, &mut sheet);
    sheet
}

/// One selector-scoped property/value pair
///
/// A rule block with N declarations yields N of these sharing the same
/// selector text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleDeclaration {
    pub selector: String,
    pub property: String,
    pub value: String,
}

impl StyleDeclaration {
    /// Build a declaration, truncating each field to its capacity
    pub fn new(selector: &str, property: &str, value: &str) -> Self {
        Self {
            selector: bounded(selector, MAX_SELECTOR_LEN),
            property: bounded(property, MAX_PROPERTY_LEN),
            value: bounded(value, MAX_VALUE_LEN),
        }
    }
}

/// Bounded, ordered list of declarations
#[derive(Debug, Default)]
pub struct Stylesheet {
    declarations: Vec<StyleDeclaration>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self {
            declarations: Vec::with_capacity(MAX_DECLARATIONS),
        }
    }

    /// Append a declaration; `false` once [`MAX_DECLARATIONS`] is reached
    pub fn push(&mut self, declaration: StyleDeclaration) -> bool {
        if self.is_full() {
            tracing::warn!(
                "Stylesheet full, dropping {} {{ {} }}",
                declaration.selector,
                declaration.property
            );
            return false;
        }
        self.declarations.push(declaration);
        true
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.declarations.len() >= MAX_DECLARATIONS
    }

    /// Declarations in source order
    pub fn iter(&self) -> impl Iterator<Item = &StyleDeclaration> {
        self.declarations.iter()
    }

    pub fn clear(&mut self) {
        self.declarations.clear();
    }
}
