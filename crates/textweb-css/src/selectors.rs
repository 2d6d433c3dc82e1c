//! Simple selector matching
//!
//! Three forms: `#id`, `.class` and a bare tag name. A compound selector
//! such as `div p` is matched by its first token alone; ancestry is never
//! consulted.

use textweb_dom::{is_space, Element};

/// Parsed selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// `#x` - exact id equality
    Id(String),
    /// `.x` - substring of the raw class attribute
    Class(String),
    /// Bare tag name (first token only)
    Tag(String),
}

impl Selector {
    /// Parse selector text as stored on a declaration
    pub fn parse(text: &str) -> Self {
        if let Some(id) = text.strip_prefix('#') {
            Self::Id(id.to_string())
        } else if let Some(class) = text.strip_prefix('.') {
            Self::Class(class.to_string())
        } else {
            let tag = text.split(is_space).next().unwrap_or_default();
            Self::Tag(tag.to_string())
        }
    }

    pub fn matches(&self, element: &Element) -> bool {
        match self {
            Self::Id(id) => element.id() == id,
            // Substring on purpose: ".foo" matches class "foobar"
            Self::Class(class) => element.class_name().contains(class.as_str()),
            Self::Tag(tag) => element.tag() == tag,
        }
    }
}

/// Match an element against selector text
pub fn matches(element: &Element, selector: &str) -> bool {
    Selector::parse(selector).matches(element)
}
