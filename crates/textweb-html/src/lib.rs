//! textweb HTML Parser
//!
//! Single-pass markup scanner building a bounded element tree. No error
//! recovery beyond "keep what has been built": an unterminated tag ends the
//! parse and the partial tree stands.

mod attributes;
mod defaults;
mod parser;

pub use attributes::apply_attributes;
pub use defaults::TagDefaults;
pub use parser::{HtmlParser, MAX_NESTING};

use textweb_dom::DomTree;

/// Tags that never take children or a closing tag
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Whether `tag` is a void element
pub fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

/// Parse markup into a fresh tree
pub fn parse(html: &str) -> DomTree {
    let mut tree = DomTree::new();
    HtmlParser::new().parse_into(&mut tree, html);
    tree
}
