//! HTML Parser implementation
//!
//! Scans left to right. `<...>` spans become open, close, or skipped
//! comment/declaration tags; everything else is a text run appended to the
//! element currently open. Open elements are tracked on an explicit bounded
//! stack rather than by recursion.

use textweb_dom::{is_space, trim, DomTree, ElementId};

use crate::{apply_attributes, is_void_element, TagDefaults};

/// Maximum depth of the open-element stack
pub const MAX_NESTING: usize = 50;

/// Open-element stack; saturates instead of growing past [`MAX_NESTING`]
#[derive(Debug)]
struct NestingStack {
    open: Vec<ElementId>,
}

impl NestingStack {
    fn new() -> Self {
        Self {
            open: Vec::with_capacity(MAX_NESTING),
        }
    }

    fn push(&mut self, id: ElementId) -> bool {
        if self.open.len() >= MAX_NESTING {
            return false;
        }
        self.open.push(id);
        true
    }

    fn pop(&mut self) {
        self.open.pop();
    }

    /// Current parent for new elements and text
    fn current(&self) -> Option<ElementId> {
        self.open.last().copied()
    }
}

/// HTML parser
pub struct HtmlParser;

impl HtmlParser {
    /// Create a new HTML parser
    pub fn new() -> Self {
        Self
    }

    /// Parse markup, appending elements to `tree`
    ///
    /// Always returns `true`. A `<` with no matching `>` ends the parse and
    /// the tree built so far is kept; so does filling the element arena.
    pub fn parse_into(&self, tree: &mut DomTree, html: &str) -> bool {
        let start_len = tree.len();
        let mut stack = NestingStack::new();
        let mut rest = html;

        while !rest.is_empty() && !tree.is_full() {
            if let Some(after) = rest.strip_prefix('<') {
                let Some(close) = after.find('>') else {
                    tracing::debug!("Unterminated tag, keeping partial document");
                    break;
                };
                let tag_text = trim(&after[..close]);
                rest = &after[close + 1..];

                if tag_text.starts_with('/') {
                    stack.pop();
                } else if tag_text.starts_with('!') || tag_text.starts_with('?') {
                    tracing::trace!("Skipping <{}>", tag_text);
                } else {
                    self.open_tag(tree, tag_text, &mut stack);
                }
            } else {
                let end = rest.find('<').unwrap_or(rest.len());
                let text = trim(&rest[..end]);
                rest = &rest[end..];

                if text.is_empty() {
                    continue;
                }
                match stack.current().and_then(|id| tree.get_mut(id)) {
                    Some(parent) => parent.append_content(text),
                    None => tracing::trace!("Discarding root-level text"),
                }
            }
        }

        tracing::debug!(
            "Parsed {} elements ({} total)",
            tree.len() - start_len,
            tree.len()
        );
        true
    }

    /// Create the element for an opening or self-closing tag
    fn open_tag(&self, tree: &mut DomTree, tag_text: &str, stack: &mut NestingStack) {
        let (tag_text, self_closing) = match tag_text.strip_suffix('/') {
            Some(inner) => (trim(inner), true),
            None => (tag_text, false),
        };
        if tag_text.is_empty() {
            return;
        }

        let (name, attrs) = match tag_text.find(is_space) {
            Some(split) => tag_text.split_at(split),
            None => (tag_text, ""),
        };

        let mut element = TagDefaults::element(name);
        apply_attributes(attrs, &mut element);

        let Some(id) = tree.insert(element, stack.current()) else {
            return;
        };

        if self_closing || is_void_element(name) {
            return;
        }
        if !stack.push(id) {
            tracing::warn!("Nesting deeper than {}, <{}> not opened", MAX_NESTING, name);
        }
    }
}

impl Default for HtmlParser {
    fn default() -> Self {
        Self::new()
    }
}
