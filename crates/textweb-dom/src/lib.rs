//! textweb DOM - Document Object Model
//!
//! Fixed-capacity element arena. Array position doubles as creation order
//! and document order, so parents always sit at a smaller index than their
//! children.

mod color;
mod node;
mod text;
mod tree;

pub use color::{ColorAttr, Palette};
pub use node::Element;
pub use text::{bounded, is_space, parse_int, trim};
pub use tree::DomTree;

/// Maximum number of live elements per document
pub const MAX_ELEMENTS: usize = 200;
/// Maximum number of children recorded per element
pub const MAX_CHILDREN: usize = 10;
/// Maximum tag name length (chars)
pub const MAX_TAG_LEN: usize = 31;
/// Maximum id length (chars)
pub const MAX_ID_LEN: usize = 63;
/// Maximum class attribute length (chars)
pub const MAX_CLASS_LEN: usize = 63;
/// Maximum accumulated text content (chars)
pub const MAX_CONTENT_LEN: usize = 255;

/// Generation-checked element handle
///
/// The generation is the document generation of the tree that issued the
/// handle; after a `reset` the tree moves to a new generation and old
/// handles stop resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId {
    pub index: u32,
    pub generation: u32,
}

impl ElementId {
    /// Position in creation order
    #[inline]
    pub fn index(self) -> usize {
        self.index as usize
    }
}
