//! DOM Tree (arena-based allocation)
//!
//! Elements live in one bounded vector addressed by [`ElementId`]. The
//! vector is cleared, never shrunk, on `reset`, and the document generation
//! moves forward so handles from the previous document go stale.

use crate::{Element, ElementId, MAX_ELEMENTS};

/// Arena-based DOM tree
#[derive(Debug)]
pub struct DomTree {
    elements: Vec<Element>,
    generation: u32,
}

impl DomTree {
    /// Create a new empty DOM tree
    pub fn new() -> Self {
        Self {
            elements: Vec::with_capacity(MAX_ELEMENTS),
            generation: 0,
        }
    }

    /// Drop every element and start a new document generation
    pub fn reset(&mut self) {
        self.elements.clear();
        self.generation = self.generation.wrapping_add(1);
    }

    /// Current document generation
    #[inline]
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Number of elements in the tree
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Whether the arena has reached [`MAX_ELEMENTS`]
    #[inline]
    pub fn is_full(&self) -> bool {
        self.elements.len() >= MAX_ELEMENTS
    }

    /// Append an element under `parent` (or at root level)
    ///
    /// Returns `None` without touching the tree when the arena is full. A
    /// parent whose child list is full still becomes the new element's
    /// parent; the element is just not recorded among its children.
    pub fn insert(&mut self, mut element: Element, parent: Option<ElementId>) -> Option<ElementId> {
        if self.is_full() {
            tracing::warn!("Element arena full, dropping <{}>", element.tag());
            return None;
        }

        let id = ElementId {
            index: self.elements.len() as u32,
            generation: self.generation,
        };
        let parent = parent.filter(|p| self.get(*p).is_some());
        element.parent = parent;

        if let Some(parent_elem) = parent.and_then(|p| self.get_mut(p)) {
            if !parent_elem.push_child(id) {
                tracing::warn!(
                    "Child list of <{}> full, <{}> not linked",
                    parent_elem.tag(),
                    element.tag()
                );
            }
        }

        self.elements.push(element);
        Some(id)
    }

    /// Get an element by handle
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        if id.generation != self.generation {
            return None;
        }
        self.elements.get(id.index())
    }

    /// Get a mutable element by handle
    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        if id.generation != self.generation {
            return None;
        }
        self.elements.get_mut(id.index())
    }

    /// Handle for the element at a creation-order position
    pub fn id_at(&self, index: usize) -> Option<ElementId> {
        (index < self.elements.len()).then(|| ElementId {
            index: index as u32,
            generation: self.generation,
        })
    }

    /// Iterate elements in creation order
    pub fn iter(&self) -> impl Iterator<Item = (ElementId, &Element)> {
        let generation = self.generation;
        self.elements.iter().enumerate().map(move |(i, elem)| {
            (
                ElementId {
                    index: i as u32,
                    generation,
                },
                elem,
            )
        })
    }

    /// Iterate elements mutably in creation order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Element> {
        self.elements.iter_mut()
    }

    /// First element whose id equals `id`
    pub fn find_by_id(&self, id: &str) -> Option<ElementId> {
        if id.is_empty() {
            return None;
        }
        self.iter().find(|(_, e)| e.id() == id).map(|(id, _)| id)
    }

    /// First element with the given tag
    pub fn find_by_tag(&self, tag: &str) -> Option<ElementId> {
        self.iter().find(|(_, e)| e.is(tag)).map(|(id, _)| id)
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Creation-order access for passes that walk `0..len()`
///
/// # Panics
///
/// Panics if `index >= len()`. Hosts holding an [`ElementId`] should use
/// [`DomTree::get`], which never panics.
impl std::ops::Index<usize> for DomTree {
    type Output = Element;

    fn index(&self, index: usize) -> &Element {
        &self.elements[index]
    }
}

/// # Panics
///
/// Panics if `index >= len()`.
impl std::ops::IndexMut<usize> for DomTree {
    fn index_mut(&mut self, index: usize) -> &mut Element {
        &mut self.elements[index]
    }
}
