//! DOM Element
//!
//! One parsed tag instance. Tree links are handles into the owning
//! [`DomTree`](crate::DomTree); string fields are capacity-bounded.

use crate::{
    bounded, ColorAttr, ElementId, MAX_CHILDREN, MAX_CLASS_LEN, MAX_CONTENT_LEN, MAX_ID_LEN,
    MAX_TAG_LEN,
};

/// DOM element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    id: String,
    class_name: String,
    content: String,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub color: ColorAttr,
    pub visible: bool,
    pub(crate) parent: Option<ElementId>,
    pub(crate) children: Vec<ElementId>,
}

impl Element {
    /// Create a visible element with an empty box
    pub fn new(tag: &str) -> Self {
        Self {
            tag: bounded(tag, MAX_TAG_LEN),
            id: String::new(),
            class_name: String::new(),
            content: String::new(),
            x: 0,
            y: 0,
            width: 0,
            height: 1,
            color: ColorAttr::DEFAULT,
            visible: true,
            parent: None,
            children: Vec::new(),
        }
    }

    #[inline]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    #[inline]
    pub fn is(&self, tag: &str) -> bool {
        self.tag == tag
    }

    /// Id attribute; empty when unset
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn set_id(&mut self, id: &str) {
        self.id = bounded(id, MAX_ID_LEN);
    }

    /// Raw class attribute, not split into tokens
    #[inline]
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn set_class_name(&mut self, class: &str) {
        self.class_name = bounded(class, MAX_CLASS_LEN);
    }

    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Replace text content
    pub fn set_content(&mut self, text: &str) {
        self.content = bounded(text, MAX_CONTENT_LEN);
    }

    /// Append a text run; whatever does not fit is dropped
    pub fn append_content(&mut self, text: &str) {
        let room = MAX_CONTENT_LEN.saturating_sub(self.content.chars().count());
        self.content.push_str(&bounded(text, room));
    }

    /// Content if any, else the tag name
    pub fn display_text(&self) -> &str {
        if self.content.is_empty() {
            &self.tag
        } else {
            &self.content
        }
    }

    #[inline]
    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }

    #[inline]
    pub fn children(&self) -> &[ElementId] {
        &self.children
    }

    /// Whether the window-relative point lies inside this element's box
    ///
    /// Box edges saturate at the `i32` limits.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x
            && x < self.x.saturating_add(self.width)
            && y >= self.y
            && y < self.y.saturating_add(self.height)
    }

    pub(crate) fn push_child(&mut self, child: ElementId) -> bool {
        if self.children.len() >= MAX_CHILDREN {
            return false;
        }
        self.children.push(child);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_are_bounded() {
        let long = "x".repeat(300);
        let mut elem = Element::new(&long);
        elem.set_id(&long);
        elem.set_class_name(&long);
        elem.set_content(&long);

        assert_eq!(elem.tag().len(), MAX_TAG_LEN);
        assert_eq!(elem.id().len(), MAX_ID_LEN);
        assert_eq!(elem.class_name().len(), MAX_CLASS_LEN);
        assert_eq!(elem.content().len(), MAX_CONTENT_LEN);
    }

    #[test]
    fn test_append_content_stops_at_capacity() {
        let mut elem = Element::new("p");
        elem.append_content(&"a".repeat(250));
        elem.append_content("bcdefghij");
        assert_eq!(elem.content().len(), MAX_CONTENT_LEN);
        assert!(elem.content().ends_with("bcdef"));
    }

    #[test]
    fn test_display_text_falls_back_to_tag() {
        let mut elem = Element::new("div");
        assert_eq!(elem.display_text(), "div");
        elem.set_content("hello");
        assert_eq!(elem.display_text(), "hello");
    }

    #[test]
    fn test_contains_with_extreme_box() {
        let mut elem = Element::new("button");
        elem.x = 2;
        elem.y = 2;
        elem.width = i32::MAX;
        assert!(elem.contains(3, 2));
        assert!(elem.contains(i32::MAX - 1, 2));
        assert!(!elem.contains(1, 2));

        elem.height = i32::MAX;
        assert!(elem.contains(3, i32::MAX - 1));
        elem.width = i32::MIN;
        assert!(!elem.contains(3, 2));
    }

    #[test]
    fn test_contains() {
        let mut elem = Element::new("button");
        elem.x = 2;
        elem.y = 4;
        elem.width = 15;
        assert!(elem.contains(2, 4));
        assert!(elem.contains(16, 4));
        assert!(!elem.contains(17, 4));
        assert!(!elem.contains(2, 5));
        assert!(!elem.contains(1, 4));
    }
}
