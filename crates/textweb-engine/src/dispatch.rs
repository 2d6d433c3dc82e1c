//! Event Dispatcher
//!
//! Maps a window-relative click to at most one element, and a clicked
//! button to the name of the script stub that handles it.

use textweb_dom::{DomTree, Element, ElementId};

/// First visible element, in creation order, whose box contains the point
///
/// Containers are created before their children, so a click on a child
/// inside a container's box resolves to the container.
pub fn hit_test(tree: &DomTree, x: i32, y: i32) -> Option<ElementId> {
    tree.iter()
        .find(|(_, element)| element.visible && element.contains(x, y))
        .map(|(id, _)| id)
}

/// Handler stub name for a clicked element, `None` unless it is a button
pub fn handler_name(element: &Element) -> Option<String> {
    if !element.is("button") {
        return None;
    }
    Some(if element.id().is_empty() {
        "button_click".to_string()
    } else {
        format!("{}_click", element.id())
    })
}
