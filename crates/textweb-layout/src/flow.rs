//! Flow layout
//!
//! Root elements stack vertically from the top margin. Children are placed
//! just below their parent: list items one row per position in creation
//! order, every other child on the same row as its siblings.

use textweb_dom::DomTree;

use crate::{BOTTOM_ROW, CHILD_INDENT, LEFT_MARGIN, LIST_INDENT, RIGHT_EDGE, TOP_MARGIN};

/// Blank rows left after a root element
pub fn spacing_after(tag: &str) -> i32 {
    match tag {
        "h1" => 2,
        "h2" | "h3" | "p" | "div" | "ul" | "ol" => 1,
        _ => 0,
    }
}

/// Assign position (and clamp width/visibility) for every element
pub fn compute_layout(tree: &mut DomTree) {
    let mut cursor_y = TOP_MARGIN;
    let mut hidden = 0;

    for index in 0..tree.len() {
        let parent = tree[index].parent();
        match parent {
            None => {
                let element = &mut tree[index];
                element.x = LEFT_MARGIN;
                element.y = cursor_y;
                cursor_y = cursor_y
                    .saturating_add(element.height)
                    .saturating_add(spacing_after(element.tag()));
            }
            Some(parent) => {
                let parent_index = parent.index();
                let (px, py, ph) = {
                    let p = &tree[parent_index];
                    (p.x, p.y, p.height)
                };
                let element = &mut tree[index];
                let below = py.saturating_add(ph);
                if element.is("li") {
                    // Assumes items directly follow their list in creation order
                    element.x = px.saturating_add(LIST_INDENT);
                    element.y = below.saturating_add((index - parent_index - 1) as i32);
                } else {
                    element.x = px.saturating_add(CHILD_INDENT);
                    element.y = below.saturating_add(1);
                }
            }
        }

        let element = &mut tree[index];
        if element.x.saturating_add(element.width) > RIGHT_EDGE {
            element.width = RIGHT_EDGE.saturating_sub(element.x).max(0);
        }
        if element.y > BOTTOM_ROW {
            element.visible = false;
            hidden += 1;
        }
    }

    tracing::debug!("Laid out {} elements, {} off-screen", tree.len(), hidden);
}
