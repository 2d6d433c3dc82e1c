//! Painter - writes elements into a surface

use textweb_dom::{ColorAttr, DomTree, Element};

use crate::{Surface, Window};

/// Paints a laid-out tree into a window of a surface
pub struct Painter;

impl Painter {
    /// Draw every visible element, in creation order
    ///
    /// Later elements overwrite earlier ones where they overlap. Nothing is
    /// cleared first; the caller decides what the background looks like.
    pub fn render(tree: &DomTree, window: &Window, surface: &mut impl Surface) {
        let mut painted = 0;
        for (_, element) in tree.iter().filter(|(_, e)| e.visible) {
            Self::render_element(element, window, surface);
            painted += 1;
        }
        tracing::debug!("Painted {} of {} elements", painted, tree.len());
    }

    fn render_element(element: &Element, window: &Window, surface: &mut impl Surface) {
        let mut pen = Pen {
            col: window.x.saturating_add(element.x),
            row: window.y.saturating_add(element.y),
            offset: 0,
            attr: element.color,
            window,
        };

        let prefix = if element.is("li") {
            "• "
        } else if element.is("button") {
            "["
        } else {
            ""
        };

        for ch in prefix.chars() {
            if pen.offset >= element.width {
                break;
            }
            pen.write(surface, ch);
        }

        let right_edge = window.right();
        for ch in element.display_text().chars() {
            if pen.offset >= element.width || pen.col.saturating_add(pen.offset) >= right_edge {
                break;
            }
            pen.write(surface, ch);
        }

        if element.is("button") && pen.offset < element.width {
            pen.write(surface, ']');
        }
    }
}

/// Write cursor for one element's row
struct Pen<'a> {
    col: i32,
    row: i32,
    offset: i32,
    attr: ColorAttr,
    window: &'a Window,
}

impl Pen<'_> {
    /// Write at the current offset and advance, skipping out-of-range cells
    fn write(&mut self, surface: &mut impl Surface, ch: char) {
        let col = self.col.saturating_add(self.offset);
        self.offset += 1;

        if !self.window.contains(col, self.row) {
            return;
        }
        let (Ok(c), Ok(r)) = (usize::try_from(col), usize::try_from(self.row)) else {
            return;
        };
        if c < surface.columns() && r < surface.rows() {
            surface.put(c, r, ch, self.attr);
        }
    }
}

/// Highlight the whole surface, call `hold`, then restore every attribute
///
/// Characters are left untouched.
pub fn flash<S: Surface>(surface: &mut S, hold: impl FnOnce(&S)) {
    let (columns, rows) = (surface.columns(), surface.rows());
    let mut saved = Vec::with_capacity(columns * rows);

    for row in 0..rows {
        for col in 0..columns {
            saved.push(surface.attr(col, row));
            surface.set_attr(col, row, ColorAttr::HIGHLIGHT);
        }
    }

    hold(surface);

    let mut saved = saved.into_iter();
    for row in 0..rows {
        for col in 0..columns {
            if let Some(attr) = saved.next() {
                surface.set_attr(col, row, attr);
            }
        }
    }
    tracing::trace!("Flashed {}x{} surface", columns, rows);
}
