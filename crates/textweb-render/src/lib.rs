//! textweb Render - Character Grid Painting
//!
//! Draws laid-out elements into a text-mode surface: one character and one
//! color attribute per cell.

mod grid;
mod painter;

pub use grid::{Cell, CharGrid};
pub use painter::{flash, Painter};

use serde::{Deserialize, Serialize};
use textweb_dom::ColorAttr;

/// Grid width in cells
pub const COLUMNS: usize = 80;
/// Grid height in cells
pub const ROWS: usize = 25;

/// Display memory the painter writes into
///
/// Coordinates outside `columns() x rows()` are never passed in.
pub trait Surface {
    fn columns(&self) -> usize;
    fn rows(&self) -> usize;
    /// Write a character and its attribute
    fn put(&mut self, col: usize, row: usize, ch: char, attr: ColorAttr);
    fn attr(&self, col: usize, row: usize) -> ColorAttr;
    /// Change only the attribute of a cell
    fn set_attr(&mut self, col: usize, row: usize, attr: ColorAttr);
}

/// Screen rectangle a page is drawn into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Window {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Whether the absolute cell lies inside the window
    pub fn contains(&self, col: i32, row: i32) -> bool {
        col >= self.x
            && col < self.right()
            && row >= self.y
            && row < self.y.saturating_add(self.height)
    }

    /// First column past the window, saturating at `i32::MAX`
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }
}

impl Default for Window {
    fn default() -> Self {
        Self::new(5, 2, 70, 20)
    }
}
