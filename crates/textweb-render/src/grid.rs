//! In-memory character grid

use textweb_dom::ColorAttr;

use crate::{Surface, COLUMNS, ROWS};

/// One character cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub attr: ColorAttr,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            attr: ColorAttr::DEFAULT,
        }
    }
}

/// 80x25 text-mode screen buffer
#[derive(Debug, Clone)]
pub struct CharGrid {
    cells: Vec<Cell>,
}

impl CharGrid {
    /// Create a blank grid in the default attribute
    pub fn new() -> Self {
        Self {
            cells: vec![Cell::default(); COLUMNS * ROWS],
        }
    }

    /// Cell at a position, `None` outside the grid
    pub fn cell(&self, col: usize, row: usize) -> Option<Cell> {
        if col < COLUMNS && row < ROWS {
            Some(self.cells[row * COLUMNS + col])
        } else {
            None
        }
    }

    /// Characters of one row, trailing blanks included
    pub fn row_text(&self, row: usize) -> String {
        if row >= ROWS {
            return String::new();
        }
        self.cells[row * COLUMNS..(row + 1) * COLUMNS]
            .iter()
            .map(|cell| cell.ch)
            .collect()
    }
}

impl Default for CharGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for CharGrid {
    fn columns(&self) -> usize {
        COLUMNS
    }

    fn rows(&self) -> usize {
        ROWS
    }

    fn put(&mut self, col: usize, row: usize, ch: char, attr: ColorAttr) {
        if col < COLUMNS && row < ROWS {
            self.cells[row * COLUMNS + col] = Cell { ch, attr };
        }
    }

    fn attr(&self, col: usize, row: usize) -> ColorAttr {
        self.cell(col, row).map_or(ColorAttr::DEFAULT, |cell| cell.attr)
    }

    fn set_attr(&mut self, col: usize, row: usize, attr: ColorAttr) {
        if col < COLUMNS && row < ROWS {
            self.cells[row * COLUMNS + col].attr = attr;
        }
    }
}
