//! Painter tests - custom surfaces and window clipping

use textweb_dom::{ColorAttr, DomTree, Element};
use textweb_render::{flash, CharGrid, Painter, Surface, Window};

/// Surface that records every write
struct Recorder {
    columns: usize,
    rows: usize,
    writes: Vec<(usize, usize, char)>,
    attrs: Vec<ColorAttr>,
}

impl Recorder {
    fn new(columns: usize, rows: usize) -> Self {
        Self {
            columns,
            rows,
            writes: Vec::new(),
            attrs: vec![ColorAttr::DEFAULT; columns * rows],
        }
    }
}

impl Surface for Recorder {
    fn columns(&self) -> usize {
        self.columns
    }

    fn rows(&self) -> usize {
        self.rows
    }

    fn put(&mut self, col: usize, row: usize, ch: char, attr: ColorAttr) {
        assert!(col < self.columns && row < self.rows);
        self.writes.push((col, row, ch));
        self.attrs[row * self.columns + col] = attr;
    }

    fn attr(&self, col: usize, row: usize) -> ColorAttr {
        self.attrs[row * self.columns + col]
    }

    fn set_attr(&mut self, col: usize, row: usize, attr: ColorAttr) {
        self.attrs[row * self.columns + col] = attr;
    }
}

fn placed(tag: &str, content: &str, x: i32, y: i32, width: i32) -> Element {
    let mut element = Element::new(tag);
    element.set_content(content);
    element.x = x;
    element.y = y;
    element.width = width;
    element
}

// ============================================================================
// CLIPPING
// ============================================================================

#[test]
fn test_small_surface_never_overrun() {
    let mut tree = DomTree::new();
    tree.insert(placed("p", "abcdefghij", 2, 1, 20), None).unwrap();

    let mut surface = Recorder::new(6, 2);
    Painter::render(&tree, &Window::new(0, 0, 80, 25), &mut surface);
    let text: String = surface.writes.iter().map(|w| w.2).collect();
    assert_eq!(text, "abcd");
}

#[test]
fn test_prefix_clipped_by_window_left_edge() {
    let mut tree = DomTree::new();
    tree.insert(placed("button", "Go", -1, 0, 10), None).unwrap();

    let mut surface = Recorder::new(80, 25);
    Painter::render(&tree, &Window::new(0, 0, 80, 25), &mut surface);
    // "[" falls at column -1
    assert_eq!(surface.writes, [(0, 0, 'G'), (1, 0, 'o'), (2, 0, ']')]);
}

#[test]
fn test_rows_outside_window_skipped() {
    let mut tree = DomTree::new();
    tree.insert(placed("p", "in", 0, 0, 10), None).unwrap();
    tree.insert(placed("p", "out", 0, 3, 10), None).unwrap();

    let mut grid = CharGrid::new();
    Painter::render(&tree, &Window::new(10, 10, 20, 2), &mut grid);
    assert!(grid.row_text(10).contains("in"));
    assert_eq!(grid.row_text(13).trim(), "");
}

#[test]
fn test_later_elements_overwrite() {
    let mut tree = DomTree::new();
    tree.insert(placed("p", "first", 0, 0, 10), None).unwrap();
    tree.insert(placed("p", "XY", 0, 0, 10), None).unwrap();

    let mut grid = CharGrid::new();
    Painter::render(&tree, &Window::new(0, 0, 80, 25), &mut grid);
    assert!(grid.row_text(0).starts_with("XYrst"));
}

// ============================================================================
// FLASH
// ============================================================================

#[test]
fn test_flash_on_custom_surface() {
    let mut surface = Recorder::new(4, 3);
    surface.set_attr(2, 1, ColorAttr(0x42));

    let mut during = Vec::new();
    flash(&mut surface, |s| {
        for row in 0..s.rows() {
            for col in 0..s.columns() {
                during.push(s.attr(col, row));
            }
        }
    });

    assert!(during.iter().all(|&attr| attr == ColorAttr::HIGHLIGHT));
    assert_eq!(during.len(), 12);
    assert_eq!(surface.attr(2, 1), ColorAttr(0x42));
    assert_eq!(surface.attr(0, 0), ColorAttr::DEFAULT);
    assert!(surface.writes.is_empty());
}
