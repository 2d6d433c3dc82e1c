//! textweb Layout Engine
//!
//! Positions every element in one top-to-bottom pass over creation order.
//! Parents are always laid out before their children because they are
//! always created first.

mod flow;

pub use flow::{compute_layout, spacing_after};

/// Column where root-level elements start
pub const LEFT_MARGIN: i32 = 2;
/// Row where the first root-level element starts
pub const TOP_MARGIN: i32 = 2;
/// Rightmost column a box may extend to
pub const RIGHT_EDGE: i32 = 78;
/// Last row that is still rendered
pub const BOTTOM_ROW: i32 = 23;
/// Extra indent of list items relative to their list
pub const LIST_INDENT: i32 = 4;
/// Indent of other children relative to their parent
pub const CHILD_INDENT: i32 = 2;
