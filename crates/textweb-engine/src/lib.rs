//! textweb Engine
//!
//! A miniature markup/style/script interpreter for an 80x25 text screen.
//!
//! # Example
//! ```rust,ignore
//! use textweb_engine::{CharGrid, Config, Interpreter, Window};
//!
//! let mut interp = Interpreter::new(Config::default());
//! interp.parse_html("<button id='go'>Go</button>");
//! interp.parse_js("function go_click() { alert(); }");
//!
//! let mut grid = CharGrid::new();
//! interp.render(&Window::default(), &mut grid);
//! interp.handle_click(3, 2, &mut grid);
//! ```

mod config;
mod dispatch;
mod interpreter;

pub use config::{Config, ConfigError};
pub use dispatch::{handler_name, hit_test};
pub use interpreter::Interpreter;

pub use textweb_dom::{ColorAttr, DomTree, Element, ElementId};
pub use textweb_render::{CharGrid, Surface, Window};
pub use textweb_script::ScriptEffect;

// Re-export sub-crates for advanced usage
pub use textweb_css as css;
pub use textweb_dom as dom;
pub use textweb_html as html;
pub use textweb_layout as layout;
pub use textweb_render as render;
pub use textweb_script as script;

/// Engine version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
