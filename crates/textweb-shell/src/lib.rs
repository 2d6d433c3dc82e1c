//! textweb Shell
//!
//! Host side of the interpreter: sources the three text buffers, drives a
//! fresh document through the pipeline, replays clicks, and hands back the
//! screen as lines of text.

mod args;
mod demo;

pub use args::{Options, Source};
pub use demo::{DEMO_CSS, DEMO_HTML, DEMO_JS};

use std::fs;
use std::path::{Path, PathBuf};

use textweb_engine::{CharGrid, Config, ConfigError, Interpreter, Surface};

/// Shell error
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("Cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Markup, stylesheet and script for one page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub html: String,
    pub css: String,
    pub js: String,
}

impl Page {
    /// The built-in sample page
    pub fn demo() -> Self {
        Self {
            html: DEMO_HTML.to_string(),
            css: DEMO_CSS.to_string(),
            js: DEMO_JS.to_string(),
        }
    }

    /// Load the buffers a [`Source`] names
    pub fn load(source: &Source) -> Result<Self, ShellError> {
        match source {
            Source::Demo => Ok(Self::demo()),
            Source::Files { html, css, js } => Ok(Self {
                html: read(html)?,
                css: css.as_deref().map(read).transpose()?.unwrap_or_default(),
                js: js.as_deref().map(read).transpose()?.unwrap_or_default(),
            }),
        }
    }
}

fn read(path: &Path) -> Result<String, ShellError> {
    fs::read_to_string(path).map_err(|source| ShellError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the config file, or the defaults when none is given
pub fn load_config(path: Option<&Path>) -> Result<Config, ShellError> {
    match path {
        Some(path) => Ok(Config::from_json(&read(path)?)?),
        None => Ok(Config::default()),
    }
}

/// Navigate to `page` and return the interpreter and the painted grid
pub fn show(page: &Page, config: Config) -> (Interpreter, CharGrid) {
    let window = config.window;
    let mut interp = Interpreter::new(config);
    interp.reset();
    interp.parse_html(&page.html);
    interp.parse_css(&page.css);
    interp.apply_styles();
    interp.parse_js(&page.js);

    let mut grid = CharGrid::new();
    interp.render(&window, &mut grid);
    (interp, grid)
}

/// Run the shell: load, render, replay clicks, return the screen rows
pub fn run(options: &Options) -> Result<Vec<String>, ShellError> {
    let config = load_config(options.config.as_deref())?;
    let page = Page::load(&options.source())?;
    let (mut interp, mut grid) = show(&page, config);

    for &(x, y) in &options.clicks {
        match interp.handle_click(x, y, &mut grid) {
            Some(handler) => tracing::info!("Click ({}, {}) -> {}", x, y, handler),
            None => tracing::info!("Click ({}, {}) hit no button", x, y),
        }
    }

    Ok((0..grid.rows())
        .map(|row| grid.row_text(row).trim_end().to_string())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_page_renders() {
        let config = Config {
            flash_hold_ms: 0,
            ..Config::default()
        };
        let (interp, grid) = show(&Page::demo(), config);

        assert!(interp.element_count() > 10);
        assert_eq!(interp.scripts().len(), 2);
        // Window origin (5, 2) plus the first root's position (2, 2)
        assert!(grid.row_text(4)[7..].starts_with("html"));
    }

    #[test]
    fn test_demo_styles_cascade() {
        let (interp, _) = show(&Page::demo(), Config::default());
        // .header runs after h1, so yellow wins
        assert_eq!(interp.get_element_by_id("title").unwrap().color.foreground(), 6);
        assert_eq!(interp.get_element_by_id("title").unwrap().width, 40);
    }

    #[test]
    fn test_missing_file() {
        let source = Source::Files {
            html: PathBuf::from("/nonexistent/page.html"),
            css: None,
            js: None,
        };
        let err = Page::load(&source).unwrap_err();
        assert!(matches!(err, ShellError::Io { .. }));
        assert!(err.to_string().contains("page.html"));
    }
}
