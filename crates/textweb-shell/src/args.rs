//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;

/// Where the page buffers come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Demo,
    Files {
        html: PathBuf,
        css: Option<PathBuf>,
        js: Option<PathBuf>,
    },
}

/// Render a textweb page to stdout
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "textweb", version, about, long_about = None)]
pub struct Options {
    /// JSON config file (flash hold, window geometry)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Show the built-in sample page (the default with no files)
    #[arg(long, conflicts_with = "files")]
    pub demo: bool,

    /// HTML file, then optional CSS and JS files
    #[arg(value_name = "FILE", num_args = 0..=3)]
    pub files: Vec<PathBuf>,

    /// Window-relative click to replay after rendering, as X,Y
    #[arg(long = "click", value_name = "X,Y", value_parser = parse_point)]
    pub clicks: Vec<(i32, i32)>,
}

impl Options {
    /// Page source named by the arguments
    pub fn source(&self) -> Source {
        let mut files = self.files.iter().cloned();
        match files.next() {
            Some(html) if !self.demo => Source::Files {
                html,
                css: files.next(),
                js: files.next(),
            },
            _ => Source::Demo,
        }
    }
}

fn parse_point(text: &str) -> Result<(i32, i32), String> {
    let (x, y) = text
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got {}", text))?;
    let coord = |s: &str| {
        s.trim()
            .parse::<i32>()
            .map_err(|e| format!("bad coordinate {}: {}", s.trim(), e))
    };
    Ok((coord(x)?, coord(y)?))
}
