//! textweb - Main Entry Point

use clap::Parser;
use textweb_shell::{run, Options};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let options = Options::parse();
    let screen = run(&options)?;

    for line in screen {
        println!("{}", line);
    }
    Ok(())
}
