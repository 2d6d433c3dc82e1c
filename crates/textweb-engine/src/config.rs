//! Interpreter Configuration

use serde::{Deserialize, Serialize};
use textweb_render::Window;

/// Interpreter and host configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How long the alert flash stays on screen (milliseconds)
    pub flash_hold_ms: u64,

    /// Window the page is drawn into
    pub window: Window,
}

impl Config {
    /// Parse a JSON config; missing fields take their defaults
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            flash_hold_ms: 120,
            window: Window::default(),
        }
    }
}

/// Config error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid config: {0}")]
    Json(#[from] serde_json::Error),
}
