//! textweb Script Stubs
//!
//! Scripts are never evaluated. The store keeps each `function name() {...}`
//! body as text, and "running" one is a substring check on that body:
//! a body mentioning `alert` produces [`ScriptEffect::Alert`], anything else
//! is inert.

mod store;

pub use store::ScriptStore;

use textweb_dom::bounded;

/// Maximum stubs per script source
pub const MAX_SCRIPTS: usize = 50;
/// Maximum function name length (chars)
pub const MAX_NAME_LEN: usize = 63;
/// Maximum function body length (chars)
pub const MAX_BODY_LEN: usize = 511;

/// Observable result of running a stub
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptEffect {
    /// No visible effect
    Inert,
    /// Flash the whole screen
    Alert,
}

/// A named, unparsed function body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptStub {
    name: String,
    body: String,
    pub active: bool,
}

impl ScriptStub {
    /// Create an active stub, truncating name and body to capacity
    pub fn new(name: &str, body: &str) -> Self {
        Self {
            name: bounded(name, MAX_NAME_LEN),
            body: bounded(body, MAX_BODY_LEN),
            active: true,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// What running this stub does
    pub fn effect(&self) -> ScriptEffect {
        if self.body.contains("alert") {
            ScriptEffect::Alert
        } else {
            ScriptEffect::Inert
        }
    }
}
