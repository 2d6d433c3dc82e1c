//! Script stub store
//!
//! Finds `function` keywords and captures the following name and brace
//! body. Brace depth is counted naively: braces inside strings or comments
//! in a body count too.

use textweb_dom::is_space;

use crate::{ScriptStub, MAX_SCRIPTS};

const KEYWORD: &str = "function";

/// Bounded list of script stubs
#[derive(Debug, Default)]
pub struct ScriptStore {
    stubs: Vec<ScriptStub>,
}

impl ScriptStore {
    pub fn new() -> Self {
        Self {
            stubs: Vec::with_capacity(MAX_SCRIPTS),
        }
    }

    /// Extract function stubs from script text
    ///
    /// Always returns `true`. Comments between functions are skipped; a
    /// function with no `{` ends the scan; so does filling the store.
    pub fn parse(&mut self, js: &str) -> bool {
        let start_len = self.stubs.len();
        let mut rest = js;

        while !self.is_full() {
            rest = rest.trim_start_matches(is_space);
            if rest.is_empty() {
                break;
            }

            if let Some(after) = rest.strip_prefix("//") {
                rest = after.find('\n').map_or("", |end| &after[end..]);
                continue;
            }
            if let Some(after) = rest.strip_prefix("/*") {
                rest = after.find("*/").map_or("", |end| &after[end + 2..]);
                continue;
            }

            let Some(after) = rest.strip_prefix(KEYWORD) else {
                let mut chars = rest.chars();
                chars.next();
                rest = chars.as_str();
                continue;
            };

            match self.parse_function(after) {
                Some(remaining) => rest = remaining,
                None => {
                    tracing::debug!("Function without body, stopping script scan");
                    break;
                }
            }
        }

        tracing::debug!(
            "Parsed {} script stubs ({} total)",
            self.stubs.len() - start_len,
            self.stubs.len()
        );
        true
    }

    /// Parse `name(...) { body }` after the keyword; returns the rest
    fn parse_function<'a>(&mut self, after_keyword: &'a str) -> Option<&'a str> {
        let rest = after_keyword.trim_start_matches([' ', '\t']);
        let name_end = rest
            .find(|c: char| c == '(' || c == ' ' || c == '\t')
            .unwrap_or(rest.len());
        let name = &rest[..name_end];

        let open = rest[name_end..].find('{')? + name_end;
        let body_start = open + 1;

        let mut depth = 1usize;
        let mut body_end = rest.len();
        for (offset, c) in rest[body_start..].char_indices() {
            match c {
                '{' => depth += 1,
                '}' => depth -= 1,
                _ => {}
            }
            if depth == 0 {
                body_end = body_start + offset;
                break;
            }
        }

        let stub = ScriptStub::new(name, &rest[body_start..body_end]);
        tracing::trace!("Script stub {}", stub.name());
        self.stubs.push(stub);

        Some(rest.get(body_end + 1..).unwrap_or(""))
    }

    /// First active stub named `name`
    pub fn lookup(&self, name: &str) -> Option<&ScriptStub> {
        self.stubs.iter().find(|s| s.active && s.name() == name)
    }

    pub fn len(&self) -> usize {
        self.stubs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stubs.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.stubs.len() >= MAX_SCRIPTS
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScriptStub> {
        self.stubs.iter()
    }

    pub fn clear(&mut self) {
        self.stubs.clear();
    }
}
