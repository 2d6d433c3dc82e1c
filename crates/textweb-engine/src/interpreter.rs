//! Interpreter - owns one document's arenas
//!
//! Markup, stylesheet and script state live here for exactly one document
//! at a time. `reset` starts a new document; handles from the previous one
//! stop resolving.

use std::thread;
use std::time::Duration;

use textweb_css::{CssParser, StyleResolver, Stylesheet};
use textweb_dom::{DomTree, Element, ElementId, MAX_CONTENT_LEN};
use textweb_html::HtmlParser;
use textweb_layout::compute_layout;
use textweb_render::{flash, Painter, Surface, Window};
use textweb_script::{ScriptEffect, ScriptStore};

use crate::dispatch::{handler_name, hit_test};
use crate::Config;

/// The textweb interpreter
#[derive(Debug)]
pub struct Interpreter {
    config: Config,
    dom: DomTree,
    stylesheet: Stylesheet,
    scripts: ScriptStore,
}

impl Interpreter {
    /// Create an empty interpreter with the given configuration
    pub fn new(config: Config) -> Self {
        tracing::info!("textweb interpreter {} initialized", crate::VERSION);
        Self {
            config,
            dom: DomTree::new(),
            stylesheet: Stylesheet::new(),
            scripts: ScriptStore::new(),
        }
    }

    /// Same as [`reset`](Self::reset)
    pub fn init(&mut self) {
        self.reset();
    }

    /// Drop all elements, declarations and script stubs
    pub fn reset(&mut self) {
        self.dom.reset();
        self.stylesheet.clear();
        self.scripts.clear();
        tracing::debug!("Interpreter reset (generation {})", self.dom.generation());
    }

    /// Parse markup into the tree, lay it out, then cascade the loaded styles
    ///
    /// Layout runs before the cascade, so stylesheet `width`/`height` only
    /// affect rendering and hit testing, never positions.
    pub fn parse_html(&mut self, html: &str) -> bool {
        let ok = HtmlParser::new().parse_into(&mut self.dom, html);
        compute_layout(&mut self.dom);
        StyleResolver::new(&self.stylesheet).apply(&mut self.dom);
        ok
    }

    /// Append stylesheet declarations; existing elements are not restyled
    pub fn parse_css(&mut self, css: &str) -> bool {
        CssParser::new().parse(css, &mut self.stylesheet)
    }

    /// Cascade the loaded stylesheet over the current tree
    pub fn apply_styles(&mut self) -> usize {
        StyleResolver::new(&self.stylesheet).apply(&mut self.dom)
    }

    pub fn parse_js(&mut self, js: &str) -> bool {
        self.scripts.parse(js)
    }

    /// Paint every visible element into `window` on `surface`
    pub fn render(&self, window: &Window, surface: &mut impl Surface) {
        Painter::render(&self.dom, window, surface);
    }

    /// Dispatch a window-relative click
    ///
    /// Returns the handler name when the first element hit is a button. The
    /// handler runs if a stub by that name exists; a missing stub is not an
    /// error.
    pub fn handle_click(&mut self, x: i32, y: i32, surface: &mut impl Surface) -> Option<String> {
        let id = hit_test(&self.dom, x, y)?;
        let element = self.dom.get(id)?;
        tracing::trace!("Click ({}, {}) hit <{}>", x, y, element.tag());

        let handler = handler_name(element)?;
        self.execute(&handler, surface);
        Some(handler)
    }

    /// Run the first active stub named `name`
    ///
    /// An alerting stub flashes `surface` for the configured hold time.
    pub fn execute(&self, name: &str, surface: &mut impl Surface) -> Option<ScriptEffect> {
        let Some(stub) = self.scripts.lookup(name) else {
            tracing::debug!("No script stub named {}", name);
            return None;
        };

        let effect = stub.effect();
        if effect == ScriptEffect::Alert {
            let hold = Duration::from_millis(self.config.flash_hold_ms);
            flash(surface, |_| {
                if !hold.is_zero() {
                    thread::sleep(hold);
                }
            });
        }
        Some(effect)
    }

    /// First element with the given `id` attribute
    pub fn get_element_by_id(&self, id: &str) -> Option<&Element> {
        self.element_id_by_id(id).and_then(|handle| self.dom.get(handle))
    }

    /// Handle of the first element with the given `id` attribute
    pub fn element_id_by_id(&self, id: &str) -> Option<ElementId> {
        self.dom.find_by_id(id)
    }

    /// First element with the given tag
    pub fn get_element_by_tag(&self, tag: &str) -> Option<&Element> {
        self.dom.find_by_tag(tag).and_then(|handle| self.dom.get(handle))
    }

    /// Resolve a handle; `None` once the document it came from is reset
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.dom.get(id)
    }

    /// Replace an element's content, truncated to capacity
    ///
    /// Unknown ids are ignored. Position and size are left as they are.
    pub fn update_element_content(&mut self, id: &str, text: &str) {
        if let Some(element) = self.find_mut(id) {
            element.set_content(text);
            tracing::trace!("Updated #{} ({} chars max)", id, MAX_CONTENT_LEN);
        }
    }

    /// Flip an element's visibility; unknown ids are ignored
    pub fn toggle_element_visibility(&mut self, id: &str) {
        if let Some(element) = self.find_mut(id) {
            element.visible = !element.visible;
        }
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut Element> {
        let handle = self.dom.find_by_id(id)?;
        self.dom.get_mut(handle)
    }

    pub fn dom(&self) -> &DomTree {
        &self.dom
    }

    pub fn stylesheet(&self) -> &Stylesheet {
        &self.stylesheet
    }

    pub fn scripts(&self) -> &ScriptStore {
        &self.scripts
    }

    pub fn element_count(&self) -> usize {
        self.dom.len()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
