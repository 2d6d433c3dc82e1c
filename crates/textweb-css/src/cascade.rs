//! Style Cascade
//!
//! Applies declarations to matching elements:
//! 1. Declarations in stylesheet order
//! 2. For each one, elements in creation order
//!
//! There is no specificity; whichever declaration is applied last wins.

use textweb_dom::DomTree;

use crate::properties::apply_property;
use crate::{Selector, Stylesheet};

/// Style resolver - runs the cascade for one stylesheet
pub struct StyleResolver<'a> {
    stylesheet: &'a Stylesheet,
}

impl<'a> StyleResolver<'a> {
    pub fn new(stylesheet: &'a Stylesheet) -> Self {
        Self { stylesheet }
    }

    /// Apply every declaration to every matching element
    ///
    /// Returns the number of (declaration, element) applications.
    pub fn apply(&self, tree: &mut DomTree) -> usize {
        let mut applied = 0;

        for decl in self.stylesheet.iter() {
            let selector = Selector::parse(&decl.selector);
            for element in tree.iter_mut() {
                if selector.matches(element) {
                    apply_property(element, &decl.property, &decl.value);
                    applied += 1;
                }
            }
        }

        tracing::debug!(
            "Cascade applied {} declarations ({} matches)",
            self.stylesheet.len(),
            applied
        );
        applied
    }
}
