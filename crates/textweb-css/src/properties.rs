//! CSS Property Definitions
//!
//! The four properties the text grid can express, and the named-color
//! table mapping CSS colors onto the 16-entry palette.

use textweb_dom::{parse_int, Element, Palette};

/// Property identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyId {
    Color,
    BackgroundColor,
    Width,
    Height,
}

impl PropertyId {
    /// Look up a property by name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "color" => Some(Self::Color),
            "background-color" => Some(Self::BackgroundColor),
            "width" => Some(Self::Width),
            "height" => Some(Self::Height),
            _ => None,
        }
    }
}

/// Map a color value to a palette index
///
/// Hex literals are not decoded; every `#...` value maps to light gray.
/// Unknown names map to white.
pub fn parse_color(value: &str) -> u8 {
    let palette = match value {
        "red" => Palette::Red,
        "green" => Palette::Green,
        "blue" => Palette::Blue,
        "yellow" => Palette::Brown,
        "cyan" => Palette::Cyan,
        "magenta" => Palette::Magenta,
        "white" => Palette::White,
        "black" => Palette::Black,
        "gray" | "grey" => Palette::DarkGray,
        _ if value.starts_with('#') => Palette::LightGray,
        _ => Palette::White,
    };
    palette.index()
}

/// Apply one property to an element
///
/// Box properties overwrite the box directly, so once layout has run they
/// change what is painted and hit-tested, not where the element sits.
pub fn apply_property(element: &mut Element, property: &str, value: &str) {
    let Some(id) = PropertyId::from_name(property) else {
        tracing::trace!("Ignoring unsupported property {}", property);
        return;
    };

    match id {
        PropertyId::Color => element.color = element.color.with_foreground(parse_color(value)),
        PropertyId::BackgroundColor => {
            element.color = element.color.with_background(parse_color(value))
        }
        PropertyId::Width => element.width = parse_int(value),
        PropertyId::Height => element.height = parse_int(value),
    }
}
