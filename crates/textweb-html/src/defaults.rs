//! Per-tag default box metrics and colors

use textweb_dom::{ColorAttr, Element, Palette};

/// Default width, height and color for a tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagDefaults {
    pub width: i32,
    pub height: i32,
    pub color: ColorAttr,
}

impl TagDefaults {
    const fn new(width: i32, height: i32, color: ColorAttr) -> Self {
        Self {
            width,
            height,
            color,
        }
    }

    /// Look up defaults; unknown tags get 60x1 white on blue
    pub fn for_tag(tag: &str) -> Self {
        match tag {
            "h1" => Self::new(60, 2, ColorAttr::new(Palette::White, Palette::Red)),
            "h2" => Self::new(55, 2, ColorAttr::new(Palette::White, Palette::Green)),
            "h3" => Self::new(50, 1, ColorAttr::new(Palette::White, Palette::Brown)),
            "p" => Self::new(70, 1, ColorAttr::DEFAULT),
            "button" => Self::new(15, 1, ColorAttr::new(Palette::Black, Palette::LightGray)),
            "input" => Self::new(20, 1, ColorAttr::new(Palette::White, Palette::Black)),
            "div" => Self::new(75, 1, ColorAttr::DEFAULT),
            "span" => Self::new(20, 1, ColorAttr::DEFAULT),
            "ul" | "ol" => Self::new(70, 1, ColorAttr::DEFAULT),
            "li" => Self::new(68, 1, ColorAttr::DEFAULT),
            _ => Self::new(60, 1, ColorAttr::DEFAULT),
        }
    }

    /// Fresh element for `tag` carrying its defaults
    pub fn element(tag: &str) -> Element {
        let defaults = Self::for_tag(tag);
        let mut element = Element::new(tag);
        element.width = defaults.width;
        element.height = defaults.height;
        element.color = defaults.color;
        element
    }
}
