//! Text-mode color attribute
//!
//! One byte per cell: low nibble is the foreground palette index, high
//! nibble the background.

/// The fixed 16-entry palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Palette {
    Black = 0,
    Blue = 1,
    Green = 2,
    Cyan = 3,
    Red = 4,
    Magenta = 5,
    Brown = 6,
    LightGray = 7,
    DarkGray = 8,
    LightBlue = 9,
    LightGreen = 10,
    LightCyan = 11,
    LightRed = 12,
    Pink = 13,
    Yellow = 14,
    White = 15,
}

impl Palette {
    /// Palette index (0-15)
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Packed foreground/background attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct ColorAttr(pub u8);

impl ColorAttr {
    /// White on blue, the attribute every element starts from
    pub const DEFAULT: ColorAttr = ColorAttr(0x1F);
    /// Every bit set; used while flashing the screen
    pub const HIGHLIGHT: ColorAttr = ColorAttr(0xFF);

    pub const fn new(foreground: Palette, background: Palette) -> Self {
        ColorAttr((background as u8) << 4 | (foreground as u8))
    }

    #[inline]
    pub const fn foreground(self) -> u8 {
        self.0 & 0x0F
    }

    #[inline]
    pub const fn background(self) -> u8 {
        self.0 >> 4
    }

    /// Replace only the foreground nibble
    #[inline]
    pub const fn with_foreground(self, index: u8) -> Self {
        ColorAttr((self.0 & 0xF0) | (index & 0x0F))
    }

    /// Replace only the background nibble
    #[inline]
    pub const fn with_background(self, index: u8) -> Self {
        ColorAttr((self.0 & 0x0F) | ((index & 0x0F) << 4))
    }
}

impl Default for ColorAttr {
    fn default() -> Self {
        Self::DEFAULT
    }
}
