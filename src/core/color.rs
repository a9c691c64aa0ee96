//! Colours as draw.io style values (`#RRGGBB` or `none`).

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    /// Suppresses the stroke/fill it is assigned to.
    None,
    Rgb(u8, u8, u8),
}

impl Color {
    pub const fn none() -> Self {
        Self::None
    }
    pub const fn white() -> Self {
        Self::Rgb(0xFF, 0xFF, 0xFF)
    }
    /// Point markers.
    pub const fn marker_red() -> Self {
        Self::Rgb(0xFF, 0x00, 0x00)
    }
    /// Data line segments.
    pub const fn accent_blue() -> Self {
        Self::Rgb(0x00, 0x66, 0xCC)
    }
    /// Dashed gridlines.
    pub const fn grid_gray() -> Self {
        Self::Rgb(0xE0, 0xE0, 0xE0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("none"),
            Self::Rgb(r, g, b) => write!(f, "#{r:02X}{g:02X}{b:02X}"),
        }
    }
}
