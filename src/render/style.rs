//! draw.io style strings: `shape;key=value;key=value;`.
//!
//! All chart styling is fixed; each primitive kind has one constructor here.

use std::fmt::{self, Display, Write};

use crate::core::color::Color;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style(String);

impl Style {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bare keyword such as `text` or `ellipse`.
    #[must_use]
    pub fn flag(mut self, name: &str) -> Self {
        self.0.push_str(name);
        self.0.push(';');
        self
    }

    #[must_use]
    pub fn set(mut self, key: &str, value: impl Display) -> Self {
        let _ = write!(self.0, "{key}={value};");
        self
    }

    /// Drop the `;` after the last pair.
    #[must_use]
    pub fn unterminated(mut self) -> Self {
        if self.0.ends_with(';') {
            self.0.pop();
        }
        self
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Center,
    Right,
}

impl Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Center => "center",
            Self::Right => "right",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Middle,
    Bottom,
}

impl Display for VAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Top => "top",
            Self::Middle => "middle",
            Self::Bottom => "bottom",
        })
    }
}

// --- Primitive styles ---

/// Heavy arrowed edge for both axes.
#[must_use]
pub fn axis() -> Style {
    Style::new()
        .set("endArrow", "classic")
        .set("html", 1)
        .set("rounded", 0)
        .set("strokeWidth", 2)
        .set("startSize", 8)
        .set("endSize", 8)
}

/// Faint dashed horizontal line at a tick.
#[must_use]
pub fn gridline() -> Style {
    Style::new()
        .set("endArrow", "none")
        .set("html", 1)
        .set("rounded", 0)
        .set("strokeColor", Color::grid_gray())
        .set("dashed", 1)
}

/// Segment between two consecutive data points.
#[must_use]
pub fn data_line() -> Style {
    Style::new()
        .set("endArrow", "none")
        .set("html", 1)
        .set("rounded", 0)
        .set("strokeWidth", 2)
        .set("strokeColor", Color::accent_blue())
}

/// Filled circle whose value label floats above it on a white background.
#[must_use]
pub fn marker() -> Style {
    Style::new()
        .flag("ellipse")
        .set("whiteSpace", "wrap")
        .set("html", 1)
        .set("aspect", "fixed")
        .set("fillColor", Color::marker_red())
        .set("strokeColor", Color::none())
        .set("verticalLabelPosition", VAlign::Top)
        .set("verticalAlign", VAlign::Bottom)
        .set("fontSize", 11)
        .set("fontStyle", 1)
        .set("labelBackgroundColor", Color::white())
}

/// Borderless, fill-less text box.
#[must_use]
pub fn text(align: Align, valign: VAlign) -> Style {
    Style::new()
        .flag("text")
        .set("html", 1)
        .set("strokeColor", Color::none())
        .set("fillColor", Color::none())
        .set("align", align)
        .set("verticalAlign", valign)
        .set("whiteSpace", "wrap")
        .set("rounded", 0)
}

/// Large bold centered heading, written without a closing `;`.
#[must_use]
pub fn title() -> Style {
    text(Align::Center, VAlign::Middle)
        .set("fontSize", 18)
        .set("fontStyle", 1)
        .unterminated()
}
