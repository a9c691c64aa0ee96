//! Run-time configuration object + fluent builder.

use crate::core::{
    constants::{
        CANVAS_HEIGHT, CANVAS_PADDING, CANVAS_WIDTH, DEFAULT_AGENT, DEFAULT_HOST, X_OFFSET,
    },
    data::ValueAxis,
    error::ConfigError,
};

/// Fixed drawing surface the chart is laid out on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
    /// Margin around the plot area, same on all four sides.
    pub padding: f64,
    /// Additional horizontal inset for the first/last point.
    pub x_offset: f64,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            padding: CANVAS_PADDING,
            x_offset: X_OFFSET,
        }
    }
}

impl Canvas {
    #[inline]
    #[must_use]
    pub fn graph_width(&self) -> f64 {
        self.width - 2.0 * self.padding
    }

    #[inline]
    #[must_use]
    pub fn graph_height(&self) -> f64 {
        self.height - 2.0 * self.padding
    }

    /// Plot width left for points once both insets are removed.
    #[inline]
    #[must_use]
    pub fn usable_width(&self) -> f64 {
        self.graph_width() - 2.0 * self.x_offset
    }

    /// y of the horizontal axis (bottom edge of the plot area).
    #[inline]
    #[must_use]
    pub fn baseline(&self) -> f64 {
        self.height - self.padding
    }

    /// Right edge of the plot area.
    #[inline]
    #[must_use]
    pub fn right(&self) -> f64 {
        self.width - self.padding
    }

    /// Map a data value to a screen y (origin top-left, growing downward).
    ///
    /// `axis.min` lands on [`Canvas::baseline`], `axis.max` on `padding`. A
    /// zero span is not guarded and yields non-finite output.
    #[inline]
    #[must_use]
    pub fn value_to_y(&self, value: f64, axis: &ValueAxis) -> f64 {
        let normalized = (value - axis.min) / axis.span();
        self.baseline() - normalized * self.graph_height()
    }
}

/// Immutable parameters handed to the layout and the emitter.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub canvas: Canvas,
    /// `mxfile host` attribute.
    pub host: String,
    /// `mxfile agent` attribute.
    pub agent: String,
    /// `mxfile modified` timestamp; omitted from the output when `None`.
    pub modified: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            host: DEFAULT_HOST.to_owned(),
            agent: DEFAULT_AGENT.to_owned(),
            modified: None,
        }
    }
}

impl Config {
    #[inline]
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

/// Fluent builder with zero allocation until `build`.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    canvas: Option<Canvas>,
    host: Option<String>,
    agent: Option<String>,
    modified: Option<String>,
}

impl ConfigBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn canvas(mut self, c: Canvas) -> Self {
        self.canvas = Some(c);
        self
    }
    #[inline]
    #[must_use]
    pub fn host(mut self, h: impl Into<String>) -> Self {
        self.host = Some(h.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn agent(mut self, a: impl Into<String>) -> Self {
        self.agent = Some(a.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn modified(mut self, ts: impl Into<String>) -> Self {
        self.modified = Some(ts.into());
        self
    }

    /// # Errors
    ///
    /// [`ConfigError::InvalidCanvas`] when the canvas leaves no room to plot:
    /// non-positive width/height, or padding and inset eating the whole area.
    pub fn build(self) -> Result<Config, ConfigError> {
        let canvas = self.canvas.unwrap_or_default();
        if !(canvas.width > 0.0 && canvas.height > 0.0) {
            return Err(ConfigError::InvalidCanvas {
                reason: "width and height must be positive",
            });
        }
        if !(canvas.padding >= 0.0 && canvas.x_offset >= 0.0) {
            return Err(ConfigError::InvalidCanvas {
                reason: "padding and x offset must not be negative",
            });
        }
        if canvas.graph_height() <= 0.0 || canvas.usable_width() <= 0.0 {
            return Err(ConfigError::InvalidCanvas {
                reason: "padding leaves no drawable area",
            });
        }
        Ok(Config {
            canvas,
            host: self.host.unwrap_or_else(|| DEFAULT_HOST.to_owned()),
            agent: self.agent.unwrap_or_else(|| DEFAULT_AGENT.to_owned()),
            modified: self.modified,
        })
    }
}

/// Ergonomic `?` on a builder chain.
impl From<ConfigBuilder> for Result<Config, ConfigError> {
    fn from(b: ConfigBuilder) -> Self {
        b.build()
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
