//! Aggregates the “business logic” layer.

pub mod color;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod geometry;

// re-export frequently-used items for convenience
pub use color::Color;
pub use config::{Canvas, Config, ConfigBuilder};
pub use constants::{CANVAS_HEIGHT, CANVAS_PADDING, CANVAS_WIDTH, DEFAULT_TITLE, X_OFFSET};
pub use data::{ChartModel, ChartParser, Directive, ValueAxis, parse};
pub use error::{ConfigError, ConvertError};
pub use geometry::{Geometry, Point, Tick, compute_geometry, value_ticks};
