//! Public-facing crate root – re-exports + one-shot helpers.
//!
//! ```
//! let xml = mermaid2drawio::convert("title \"Sales\"\nx-axis [Jan, Feb]\nline [1, 2]");
//! assert!(xml.contains(r#"id="point-1""#));
//! ```

pub mod cli;
pub mod core;
pub mod render;

pub use crate::core::{
    config::{Canvas, Config, ConfigBuilder},
    data::{ChartModel, ValueAxis, parse},
    error::{ConfigError, ConvertError},
    geometry::{Geometry, Point, compute_geometry},
};

pub use render::{Document, emit};

/// Chart text in, draw.io XML out, using the default canvas and metadata.
/// Never fails; see [`parse`] for how irregular input is absorbed.
#[must_use]
pub fn convert(content: &str) -> String {
    convert_with(content, &Config::default())
}

/// [`convert`] with explicit canvas and `mxfile` metadata.
#[must_use]
pub fn convert_with(content: &str, config: &Config) -> String {
    let chart = parse(content);
    let geometry = compute_geometry(&chart, &config.canvas);
    emit(&chart, &geometry, config)
}
