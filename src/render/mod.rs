pub mod document;
pub mod style;
pub mod xml;

pub use document::{Document, Payload, Primitive, format_number};
pub use style::Style;
pub use xml::Element;

use crate::core::{config::Config, data::ChartModel, geometry::Geometry};

/// Build the primitive tree for `chart` and serialize it to draw.io XML.
#[must_use]
pub fn emit(chart: &ChartModel, geometry: &Geometry, config: &Config) -> String {
    Document::build(chart, geometry).to_xml(config)
}
