//! Chart → draw.io primitives → mxGraph XML.
//!
//! ### Layering
//! Primitives are appended in paint order: axes, category labels, tick
//! labels with their gridlines, data segments interleaved with markers,
//! title last. Every id is unique within one document.

use tracing::debug;

use crate::{
    core::{
        config::{Canvas, Config},
        constants::{
            LABEL_HEIGHT, LABEL_WIDTH, MARKER_SIZE, TITLE_HEIGHT, TITLE_TOP, X_LABEL_GAP,
            Y_LABEL_INSET,
        },
        data::ChartModel,
        geometry::{Geometry, Point, value_ticks},
    },
    render::{
        style::{self, Align, Style, VAlign},
        xml::Element,
    },
};

/// Where a primitive sits on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Payload {
    /// Vertex bounding box (top-left corner + size).
    Shape {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    /// Free-standing edge between two absolute points.
    Edge { source: Point, target: Point },
}

/// One drawable cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    pub id: String,
    /// Text shown by the cell; empty for plain lines.
    pub value: String,
    pub style: Style,
    pub payload: Payload,
}

impl Primitive {
    fn edge(id: String, style: Style, source: Point, target: Point) -> Self {
        Self {
            id,
            value: String::new(),
            style,
            payload: Payload::Edge { source, target },
        }
    }

    fn shape(id: String, value: String, style: Style, x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            id,
            value,
            style,
            payload: Payload::Shape {
                x,
                y,
                width: w,
                height: h,
            },
        }
    }

    fn to_element(&self) -> Element {
        let cell = Element::new("mxCell")
            .attr("id", self.id.as_str())
            .attr("value", self.value.as_str())
            .attr("style", self.style.as_str());

        match self.payload {
            Payload::Edge { source, target } => cell.attr("parent", "1").attr("edge", "1").child(
                Element::new("mxGeometry")
                    .attr("relative", "1")
                    .attr("as", "geometry")
                    .child(point_element(source, "sourcePoint"))
                    .child(point_element(target, "targetPoint")),
            ),
            Payload::Shape {
                x,
                y,
                width,
                height,
            } => cell.attr("vertex", "1").attr("parent", "1").child(
                Element::new("mxGeometry")
                    .attr("x", format_number(x))
                    .attr("y", format_number(y))
                    .attr("width", format_number(width))
                    .attr("height", format_number(height))
                    .attr("as", "geometry"),
            ),
        }
    }
}

fn point_element(p: Point, role: &'static str) -> Element {
    Element::new("mxPoint")
        .attr("x", format_number(p.x))
        .attr("y", format_number(p.y))
        .attr("as", role)
}

/// Root container of all primitives, in paint order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub primitives: Vec<Primitive>,
}

impl Document {
    /// Lay out every primitive for `chart` using the precomputed `geo`.
    #[must_use]
    pub fn build(chart: &ChartModel, geo: &Geometry) -> Self {
        let mut doc = Self::default();
        doc.push_axes(&geo.canvas);
        doc.push_category_labels(chart, geo);
        doc.push_value_ticks(chart, &geo.canvas);
        doc.push_series(chart, geo);
        doc.push_title(chart, &geo.canvas);

        debug!(primitives = doc.primitives.len(), "built document");
        doc
    }

    fn push_axes(&mut self, c: &Canvas) {
        let origin = Point {
            x: c.padding,
            y: c.baseline(),
        };
        self.primitives.push(Primitive::edge(
            "axis-y".to_owned(),
            style::axis(),
            origin,
            Point {
                x: c.padding,
                y: c.padding,
            },
        ));
        self.primitives.push(Primitive::edge(
            "axis-x".to_owned(),
            style::axis(),
            origin,
            Point {
                x: c.right(),
                y: c.baseline(),
            },
        ));
    }

    /// Labels without a matching point are dropped.
    fn push_category_labels(&mut self, chart: &ChartModel, geo: &Geometry) {
        for (i, (label, p)) in chart.categories.iter().zip(&geo.points).enumerate() {
            self.primitives.push(Primitive::shape(
                format!("xlabel-{i}"),
                label.clone(),
                style::text(Align::Center, VAlign::Top),
                p.x - LABEL_WIDTH / 2.0,
                geo.canvas.baseline() + X_LABEL_GAP,
                LABEL_WIDTH,
                LABEL_HEIGHT,
            ));
        }
    }

    /// The bottom tick gets no gridline, the x axis already sits there.
    fn push_value_ticks(&mut self, chart: &ChartModel, c: &Canvas) {
        for tick in value_ticks(&chart.value_axis, c) {
            self.primitives.push(Primitive::shape(
                format!("ylabel-{}", tick.index),
                format_number(tick.value),
                style::text(Align::Right, VAlign::Middle),
                c.padding - Y_LABEL_INSET,
                tick.y - LABEL_HEIGHT / 2.0,
                LABEL_WIDTH,
                LABEL_HEIGHT,
            ));

            if tick.index > 0 {
                self.primitives.push(Primitive::edge(
                    format!("grid-{}", tick.index),
                    style::gridline(),
                    Point {
                        x: c.padding,
                        y: tick.y,
                    },
                    Point {
                        x: c.right(),
                        y: tick.y,
                    },
                ));
            }
        }
    }

    fn push_series(&mut self, chart: &ChartModel, geo: &Geometry) {
        let half = MARKER_SIZE / 2.0;
        for (i, (p, value)) in geo.points.iter().zip(&chart.series).enumerate() {
            if let Some(next) = geo.points.get(i + 1) {
                self.primitives.push(Primitive::edge(
                    format!("line-{i}"),
                    style::data_line(),
                    *p,
                    *next,
                ));
            }
            self.primitives.push(Primitive::shape(
                format!("point-{i}"),
                format_number(*value),
                style::marker(),
                p.x - half,
                p.y - half,
                MARKER_SIZE,
                MARKER_SIZE,
            ));
        }
    }

    fn push_title(&mut self, chart: &ChartModel, c: &Canvas) {
        self.primitives.push(Primitive::shape(
            "title".to_owned(),
            chart.title.clone(),
            style::title(),
            c.padding,
            TITLE_TOP,
            c.graph_width(),
            TITLE_HEIGHT,
        ));
    }

    /// `mxfile` → `diagram` → `mxGraphModel` → `root` → cells.
    #[must_use]
    pub fn to_element(&self, cfg: &Config) -> Element {
        let mut root = Element::new("root")
            .child(Element::new("mxCell").attr("id", "0"))
            .child(Element::new("mxCell").attr("id", "1").attr("parent", "0"));
        for p in &self.primitives {
            root.push(p.to_element());
        }

        let mut file = Element::new("mxfile").attr("host", cfg.host.as_str());
        if let Some(ts) = &cfg.modified {
            file = file.attr("modified", ts.as_str());
        }
        file.attr("agent", cfg.agent.as_str())
            .attr("type", "device")
            .child(
                Element::new("diagram")
                    .attr("id", "diagram-1")
                    .attr("name", "Page-1")
                    .child(graph_model().child(root)),
            )
    }

    /// Serialized, indented XML with declaration.
    #[must_use]
    pub fn to_xml(&self, cfg: &Config) -> String {
        self.to_element(cfg).to_document()
    }
}

fn graph_model() -> Element {
    [
        ("dx", "0"),
        ("dy", "0"),
        ("grid", "1"),
        ("gridSize", "10"),
        ("guides", "1"),
        ("tooltips", "1"),
        ("connect", "1"),
        ("arrows", "1"),
        ("fold", "1"),
        ("page", "1"),
        ("pageScale", "1"),
        ("pageWidth", "850"),
        ("pageHeight", "1100"),
        ("math", "0"),
        ("shadow", "0"),
    ]
    .into_iter()
    .fold(Element::new("mxGraphModel"), |el, (k, v)| el.attr(k, v))
}

/// Number text as a JavaScript runtime would print it: `20` not `20.0`,
/// `NaN`, `Infinity`, exponent form outside `1e-6..1e21`.
#[must_use]
pub fn format_number(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_owned();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    if v == 0.0 {
        return "0".to_owned();
    }
    if (1e-6..1e21).contains(&v.abs()) {
        return v.to_string();
    }
    let sci = format!("{v:e}");
    match sci.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => sci,
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
