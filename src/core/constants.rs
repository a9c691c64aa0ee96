//! A collection of constants.

/// Canvas width in pixels
pub const CANVAS_WIDTH: f64 = 600.0;
/// Canvas height in pixels
pub const CANVAS_HEIGHT: f64 = 400.0;
/// Space between the canvas edge and the plot area, on every side
pub const CANVAS_PADDING: f64 = 60.0;
/// Extra horizontal inset so the first and last points stay off the plot edges
pub const X_OFFSET: f64 = 30.0;

/// The value axis is divided into this many equal steps (six tick labels)
pub const TICK_STEPS: u32 = 5;

/// Marker diameter for plotted points
pub const MARKER_SIZE: f64 = 8.0;

/// Width and height of category / tick label boxes
pub const LABEL_WIDTH: f64 = 40.0;
pub const LABEL_HEIGHT: f64 = 20.0;
/// Gap between the horizontal axis and the category labels below it
pub const X_LABEL_GAP: f64 = 5.0;
/// Tick labels sit this far left of the vertical axis (right edge at `padding - 5`)
pub const Y_LABEL_INSET: f64 = 45.0;

/// Title box top edge and height
pub const TITLE_TOP: f64 = 10.0;
pub const TITLE_HEIGHT: f64 = 30.0;

/// Used when the input has no `title` directive.
pub const DEFAULT_TITLE: &str = "Untitled Chart";
/// Value axis range used when the input has no `y-axis` range.
pub const DEFAULT_Y_MIN: f64 = 0.0;
pub const DEFAULT_Y_MAX: f64 = 100.0;

/// `mxfile` metadata written by default
pub const DEFAULT_HOST: &str = "Electron";
pub const DEFAULT_AGENT: &str = "MermaidCLI";
