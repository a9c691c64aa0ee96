//! Geometry helpers: data values to canvas pixels.

use tracing::debug;

use crate::core::{
    config::Canvas,
    constants::TICK_STEPS,
    data::{ChartModel, ValueAxis},
};

/// One plotted point in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Layout of one chart on one canvas. Built once, read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    pub canvas: Canvas,
    /// One entry per series value, same order.
    pub points: Vec<Point>,
}

/// Horizontal distance between neighbouring categories.
///
/// With fewer than two categories the whole usable width is returned, so a
/// lone point sits at the left inset instead of dividing by zero.
#[inline]
#[must_use]
pub fn x_step(canvas: &Canvas, categories: usize) -> f64 {
    if categories > 1 {
        canvas.usable_width() / (categories - 1) as f64
    } else {
        canvas.usable_width()
    }
}

/// Place every series value on `canvas`.
///
/// * x depends only on the index and the category count; values past the
///   last category keep stepping right and may leave the plot area.
/// * y is inverted so larger values sit higher.
/// * `NaN` values and an empty value range come out as non-finite
///   coordinates, nothing is rejected.
#[must_use]
pub fn compute_geometry(chart: &ChartModel, canvas: &Canvas) -> Geometry {
    let step = x_step(canvas, chart.categories.len());
    let left = canvas.padding + canvas.x_offset;

    let points: Vec<Point> = chart
        .series
        .iter()
        .enumerate()
        .map(|(i, &v)| Point {
            x: left + i as f64 * step,
            y: canvas.value_to_y(v, &chart.value_axis),
        })
        .collect();

    if chart.series.len() > chart.categories.len() {
        debug!(
            categories = chart.categories.len(),
            points = points.len(),
            "series longer than category axis, extra points extrapolated"
        );
    }
    debug!(points = points.len(), x_step = step, "computed geometry");

    Geometry {
        canvas: *canvas,
        points,
    }
}

/// One labelled step on the value axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub index: u32,
    /// Displayed value, already rounded to an integer.
    pub value: f64,
    /// Screen y of the rounded value.
    pub y: f64,
}

/// `TICK_STEPS + 1` evenly spaced ticks from `axis.min` to `axis.max`,
/// bottom first. The label is rounded and positioned at its rounded value,
/// so a fractional range puts the ticks slightly off the exact fractions.
#[must_use]
pub fn value_ticks(axis: &ValueAxis, canvas: &Canvas) -> Vec<Tick> {
    (0..=TICK_STEPS)
        .map(|index| {
            let fraction = f64::from(index) / f64::from(TICK_STEPS);
            let value = round_half_up(axis.min + axis.span() * fraction);
            Tick {
                index,
                value,
                y: canvas.value_to_y(value, axis),
            }
        })
        .collect()
}

/// Round to the nearest integer, ties toward +∞ (`-2.5` → `-2`).
#[inline]
#[must_use]
pub fn round_half_up(v: f64) -> f64 {
    let floor = v.floor();
    if v - floor >= 0.5 { floor + 1.0 } else { floor }
}

#[cfg(test)]
#[path = "geometry_tests.rs"]
mod tests;
