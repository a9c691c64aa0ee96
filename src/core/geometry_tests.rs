use approx::assert_relative_eq;
use proptest::prelude::*;

use super::*;
use crate::core::data::{ValueAxis, parse};

fn chart(categories: usize, series: Vec<f64>) -> ChartModel {
    ChartModel {
        categories: (0..categories).map(|i| format!("c{i}")).collect(),
        series,
        ..ChartModel::default()
    }
}

#[test]
fn sales_points() {
    let model = parse("x-axis [Jan, Feb, Mar]\ny-axis \"USD\" 0 --> 100\nline [10, 50, 90]");
    let geo = compute_geometry(&model, &Canvas::default());

    assert_eq!(geo.points.len(), 3);
    // usable width 420 over two gaps
    assert_relative_eq!(geo.points[0].x, 90.0, epsilon = 1e-9);
    assert_relative_eq!(geo.points[1].x, 300.0, epsilon = 1e-9);
    assert_relative_eq!(geo.points[2].x, 510.0, epsilon = 1e-9);

    assert_relative_eq!(geo.points[0].y, 312.0, epsilon = 1e-9);
    assert_relative_eq!(geo.points[1].y, 200.0, epsilon = 1e-9);
    assert_relative_eq!(geo.points[2].y, 88.0, epsilon = 1e-9);
}

#[test]
fn single_category_sits_at_left_inset() {
    let geo = compute_geometry(&chart(1, vec![42.0]), &Canvas::default());
    assert_eq!(geo.points.len(), 1);
    assert_relative_eq!(geo.points[0].x, 90.0, epsilon = 1e-9);
    assert!(geo.points[0].x.is_finite());
}

#[test]
fn no_categories_uses_full_width_step() {
    let canvas = Canvas::default();
    assert_relative_eq!(x_step(&canvas, 0), 420.0, epsilon = 1e-9);
    assert_relative_eq!(x_step(&canvas, 1), 420.0, epsilon = 1e-9);
    assert_relative_eq!(x_step(&canvas, 5), 105.0, epsilon = 1e-9);

    let geo = compute_geometry(&chart(0, vec![1.0, 2.0]), &canvas);
    assert_relative_eq!(geo.points[1].x, 510.0, epsilon = 1e-9);
}

#[test]
fn short_series_produces_fewer_points() {
    let geo = compute_geometry(&chart(4, vec![1.0, 2.0]), &Canvas::default());
    assert_eq!(geo.points.len(), 2);
    assert_relative_eq!(geo.points[1].x, 230.0, epsilon = 1e-9);
}

#[test]
fn long_series_extrapolates_past_plot() {
    let canvas = Canvas::default();
    let geo = compute_geometry(&chart(2, vec![1.0, 2.0, 3.0]), &canvas);
    assert_eq!(geo.points.len(), 3);
    assert_relative_eq!(geo.points[2].x, 930.0, epsilon = 1e-9);
    assert!(geo.points[2].x > canvas.right());
}

#[test]
fn nan_value_propagates() {
    let geo = compute_geometry(&chart(2, vec![f64::NAN, 5.0]), &Canvas::default());
    assert!(geo.points[0].y.is_nan());
    assert!(geo.points[1].y.is_finite());
}

#[test]
fn degenerate_range_is_not_finite() {
    let mut model = chart(2, vec![3.0, 4.0]);
    model.value_axis = ValueAxis {
        label: String::new(),
        min: 3.0,
        max: 3.0,
    };
    let geo = compute_geometry(&model, &Canvas::default());
    assert!(geo.points[0].y.is_nan());
    assert!(geo.points[1].y.is_infinite());
}

#[test]
fn geometry_keeps_canvas() {
    let canvas = Canvas {
        width: 800.0,
        ..Canvas::default()
    };
    let geo = compute_geometry(&chart(2, vec![0.0, 100.0]), &canvas);
    assert_eq!(geo.canvas, canvas);
    assert_relative_eq!(geo.points[1].x, 710.0, epsilon = 1e-9);
    assert_relative_eq!(geo.points[1].y, 60.0, epsilon = 1e-9);
}

proptest! {
    #[test]
    fn x_matches_closed_form(len in 2usize..40, raw in 0usize..40) {
        let i = raw % len;
        let canvas = Canvas::default();
        let geo = compute_geometry(&chart(len, vec![50.0; len]), &canvas);
        let expected = canvas.padding + canvas.x_offset
            + i as f64 * ((canvas.width - 2.0 * canvas.padding - 2.0 * canvas.x_offset) / (len - 1) as f64);
        prop_assert_eq!(geo.points.len(), len);
        prop_assert_eq!(geo.points[i].x, expected);
    }

    #[test]
    fn larger_values_sit_higher(a in -1000.0f64..1000.0, b in -1000.0f64..1000.0) {
        let mut model = chart(2, vec![a, b]);
        model.value_axis.min = -1000.0;
        model.value_axis.max = 1000.0;
        let geo = compute_geometry(&model, &Canvas::default());
        if b - a > 1e-6 {
            prop_assert!(geo.points[0].y > geo.points[1].y);
        }
    }
}

#[test]
fn ticks_span_axis_bottom_to_top() {
    let canvas = Canvas::default();
    let axis = ValueAxis {
        label: "USD".to_owned(),
        min: 0.0,
        max: 100.0,
    };
    let ticks = value_ticks(&axis, &canvas);

    let values: Vec<f64> = ticks.iter().map(|t| t.value).collect();
    assert_eq!(values, vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
    assert_relative_eq!(ticks[0].y, canvas.height - canvas.padding, epsilon = 1e-9);
    assert_relative_eq!(ticks[5].y, canvas.padding, epsilon = 1e-9);
    assert!(ticks.windows(2).all(|w| w[1].y < w[0].y));
    assert_eq!(ticks[3].index, 3);
}

#[test]
fn tick_labels_are_rounded_and_placed_at_rounded_value() {
    let canvas = Canvas::default();
    let axis = ValueAxis {
        label: String::new(),
        min: 0.0,
        max: 7.0,
    };
    let ticks = value_ticks(&axis, &canvas);
    let values: Vec<f64> = ticks.iter().map(|t| t.value).collect();
    // 1.4, 2.8, 4.2, 5.6
    assert_eq!(values, vec![0.0, 1.0, 3.0, 4.0, 6.0, 7.0]);
    assert_relative_eq!(ticks[1].y, 300.0, epsilon = 1e-9);
}

#[test]
fn round_half_up_matches_ties_toward_positive() {
    assert_eq!(round_half_up(2.5), 3.0);
    assert_eq!(round_half_up(-2.5), -2.0);
    assert_eq!(round_half_up(-2.6), -3.0);
    assert_eq!(round_half_up(0.499_999_999_999_999_94), 0.0);
    assert!(round_half_up(f64::NAN).is_nan());
    assert_eq!(round_half_up(f64::INFINITY), f64::INFINITY);
}

proptest! {
    #[test]
    fn tick_screen_positions_descend(min in -500i32..500, span in 1i32..1000) {
        let axis = ValueAxis {
            label: String::new(),
            min: f64::from(min),
            max: f64::from(min + span),
        };
        let canvas = Canvas::default();
        let ticks = value_ticks(&axis, &canvas);
        prop_assert_eq!(ticks.len(), 6);
        prop_assert!((ticks[0].y - 340.0).abs() < 1e-9);
        prop_assert!((ticks[5].y - 60.0).abs() < 1e-9);
        prop_assert!(ticks.windows(2).all(|w| w[1].y <= w[0].y));
    }
}
