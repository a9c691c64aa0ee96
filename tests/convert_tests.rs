use mermaid2drawio::{Canvas, Config, convert, convert_with, parse};

#[test]
fn convert_is_deterministic() {
    let text = "title \"Sales\"\nx-axis [Jan, Feb, Mar]\ny-axis \"USD\" 0 --> 100\nline [10, 50, 90]";
    assert_eq!(convert(text), convert(text));
}

#[test]
fn garbage_input_still_produces_document() {
    let xml = convert("this is not a chart\n[[[\n-->");
    assert!(xml.contains(r#"id="title" value="Untitled Chart""#));
    assert!(xml.contains(r#"id="axis-x""#));
    assert!(!xml.contains(r#"id="point-"#));
    assert_eq!(xml.matches(r#"id="ylabel-"#).count(), 6);
}

#[test]
fn parse_is_exposed() {
    let chart = parse("y-axis 0 --> 50");
    assert_eq!(chart.value_axis.label, "");
    assert_eq!(chart.value_axis.max, 50.0);
}

#[test]
fn custom_config_flows_through() {
    let cfg = Config::builder()
        .canvas(Canvas {
            width: 800.0,
            ..Canvas::default()
        })
        .agent("integration")
        .modified("2025-01-01T00:00:00.000Z")
        .build()
        .unwrap();
    let xml = convert_with("x-axis [a, b]\nline [0, 100]", &cfg);
    assert!(xml.contains(r#"agent="integration""#));
    assert!(xml.contains(r#"modified="2025-01-01T00:00:00.000Z""#));
    // axis-x ends at width - padding
    assert!(xml.contains(r#"<mxPoint x="740" y="340" as="targetPoint"/>"#));
}
