use chart_time_axis::AxisError;
use chart_time_axis::api::{AxisOrientation, TimeAxis, TimeAxisConfig};
use chart_time_axis::render::{LabelFont, NullRenderer};

#[test]
fn config_json_round_trip_preserves_fields() {
    let config = TimeAxisConfig::default()
        .with_orientation(AxisOrientation::Top)
        .with_tick_label_padding_px(8.0)
        .with_tick_length_px(20.0)
        .with_major_label_font(LabelFont::new("Serif", 14.0));

    let json = config.to_json_pretty().expect("serialize");
    let parsed = TimeAxisConfig::from_json_str(&json).expect("parse");

    assert_eq!(parsed, config);
    assert!(json.contains("\"orientation\": \"top\""));
}

#[test]
fn partial_json_falls_back_to_defaults() {
    let parsed = TimeAxisConfig::from_json_str(r#"{"orientation": "TOP"}"#).expect("parse");

    assert_eq!(parsed.orientation, AxisOrientation::Top);
    assert_eq!(parsed.tick_label_padding_px, 5.0);
    assert_eq!(parsed.tick_length_px, None);
}

#[test]
fn unknown_orientation_in_json_is_rejected() {
    let result = TimeAxisConfig::from_json_str(r#"{"orientation": "left"}"#);
    assert!(matches!(result, Err(AxisError::InvalidData(message)) if message.contains("left")));
}

#[test]
fn invalid_config_is_rejected_by_the_axis() {
    let config = TimeAxisConfig::default().with_minor_label_font(LabelFont::new("Sans", 0.0));
    assert!(TimeAxis::with_default_measurer(NullRenderer::default(), config.clone()).is_err());

    let mut axis =
        TimeAxis::with_default_measurer(NullRenderer::default(), TimeAxisConfig::default())
            .expect("axis init");
    assert!(axis.set_config(config).is_err());
    assert_eq!(axis.config(), &TimeAxisConfig::default());
}

#[test]
fn orientation_string_builder_reports_the_bad_value() {
    let error = TimeAxisConfig::default()
        .with_orientation_str("diagonal")
        .expect_err("must fail");
    assert_eq!(
        error.to_string(),
        "unsupported orientation: `diagonal` (expected `top` or `bottom`)"
    );
}
