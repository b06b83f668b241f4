use approx::assert_relative_eq;
use chart_time_axis::api::{
    AxisOrientation, LevelTable, TickLabelLayout, TimeAxis, TimeAxisConfig, label_y,
};
use chart_time_axis::core::{TimeAxisTimeZone, TimeScale, TimeUnit, Viewport};
use chart_time_axis::render::{
    HeuristicTextMeasurer, LabelFont, NullRenderer, TextExtent, TextHAlign, TextMeasurer,
};

// 2023-11-15 00:00:00 UTC
const MIDNIGHT: f64 = 1_700_006_400.0;
const DAY: f64 = 86_400.0;

/// Every glyph is `advance` pixels wide, lines are `size_px` tall.
struct FixedWidthMeasurer {
    advance: f64,
}

impl TextMeasurer for FixedWidthMeasurer {
    fn measure(&self, text: &str, font: &LabelFont) -> TextExtent {
        TextExtent {
            width: self.advance * text.chars().count() as f64,
            height: font.size_px,
        }
    }
}

fn day_level(axis: &TimeAxis<NullRenderer>) -> usize {
    axis.catalog()
        .iter()
        .position(|level| {
            level.minor.time_unit == TimeUnit::Day && level.minor.format == "%e"
        })
        .expect("single-day level")
}

fn twelve_hour_level(axis: &TimeAxis<NullRenderer>) -> usize {
    axis.catalog()
        .iter()
        .position(|level| level.minor.time_unit == TimeUnit::Hour && level.minor.step == 12)
        .expect("12-hour level")
}

#[test]
fn single_step_labels_are_centered_in_their_interval() {
    let viewport = Viewport::new(800, 40);
    let start = MIDNIGHT + DAY / 2.0;
    let scale = TimeScale::for_viewport(start, start + 10.0 * DAY, viewport).expect("scale");
    let axis = TimeAxis::with_default_measurer(NullRenderer::default(), TimeAxisConfig::default())
        .expect("axis init");

    let labels = axis
        .render_labels(&scale, viewport, day_level(&axis), LevelTable::Minor)
        .expect("labels");
    let sixteenth = labels
        .iter()
        .find(|label| label.text == "16")
        .expect("label for Nov 16");

    assert!(sixteenth.centered);
    assert!(sixteenth.visible);
    assert_eq!(sixteenth.h_align, TextHAlign::Center);
    // Nov 16 noon is one day after the domain start: 80 px per day.
    assert_relative_eq!(sixteenth.x, 80.0, epsilon = 1e-6);
    assert_relative_eq!(
        sixteenth.span_end - sixteenth.span_start,
        HeuristicTextMeasurer.measure("16", &LabelFont::default()).width + 5.0,
        epsilon = 1e-9
    );
}

#[test]
fn stepped_labels_start_at_their_tick() {
    let viewport = Viewport::new(800, 40);
    let scale = TimeScale::for_viewport(MIDNIGHT - DAY / 4.0, MIDNIGHT + 3.0 * DAY, viewport)
        .expect("scale");
    let axis = TimeAxis::with_default_measurer(NullRenderer::default(), TimeAxisConfig::default())
        .expect("axis init");

    let labels = axis
        .render_labels(&scale, viewport, twelve_hour_level(&axis), LevelTable::Minor)
        .expect("labels");
    let midnight = labels
        .iter()
        .find(|label| label.key == 1_700_006_400_000)
        .expect("midnight tick");

    assert!(!midnight.centered);
    assert_eq!(midnight.h_align, TextHAlign::Left);
    assert_eq!(midnight.text, "12 AM");
    let tick_x = 800.0 * (DAY / 4.0) / (3.25 * DAY);
    assert_relative_eq!(midnight.span_start, tick_x, epsilon = 1e-6);
    assert_relative_eq!(midnight.x, tick_x + 5.0, epsilon = 1e-6);
}

#[test]
fn fixed_offset_calendar_moves_ticks_to_local_midnight() {
    let viewport = Viewport::new(800, 40);
    let mut scale = TimeScale::for_viewport(MIDNIGHT - DAY / 4.0, MIDNIGHT + 3.0 * DAY, viewport)
        .expect("scale");
    scale.set_time_zone(TimeAxisTimeZone::FixedOffsetMinutes { minutes: 60 });
    let axis = TimeAxis::with_default_measurer(NullRenderer::default(), TimeAxisConfig::default())
        .expect("axis init");

    let labels = axis
        .render_labels(&scale, viewport, twelve_hour_level(&axis), LevelTable::Minor)
        .expect("labels");

    // 23:00 UTC is midnight at UTC+01:00.
    let local_midnight = labels
        .iter()
        .find(|label| label.key == 1_700_002_800_000)
        .expect("local midnight tick");
    assert_eq!(local_midnight.text, "12 AM");
    assert!(labels.iter().all(|label| label.key != 1_700_006_400_000));
}

#[test]
fn labels_touching_the_axis_ends_are_hidden() {
    let viewport = Viewport::new(800, 40);
    let scale = TimeScale::for_viewport(MIDNIGHT, MIDNIGHT + 3.0 * DAY, viewport).expect("scale");
    let axis = TimeAxis::with_default_measurer(NullRenderer::default(), TimeAxisConfig::default())
        .expect("axis init");

    let labels = axis
        .render_labels(&scale, viewport, twelve_hour_level(&axis), LevelTable::Minor)
        .expect("labels");

    let first = labels.first().expect("first label");
    let last = labels.last().expect("last label");
    assert_eq!(first.span_start, 0.0);
    assert!(!first.visible);
    assert!(!last.visible);
    for label in labels.iter().filter(|label| label.visible) {
        assert!(label.span_start > 0.0 && label.span_end < 800.0);
    }
}

#[test]
fn multi_year_levels_have_no_visible_major_labels() {
    let viewport = Viewport::new(400, 40);
    let scale = TimeScale::for_viewport(MIDNIGHT, MIDNIGHT + 50.0 * 365.25 * DAY, viewport)
        .expect("scale");
    let axis = TimeAxis::with_default_measurer(NullRenderer::default(), TimeAxisConfig::default())
        .expect("axis init");

    let majors = axis
        .render_labels(&scale, viewport, 4, LevelTable::Major)
        .expect("major labels");

    assert!(majors.iter().all(|label| !label.visible));
}

#[test]
fn top_orientation_measures_label_rows_from_the_bottom_edge() {
    assert_eq!(label_y(AxisOrientation::Bottom, 12.0, 40.0, 5.0), 12.0);
    assert_eq!(label_y(AxisOrientation::Top, 12.0, 40.0, 5.0), 38.0);
    assert_eq!(label_y(AxisOrientation::Top, 12.0, 40.0, 0.0), 28.0);

    let viewport = Viewport::new(800, 40);
    let scale = TimeScale::for_viewport(MIDNIGHT, MIDNIGHT + 3.0 * DAY, viewport).expect("scale");
    let config = TimeAxisConfig::default().with_orientation(AxisOrientation::Top);
    let axis =
        TimeAxis::with_default_measurer(NullRenderer::default(), config).expect("axis init");
    let level = twelve_hour_level(&axis);

    let minor = axis
        .render_labels(&scale, viewport, level, LevelTable::Minor)
        .expect("minor");
    let major = axis
        .render_labels(&scale, viewport, level, LevelTable::Major)
        .expect("major");

    // Tick length is 24 px: two 12 px label rows, shifted by 2 x 5 px padding.
    assert!(minor.iter().all(|label| label.y == 38.0));
    assert!(major.iter().all(|label| label.y == 26.0));
}

#[test]
fn custom_measurer_drives_visibility() {
    let viewport = Viewport::new(800, 40);
    let scale = TimeScale::for_viewport(MIDNIGHT - DAY / 4.0, MIDNIGHT + 3.0 * DAY, viewport)
        .expect("scale");
    let font = LabelFont::default();
    let narrow = FixedWidthMeasurer { advance: 1.0 };
    let wide = FixedWidthMeasurer { advance: 200.0 };
    let axis = TimeAxis::with_default_measurer(NullRenderer::default(), TimeAxisConfig::default())
        .expect("axis init");
    let descriptor = &axis.catalog()[twelve_hour_level(&axis)].minor;

    let layout = |measurer: &FixedWidthMeasurer| {
        TickLabelLayout {
            scale: &scale,
            measurer,
            font: &font,
            label_padding: 5.0,
            available_width: 800.0,
            label_y: 12.0,
        }
        .layout(descriptor)
    };

    let narrow_visible = layout(&narrow).iter().filter(|label| label.visible).count();
    let wide_visible = layout(&wide).iter().filter(|label| label.visible).count();
    assert!(narrow_visible > wide_visible);
    assert_eq!(wide_visible, 0);
}

#[test]
fn out_of_range_level_is_an_error() {
    let viewport = Viewport::new(800, 40);
    let scale = TimeScale::for_viewport(MIDNIGHT, MIDNIGHT + DAY, viewport).expect("scale");
    let axis = TimeAxis::with_default_measurer(NullRenderer::default(), TimeAxisConfig::default())
        .expect("axis init");

    assert!(
        axis.render_labels(&scale, viewport, 29, LevelTable::Minor)
            .is_err()
    );
}
