#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use chart_time_axis::AxisError;
use chart_time_axis::api::{TimeAxis, TimeAxisConfig};
use chart_time_axis::core::{TimeScale, Viewport};
use chart_time_axis::render::{CairoRenderer, LabelFont, PangoTextMeasurer, TextMeasurer};

const BASE: f64 = 1_700_000_000.0;

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 40).expect_err("invalid width must fail");
    assert!(matches!(err, AxisError::InvalidData(_)));
}

#[test]
fn cairo_renderer_draws_every_frame_primitive() {
    let viewport = Viewport::new(900, 40);
    let scale = TimeScale::for_viewport(BASE, BASE + 8.0 * 3_600.0, viewport).expect("scale");
    let renderer = CairoRenderer::new(900, 40).expect("renderer");
    let measurer = PangoTextMeasurer::new().expect("measurer");
    let mut axis = TimeAxis::new(renderer, measurer, TimeAxisConfig::default()).expect("axis init");

    let pass = axis.render(&scale, viewport).expect("render");
    let stats = axis.into_renderer().last_stats();

    assert_eq!(stats.lines_drawn, pass.frame.lines.len());
    assert_eq!(stats.texts_drawn, pass.frame.texts.len());
    assert!(stats.texts_drawn > 0);
}

#[test]
fn cairo_renderer_can_draw_on_external_context() {
    let viewport = Viewport::new(600, 40);
    let scale = TimeScale::for_viewport(BASE, BASE + 600.0, viewport).expect("scale");
    let renderer = CairoRenderer::new(600, 40).expect("renderer");
    let mut axis = TimeAxis::with_default_measurer(renderer, TimeAxisConfig::default())
        .expect("axis init");

    let surface = ImageSurface::create(Format::ARgb32, 600, 40).expect("surface");
    let context = Context::new(&surface).expect("context");
    let pass = axis
        .render_on_cairo_context(&context, &scale, viewport)
        .expect("render on context");

    assert_eq!(axis.renderer().last_stats().lines_drawn, pass.frame.lines.len());
}

#[test]
fn pango_measurer_reports_positive_extents() {
    let measurer = PangoTextMeasurer::new().expect("measurer");
    let font = LabelFont::default();

    let wide = measurer.measure("September 29, 9999", &font);
    let narrow = measurer.measure("29", &font);

    assert!(wide.width > narrow.width);
    assert!(narrow.height > 0.0);
    assert_eq!(measurer.measure("", &font).width, 0.0);
}
