use chart_time_axis::api::{
    IntervalCatalog, LevelTable, TickLengthPlan, TimeAxis, TimeAxisConfig, adjust_tick_lengths,
};
use chart_time_axis::core::{TimeScale, Viewport};
use chart_time_axis::render::NullRenderer;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const BASE: f64 = 1_700_000_000.0;

fn bench_level_selection_steady_domain(c: &mut Criterion) {
    let viewport = Viewport::new(1920, 40);
    let scale = TimeScale::for_viewport(BASE, BASE + 86_400.0, viewport).expect("valid scale");
    let mut axis = TimeAxis::with_default_measurer(NullRenderer::default(), TimeAxisConfig::default())
        .expect("axis init");

    c.bench_function("level_selection_steady_domain", |b| {
        b.iter(|| {
            let _ = axis
                .select_level(black_box(&scale), viewport)
                .expect("select");
        })
    });
}

fn bench_level_selection_zoom_out(c: &mut Criterion) {
    let viewport = Viewport::new(1920, 40);
    let mut axis = TimeAxis::with_default_measurer(NullRenderer::default(), TimeAxisConfig::default())
        .expect("axis init");
    let spans = [60.0, 3_600.0, 86_400.0, 30.0 * 86_400.0, 3_650.0 * 86_400.0];

    c.bench_function("level_selection_zoom_out", |b| {
        b.iter(|| {
            axis.reset_selector_state();
            for span in spans {
                let scale =
                    TimeScale::for_viewport(BASE, BASE + span, viewport).expect("valid scale");
                let _ = axis.select_level(black_box(&scale), viewport).expect("select");
            }
        })
    });
}

fn bench_label_layout_hours(c: &mut Criterion) {
    let viewport = Viewport::new(1920, 40);
    let scale = TimeScale::for_viewport(BASE, BASE + 2.0 * 86_400.0, viewport).expect("valid scale");
    let mut axis = TimeAxis::with_default_measurer(NullRenderer::default(), TimeAxisConfig::default())
        .expect("axis init");
    let level = axis.select_level(&scale, viewport).expect("select").level;

    c.bench_function("label_layout_hours", |b| {
        b.iter(|| {
            let _ = axis
                .render_labels(black_box(&scale), viewport, level, LevelTable::Minor)
                .expect("labels");
        })
    });
}

fn bench_tick_marks_with_unlabeled(c: &mut Criterion) {
    let scale = TimeScale::for_viewport(BASE, BASE + 600.0, Viewport::new(1920, 40))
        .expect("valid scale");
    let catalog = IntervalCatalog::standard();
    let plan = TickLengthPlan {
        tick_length: 24.0,
        unlabeled_length: 5.0,
    };

    c.bench_function("tick_marks_with_unlabeled", |b| {
        b.iter(|| {
            let _ = adjust_tick_lengths(black_box(&scale), &catalog, 22, 1_920.0, plan);
        })
    });
}

fn bench_full_render_pass(c: &mut Criterion) {
    let viewport = Viewport::new(1920, 40);
    let mut scale = TimeScale::for_viewport(BASE, BASE + 86_400.0, viewport).expect("valid scale");
    let mut axis = TimeAxis::with_default_measurer(NullRenderer::default(), TimeAxisConfig::default())
        .expect("axis init");

    c.bench_function("full_render_pass_with_pan", |b| {
        b.iter(|| {
            scale.pan_by_delta(60.0).expect("pan");
            let _ = axis.render(black_box(&scale), viewport).expect("render");
        })
    });
}

criterion_group!(
    benches,
    bench_level_selection_steady_domain,
    bench_level_selection_zoom_out,
    bench_label_layout_hours,
    bench_tick_marks_with_unlabeled,
    bench_full_render_pass
);
criterion_main!(benches);
