//! Time axis components: interval catalog, level selection, label layout,
//! tick lengths and the `TimeAxis` facade that runs a render pass.

mod axis_config;
mod axis_height_estimator;
mod interval_catalog;
mod label_fit_estimator;
mod label_format;
mod label_set;
mod tick_label_renderer;
mod tick_length_adjuster;
mod tick_level_selector;
mod time_axis;
mod time_axis_render_pass;
mod width_cache;

pub use axis_config::{AxisOrientation, TimeAxisConfig};
pub use interval_catalog::{IntervalCatalog, IntervalDescriptor, TickLevel};
pub use label_fit_estimator::LabelFitEstimator;
pub use label_format::{format_instant, format_local, validate_format, worst_case_datetime};
pub use label_set::{LabelDiff, LabelSet};
pub use tick_label_renderer::{
    LabelPlacement, LevelTable, TickLabelLayout, label_fits_within, label_instants, label_y,
    tick_boundaries,
};
pub use tick_length_adjuster::{
    SPARSE_AXIS_SPACING_FACTOR, TickLengthPlan, TickMark, TickMarkKind, adjust_tick_lengths,
    needs_unlabeled_ticks,
};
pub use tick_level_selector::{
    LevelSelection, SPAN_GROWTH_TOLERANCE, SelectorState, domain_span, select_tick_level,
    starting_point,
};
pub use time_axis::TimeAxis;
pub use time_axis_render_pass::TimeAxisRenderPass;
pub use width_cache::{WidthCacheStats, WorstCaseWidthCache};
