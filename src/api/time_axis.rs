use crate::error::AxisResult;
use crate::render::{HeuristicTextMeasurer, Renderer, TextMeasurer};

use super::axis_config::TimeAxisConfig;
use super::axis_height_estimator::{estimate_required_time_axis_height, estimate_tick_length};
use super::interval_catalog::IntervalCatalog;
use super::label_set::LabelSet;
use super::tick_level_selector::SelectorState;
use super::width_cache::{WidthCacheStats, WorstCaseWidthCache};

/// Adaptive time axis facade consumed by host charts.
///
/// `TimeAxis` owns the hysteresis state and the label sets of the previous
/// pass, so one instance must be used for one axis. Passes take `&mut self`
/// and never interleave.
pub struct TimeAxis<R: Renderer, M: TextMeasurer = HeuristicTextMeasurer> {
    pub(super) renderer: R,
    pub(super) measurer: M,
    pub(super) config: TimeAxisConfig,
    pub(super) catalog: IntervalCatalog,
    pub(super) selector_state: SelectorState,
    pub(super) width_cache: WorstCaseWidthCache,
    pub(super) previous_minor_labels: LabelSet,
    pub(super) previous_major_labels: LabelSet,
}

impl<R: Renderer> TimeAxis<R, HeuristicTextMeasurer> {
    /// Axis with the heuristic measurer and the standard catalog.
    pub fn with_default_measurer(renderer: R, config: TimeAxisConfig) -> AxisResult<Self> {
        Self::new(renderer, HeuristicTextMeasurer, config)
    }
}

impl<R: Renderer, M: TextMeasurer> TimeAxis<R, M> {
    pub fn new(renderer: R, measurer: M, config: TimeAxisConfig) -> AxisResult<Self> {
        config.validate()?;
        let catalog = IntervalCatalog::standard();
        Ok(Self {
            renderer,
            measurer,
            config,
            selector_state: SelectorState::initial(&catalog),
            catalog,
            width_cache: WorstCaseWidthCache::default(),
            previous_minor_labels: LabelSet::default(),
            previous_major_labels: LabelSet::default(),
        })
    }

    /// Replaces the catalog and restarts hysteresis and label diffs.
    #[must_use]
    pub fn with_catalog(mut self, catalog: IntervalCatalog) -> Self {
        self.selector_state = SelectorState::initial(&catalog);
        self.catalog = catalog;
        self.previous_minor_labels = LabelSet::default();
        self.previous_major_labels = LabelSet::default();
        self
    }

    #[must_use]
    pub fn config(&self) -> &TimeAxisConfig {
        &self.config
    }

    /// Applies a new config; cached widths are dropped since fonts may differ.
    pub fn set_config(&mut self, config: TimeAxisConfig) -> AxisResult<()> {
        config.validate()?;
        self.config = config;
        self.width_cache.clear();
        Ok(())
    }

    #[must_use]
    pub fn catalog(&self) -> &IntervalCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn measurer(&self) -> &M {
        &self.measurer
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    #[must_use]
    pub fn selector_state(&self) -> SelectorState {
        self.selector_state
    }

    /// Overrides the hysteresis state; the index is clamped into the catalog.
    pub fn set_selector_state(&mut self, state: SelectorState) {
        self.selector_state = SelectorState {
            previous_span: state.previous_span,
            previous_index: state.previous_index.min(self.catalog.finest_index()),
        };
    }

    pub fn reset_selector_state(&mut self) {
        self.selector_state = SelectorState::initial(&self.catalog);
    }

    #[must_use]
    pub fn width_cache_stats(&self) -> WidthCacheStats {
        self.width_cache.stats()
    }

    pub fn clear_width_cache(&mut self) {
        self.width_cache.clear();
    }

    #[must_use]
    pub fn tick_length(&self) -> f64 {
        estimate_tick_length(&self.config, &self.measurer)
    }

    /// Height the axis needs: tick length plus padding on both sides.
    #[must_use]
    pub fn required_height(&self) -> f64 {
        estimate_required_time_axis_height(&self.config, &self.measurer)
    }
}
