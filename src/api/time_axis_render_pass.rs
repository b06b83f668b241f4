use tracing::debug;

use crate::core::{AxisTimeScale, Viewport};
use crate::error::{AxisError, AxisResult};
use crate::render::{LinePrimitive, RenderFrame, Renderer, TextMeasurer, TextPrimitive};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

use super::axis_config::AxisOrientation;
use super::interval_catalog::TickLevel;
use super::label_fit_estimator::LabelFitEstimator;
use super::label_set::{LabelDiff, LabelSet};
use super::tick_label_renderer::{LabelPlacement, LevelTable, TickLabelLayout, label_y};
use super::tick_length_adjuster::{TickLengthPlan, TickMark, adjust_tick_lengths};
use super::tick_level_selector::{LevelSelection, domain_span, select_tick_level};
use super::time_axis::TimeAxis;

/// Everything one render pass produced.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeAxisRenderPass {
    pub selection: LevelSelection,
    pub minor_labels: LabelSet,
    pub major_labels: LabelSet,
    /// Changes against the previous pass of the same axis.
    pub minor_diff: LabelDiff,
    pub major_diff: LabelDiff,
    pub tick_marks: Vec<TickMark>,
    pub frame: RenderFrame,
}

impl<R: Renderer, M: TextMeasurer> TimeAxis<R, M> {
    /// Chooses the tick level for the current domain and width, updating the
    /// hysteresis state.
    pub fn select_level<S>(&mut self, scale: &S, viewport: Viewport) -> AxisResult<LevelSelection>
    where
        S: AxisTimeScale + ?Sized,
    {
        ensure_viewport(viewport)?;

        let mut estimator = LabelFitEstimator::new(
            scale,
            &self.measurer,
            viewport.width_px(),
            self.config.tick_label_padding_px,
            &self.config.minor_label_font,
            &self.config.major_label_font,
        )
        .with_cache(&mut self.width_cache);
        let selection = select_tick_level(
            &self.catalog,
            self.selector_state,
            domain_span(scale.domain()),
            |level| estimator.level_fits(level),
        );
        self.selector_state = selection.state;

        debug!(
            level = selection.level,
            starting_point = selection.starting_point,
            fit_checks = selection.fit_checks,
            fit_found = selection.fit_found,
            "time axis level selected"
        );
        Ok(selection)
    }

    /// Candidate labels of one series at `level`, visible or not.
    pub fn render_labels<S>(
        &self,
        scale: &S,
        viewport: Viewport,
        level: usize,
        table: LevelTable,
    ) -> AxisResult<Vec<LabelPlacement>>
    where
        S: AxisTimeScale + ?Sized,
    {
        ensure_viewport(viewport)?;
        let tick_level = self.tick_level(level)?;
        let font = match table {
            LevelTable::Minor => &self.config.minor_label_font,
            LevelTable::Major => &self.config.major_label_font,
        };

        let layout = TickLabelLayout {
            scale,
            measurer: &self.measurer,
            font,
            label_padding: self.config.tick_label_padding_px,
            available_width: viewport.width_px(),
            label_y: label_y(
                self.config.orientation,
                table.label_offset(self.tick_length()),
                viewport.height_px(),
                self.config.tick_label_padding_px,
            ),
        };
        Ok(layout.layout(table.descriptor(tick_level)))
    }

    /// Tick marks of `level` with minor/major lengths applied, plus unlabeled
    /// marks one level finer when the axis is sparse.
    pub fn adjust_tick_length<S>(
        &self,
        scale: &S,
        viewport: Viewport,
        level: usize,
    ) -> AxisResult<Vec<TickMark>>
    where
        S: AxisTimeScale + ?Sized,
    {
        ensure_viewport(viewport)?;
        let tick_level = self.tick_level(level)?;

        let estimator = LabelFitEstimator::new(
            scale,
            &self.measurer,
            viewport.width_px(),
            self.config.tick_label_padding_px,
            &self.config.minor_label_font,
            &self.config.major_label_font,
        );
        let raw_minor_spacing = estimator.raw_interval_spacing(&tick_level.minor);

        Ok(adjust_tick_lengths(
            scale,
            &self.catalog,
            level,
            raw_minor_spacing,
            TickLengthPlan {
                tick_length: self.tick_length(),
                unlabeled_length: self.config.tick_label_padding_px,
            },
        ))
    }

    /// Runs a full pass without handing the frame to the renderer.
    pub fn build_render_pass<S>(
        &mut self,
        scale: &S,
        viewport: Viewport,
    ) -> AxisResult<TimeAxisRenderPass>
    where
        S: AxisTimeScale + ?Sized,
    {
        let selection = self.select_level(scale, viewport)?;
        let minor_labels = LabelSet::from_placements(self.render_labels(
            scale,
            viewport,
            selection.level,
            LevelTable::Minor,
        )?);
        let major_labels = LabelSet::from_placements(self.render_labels(
            scale,
            viewport,
            selection.level,
            LevelTable::Major,
        )?);
        let tick_marks = self.adjust_tick_length(scale, viewport, selection.level)?;

        let minor_diff = minor_labels.diff(&self.previous_minor_labels);
        let major_diff = major_labels.diff(&self.previous_major_labels);
        let frame = self.compose_frame(viewport, &tick_marks, &minor_labels, &major_labels);

        self.previous_minor_labels = minor_labels.clone();
        self.previous_major_labels = major_labels.clone();

        Ok(TimeAxisRenderPass {
            selection,
            minor_labels,
            major_labels,
            minor_diff,
            major_diff,
            tick_marks,
            frame,
        })
    }

    /// Runs a full pass and renders its frame.
    pub fn render<S>(&mut self, scale: &S, viewport: Viewport) -> AxisResult<TimeAxisRenderPass>
    where
        S: AxisTimeScale + ?Sized,
    {
        let pass = self.build_render_pass(scale, viewport)?;
        self.renderer.render(&pass.frame)?;
        Ok(pass)
    }

    /// Renders the pass into an external cairo context (for example a GTK
    /// draw callback).
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context<S>(
        &mut self,
        context: &cairo::Context,
        scale: &S,
        viewport: Viewport,
    ) -> AxisResult<TimeAxisRenderPass>
    where
        S: AxisTimeScale + ?Sized,
        R: CairoContextRenderer,
    {
        let pass = self.build_render_pass(scale, viewport)?;
        self.renderer.render_on_cairo_context(context, &pass.frame)?;
        Ok(pass)
    }

    fn tick_level(&self, level: usize) -> AxisResult<&TickLevel> {
        self.catalog.level(level).ok_or_else(|| {
            AxisError::InvalidData(format!(
                "tick level {level} is outside the catalog (0..{})",
                self.catalog.len()
            ))
        })
    }

    fn compose_frame(
        &self,
        viewport: Viewport,
        tick_marks: &[TickMark],
        minor_labels: &LabelSet,
        major_labels: &LabelSet,
    ) -> RenderFrame {
        let mut frame = RenderFrame::new(viewport);
        let height = viewport.height_px();

        for mark in tick_marks {
            let (y1, y2) = match self.config.orientation {
                AxisOrientation::Bottom => (0.0, mark.length),
                AxisOrientation::Top => (height, height - mark.length),
            };
            frame.push_line(LinePrimitive::vertical(
                mark.x,
                y1,
                y2,
                self.config.tick_mark_width_px,
                self.config.tick_mark_color,
            ));
        }

        let series = [
            (minor_labels, &self.config.minor_label_font),
            (major_labels, &self.config.major_label_font),
        ];
        for (labels, font) in series {
            for label in labels.iter() {
                frame.push_text(TextPrimitive {
                    text: label.text.clone(),
                    x: label.x,
                    y: label.y,
                    font_family: font.family.clone(),
                    font_size_px: font.size_px,
                    color: self.config.label_color,
                    h_align: label.h_align,
                });
            }
        }

        frame
    }
}

fn ensure_viewport(viewport: Viewport) -> AxisResult<()> {
    if viewport.is_valid() {
        Ok(())
    } else {
        Err(AxisError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        })
    }
}
