use tracing::trace;

use crate::core::AxisTimeScale;
use crate::render::{LabelFont, TextMeasurer};

use super::interval_catalog::{IntervalDescriptor, TickLevel};
use super::label_format::{format_local, worst_case_datetime};
use super::width_cache::WorstCaseWidthCache;

/// Decides whether labels of an interval can be drawn without colliding.
///
/// Estimates are based on the worst-case label of a format and the on-screen
/// distance of one step measured at the domain start. The distance is exact
/// only for linear scales and uniform calendar steps.
pub struct LabelFitEstimator<'a, S: ?Sized, M: ?Sized> {
    scale: &'a S,
    measurer: &'a M,
    cache: Option<&'a mut WorstCaseWidthCache>,
    available_width: f64,
    label_padding: f64,
    minor_font: &'a LabelFont,
    major_font: &'a LabelFont,
}

impl<'a, S, M> LabelFitEstimator<'a, S, M>
where
    S: AxisTimeScale + ?Sized,
    M: TextMeasurer + ?Sized,
{
    #[must_use]
    pub fn new(
        scale: &'a S,
        measurer: &'a M,
        available_width: f64,
        label_padding: f64,
        minor_font: &'a LabelFont,
        major_font: &'a LabelFont,
    ) -> Self {
        Self {
            scale,
            measurer,
            cache: None,
            available_width: available_width.max(0.0),
            label_padding,
            minor_font,
            major_font,
        }
    }

    #[must_use]
    pub fn with_cache(mut self, cache: &'a mut WorstCaseWidthCache) -> Self {
        self.cache = Some(cache);
        self
    }

    #[must_use]
    pub fn available_width(&self) -> f64 {
        self.available_width
    }

    /// Width of the widest label `format` can produce in `font`.
    pub fn worst_case_label_width(&mut self, format: &str, font: &LabelFont) -> f64 {
        let measurer = self.measurer;
        let measure = || {
            let text = format_local(worst_case_datetime(), format);
            if text.is_empty() {
                0.0
            } else {
                measurer.measure(&text, font).width
            }
        };
        match self.cache.as_deref_mut() {
            Some(cache) => cache.get_or_measure(format, font, measure),
            None => measure(),
        }
    }

    /// Pixel distance covered by one step of `descriptor`, unclamped.
    ///
    /// A collapsed domain, a step beyond the calendar range or a degenerate
    /// mapping all count as unbounded space.
    #[must_use]
    pub fn raw_interval_spacing(&self, descriptor: &IntervalDescriptor) -> f64 {
        let (start, end) = self.scale.domain();
        if start == end {
            return f64::INFINITY;
        }

        let Some(advanced) =
            self.scale
                .offset(start, descriptor.time_unit, i64::from(descriptor.step))
        else {
            return f64::INFINITY;
        };
        let spacing = (self.scale.scale(advanced) - self.scale.scale(start)).abs();
        if spacing.is_finite() {
            spacing
        } else {
            f64::INFINITY
        }
    }

    /// Pixel distance of one step, clamped to the available width.
    #[must_use]
    pub fn interval_pixel_spacing(&self, descriptor: &IntervalDescriptor) -> f64 {
        self.raw_interval_spacing(descriptor).min(self.available_width)
    }

    pub fn has_enough_space(&mut self, descriptor: &IntervalDescriptor, font: &LabelFont) -> bool {
        let required =
            self.worst_case_label_width(&descriptor.format, font) + 2.0 * self.label_padding;
        let spacing = self.interval_pixel_spacing(descriptor);
        trace!(
            unit = ?descriptor.time_unit,
            step = descriptor.step,
            required,
            spacing,
            "label fit check"
        );
        required < spacing
    }

    /// Both series of `level` fit, each measured in its own font.
    pub fn level_fits(&mut self, level: &TickLevel) -> bool {
        let (minor_font, major_font) = (self.minor_font, self.major_font);
        self.has_enough_space(&level.minor, minor_font)
            && self.has_enough_space(&level.major, major_font)
    }
}
