use serde::{Deserialize, Serialize};

use crate::core::{AxisTimeScale, instant_key_millis};
use crate::render::{LabelFont, TextHAlign, TextMeasurer};

use super::axis_config::AxisOrientation;
use super::interval_catalog::{IntervalDescriptor, TickLevel};
use super::label_format::format_instant;

/// Which series of a tick level a label belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LevelTable {
    Minor,
    Major,
}

impl LevelTable {
    #[must_use]
    pub fn descriptor(self, level: &TickLevel) -> &IntervalDescriptor {
        match self {
            Self::Minor => &level.minor,
            Self::Major => &level.major,
        }
    }

    /// Distance of the label from the axis baseline.
    #[must_use]
    pub fn label_offset(self, tick_length: f64) -> f64 {
        match self {
            Self::Minor => tick_length / 2.0,
            Self::Major => tick_length,
        }
    }
}

/// One candidate label of a render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelPlacement {
    pub instant: f64,
    /// Identity across passes: the instant in whole milliseconds.
    pub key: i64,
    pub text: String,
    /// Text anchor in axis pixels.
    pub x: f64,
    pub y: f64,
    /// Horizontal extent used by the edge filter.
    pub span_start: f64,
    pub span_end: f64,
    pub centered: bool,
    pub visible: bool,
    pub h_align: TextHAlign,
}

/// Tick instants bracketed by the domain edges, ascending, without duplicates.
#[must_use]
pub fn tick_boundaries<S>(scale: &S, descriptor: &IntervalDescriptor) -> Vec<f64>
where
    S: AxisTimeScale + ?Sized,
{
    let (a, b) = scale.domain();
    let (start, end) = (a.min(b), a.max(b));

    let ticks = scale.tick_interval(descriptor.time_unit, descriptor.step);
    let mut boundaries = Vec::with_capacity(ticks.len() + 2);
    boundaries.push(start);
    boundaries.extend(ticks);
    boundaries.push(end);
    boundaries.dedup_by_key(|instant| instant_key_millis(*instant));
    boundaries
}

/// Instants labels are attached to: interval midpoints when centered,
/// otherwise the boundaries themselves.
#[must_use]
pub fn label_instants(boundaries: &[f64], centered: bool) -> Vec<f64> {
    if !centered {
        return boundaries.to_vec();
    }
    boundaries
        .windows(2)
        .map(|pair| pair[0] + (pair[1] - pair[0]) / 2.0)
        .collect()
}

/// A label is kept only when its span lies strictly inside the axis.
#[must_use]
pub fn label_fits_within(span_start: f64, span_end: f64, available_width: f64) -> bool {
    span_start > 0.0 && span_end < available_width
}

/// Vertical anchor of a label series for the given orientation.
///
/// Text is drawn from its top edge, so a top axis shifts its rows down by
/// twice the label padding to keep them clear of the tick marks.
#[must_use]
pub fn label_y(
    orientation: AxisOrientation,
    offset: f64,
    available_height: f64,
    label_padding: f64,
) -> f64 {
    match orientation {
        AxisOrientation::Bottom => offset,
        AxisOrientation::Top => available_height - offset + 2.0 * label_padding,
    }
}

/// Lays out the labels of one series at one tick level.
pub struct TickLabelLayout<'a, S: ?Sized, M: ?Sized> {
    pub scale: &'a S,
    pub measurer: &'a M,
    pub font: &'a LabelFont,
    pub label_padding: f64,
    pub available_width: f64,
    pub label_y: f64,
}

impl<S, M> TickLabelLayout<'_, S, M>
where
    S: AxisTimeScale + ?Sized,
    M: TextMeasurer + ?Sized,
{
    /// Every candidate label of `descriptor`, with visibility decided by the
    /// edge filter. Empty texts are never visible.
    #[must_use]
    pub fn layout(&self, descriptor: &IntervalDescriptor) -> Vec<LabelPlacement> {
        let centered = descriptor.is_centered();
        let boundaries = tick_boundaries(self.scale, descriptor);
        let time_zone = self.scale.time_zone();

        label_instants(&boundaries, centered)
            .into_iter()
            .map(|instant| {
                let text = format_instant(instant, &descriptor.format, time_zone);
                let position = self.scale.scale(instant);
                let width = self.measurer.measure(&text, self.font).width + self.label_padding;
                let (span_start, span_end, x, h_align) = if centered {
                    (
                        position - width / 2.0,
                        position + width / 2.0,
                        position,
                        TextHAlign::Center,
                    )
                } else {
                    (
                        position,
                        position + width,
                        position + self.label_padding,
                        TextHAlign::Left,
                    )
                };
                let visible = !text.is_empty()
                    && label_fits_within(span_start, span_end, self.available_width);

                LabelPlacement {
                    instant,
                    key: instant_key_millis(instant),
                    text,
                    x,
                    y: self.label_y,
                    span_start,
                    span_end,
                    centered,
                    visible,
                    h_align,
                }
            })
            .collect()
    }
}
