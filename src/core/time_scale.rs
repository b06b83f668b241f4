use serde::{Deserialize, Serialize};

use crate::core::primitives::{instant_to_local, local_to_instant};
use crate::core::time_unit::{TimeAxisTimeZone, TimeUnit};
use crate::core::{LinearScale, Viewport};
use crate::error::{AxisError, AxisResult};

/// Scale contract consumed by the time axis.
///
/// Instants are unix seconds. Calendar operations (`tick_interval`, `offset`)
/// have default implementations that align to `time_zone()`, so a custom
/// scale usually only supplies the domain and the pixel mapping.
pub trait AxisTimeScale {
    fn domain(&self) -> (f64, f64);

    /// Maps an instant to a pixel position.
    fn scale(&self, instant: f64) -> f64;

    fn time_zone(&self) -> TimeAxisTimeZone {
        TimeAxisTimeZone::Utc
    }

    /// Calendar-aligned instants covering the (inclusive) domain.
    fn tick_interval(&self, unit: TimeUnit, step: u32) -> Vec<f64> {
        let offset = self.time_zone().fixed_offset();
        let (a, b) = self.domain();
        let (start, end) = (a.min(b), a.max(b));
        let (Some(start), Some(end)) = (instant_to_local(start, offset), instant_to_local(end, offset))
        else {
            return Vec::new();
        };

        unit.range(start, end, step)
            .into_iter()
            .filter_map(|local| local_to_instant(local, offset))
            .collect()
    }

    /// Moves `instant` by `steps` calendar units.
    fn offset(&self, instant: f64, unit: TimeUnit, steps: i64) -> Option<f64> {
        let offset = self.time_zone().fixed_offset();
        let local = instant_to_local(instant, offset)?;
        local_to_instant(unit.offset(local, steps)?, offset)
    }
}

/// Linear time scale with a fixed-offset calendar.
///
/// The domain is kept in the order it was given; a reversed domain maps
/// right-to-left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScale {
    linear: LinearScale,
    time_zone: TimeAxisTimeZone,
}

impl TimeScale {
    /// Creates a scale over `[time_start, time_end]` mapped onto `[0, 1]`.
    pub fn new(time_start: f64, time_end: f64) -> AxisResult<Self> {
        Ok(Self {
            linear: LinearScale::new((time_start, time_end), (0.0, 1.0))?,
            time_zone: TimeAxisTimeZone::Utc,
        })
    }

    /// Creates a scale whose range spans the viewport width.
    pub fn for_viewport(time_start: f64, time_end: f64, viewport: Viewport) -> AxisResult<Self> {
        if !viewport.is_valid() {
            return Err(AxisError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        Self::new(time_start, time_end)?.with_range(0.0, viewport.width_px())
    }

    pub fn with_range(mut self, start_px: f64, end_px: f64) -> AxisResult<Self> {
        self.linear = self.linear.with_range(start_px, end_px)?;
        Ok(self)
    }

    #[must_use]
    pub fn with_time_zone(mut self, time_zone: TimeAxisTimeZone) -> Self {
        self.time_zone = time_zone;
        self
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        self.linear.range()
    }

    pub fn set_range(&mut self, start_px: f64, end_px: f64) -> AxisResult<()> {
        self.linear = self.linear.with_range(start_px, end_px)?;
        Ok(())
    }

    pub fn set_domain(&mut self, start: f64, end: f64) -> AxisResult<()> {
        self.linear = self.linear.with_domain(start, end)?;
        Ok(())
    }

    pub fn set_time_zone(&mut self, time_zone: TimeAxisTimeZone) {
        self.time_zone = time_zone;
    }

    #[must_use]
    pub fn pixel_to_time(self, pixel: f64) -> f64 {
        self.linear.invert(pixel)
    }

    /// Pans the domain by an additive time delta.
    pub fn pan_by_delta(&mut self, delta_time: f64) -> AxisResult<()> {
        if !delta_time.is_finite() {
            return Err(AxisError::InvalidData(
                "pan delta must be finite".to_owned(),
            ));
        }

        let (start, end) = self.linear.domain();
        self.set_domain(start + delta_time, end + delta_time)
    }

    /// Zooms the domain around an anchor time.
    ///
    /// `factor > 1.0` zooms in, `0.0 < factor < 1.0` zooms out.
    /// The resulting span is clamped by `min_span_absolute`.
    pub fn zoom_by_factor(
        &mut self,
        factor: f64,
        anchor_time: f64,
        min_span_absolute: f64,
    ) -> AxisResult<()> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(AxisError::InvalidData(
                "zoom factor must be finite and > 0".to_owned(),
            ));
        }
        if !anchor_time.is_finite() {
            return Err(AxisError::InvalidData(
                "zoom anchor must be finite".to_owned(),
            ));
        }
        if !min_span_absolute.is_finite() || min_span_absolute <= 0.0 {
            return Err(AxisError::InvalidData(
                "zoom min span must be finite and > 0".to_owned(),
            ));
        }

        let (start, end) = self.linear.domain();
        let current_span = end - start;
        if current_span == 0.0 {
            let half = min_span_absolute / 2.0;
            return self.set_domain(anchor_time - half, anchor_time + half);
        }

        let target_span = (current_span.abs() / factor).max(min_span_absolute) * current_span.signum();
        let left_ratio = (anchor_time - start) / current_span;

        let new_start = anchor_time - left_ratio * target_span;
        let new_end = new_start + target_span;
        self.set_domain(new_start, new_end)
    }
}

impl AxisTimeScale for TimeScale {
    fn domain(&self) -> (f64, f64) {
        self.linear.domain()
    }

    fn scale(&self, instant: f64) -> f64 {
        self.linear.map(instant)
    }

    fn time_zone(&self) -> TimeAxisTimeZone {
        self.time_zone
    }
}
