use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::{AxisTimeScale, instant_key_millis};

use super::interval_catalog::{IntervalCatalog, IntervalDescriptor};

/// Sparse-axis threshold: extra marks are added when one minor step times
/// this factor covers the whole axis.
pub const SPARSE_AXIS_SPACING_FACTOR: f64 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TickMarkKind {
    /// Marks one level finer than the selection, drawn without labels.
    Unlabeled,
    Minor,
    Major,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickMark {
    pub instant: f64,
    pub x: f64,
    pub length: f64,
    pub kind: TickMarkKind,
}

/// Mark lengths applied by `adjust_tick_lengths`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickLengthPlan {
    /// Nominal tick length; major marks use all of it, minor marks half.
    pub tick_length: f64,
    /// Length of unlabeled marks.
    pub unlabeled_length: f64,
}

#[must_use]
pub fn needs_unlabeled_ticks(raw_minor_spacing: f64, axis_length: f64) -> bool {
    raw_minor_spacing * SPARSE_AXIS_SPACING_FACTOR >= axis_length
}

/// Tick marks of `level`, sorted by instant.
///
/// Coincident marks keep the coarsest kind: major over minor over unlabeled.
/// Unlabeled marks one level finer are added only when `raw_minor_spacing`
/// shows the axis would otherwise look sparse and a finer level exists.
#[must_use]
pub fn adjust_tick_lengths<S>(
    scale: &S,
    catalog: &IntervalCatalog,
    level: usize,
    raw_minor_spacing: f64,
    plan: TickLengthPlan,
) -> Vec<TickMark>
where
    S: AxisTimeScale + ?Sized,
{
    let Some(selected) = catalog.level(level) else {
        return Vec::new();
    };

    let (start, end) = scale.domain();
    let axis_length = (scale.scale(end) - scale.scale(start)).abs();

    let mut marks: IndexMap<i64, TickMark> = IndexMap::new();
    if needs_unlabeled_ticks(raw_minor_spacing, axis_length) {
        if let Some(finer) = catalog.minor(level + 1) {
            insert_marks(&mut marks, scale, finer, plan.unlabeled_length, TickMarkKind::Unlabeled);
        }
    }
    insert_marks(&mut marks, scale, &selected.minor, plan.tick_length / 2.0, TickMarkKind::Minor);
    insert_marks(&mut marks, scale, &selected.major, plan.tick_length, TickMarkKind::Major);

    let mut marks: Vec<TickMark> = marks.into_values().collect();
    marks.sort_by_key(|mark| OrderedFloat(mark.instant));
    marks
}

fn insert_marks<S>(
    marks: &mut IndexMap<i64, TickMark>,
    scale: &S,
    descriptor: &IntervalDescriptor,
    length: f64,
    kind: TickMarkKind,
) where
    S: AxisTimeScale + ?Sized,
{
    for instant in scale.tick_interval(descriptor.time_unit, descriptor.step) {
        marks.insert(
            instant_key_millis(instant),
            TickMark {
                instant,
                x: scale.scale(instant),
                length,
                kind,
            },
        );
    }
}
