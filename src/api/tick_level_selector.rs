use serde::{Deserialize, Serialize};
use tracing::warn;

use super::interval_catalog::{IntervalCatalog, TickLevel};

/// Span growth (in seconds, one millisecond) still treated as "not zoomed out".
pub const SPAN_GROWTH_TOLERANCE: f64 = 0.001;

/// Hysteresis carried from one level selection to the next.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectorState {
    /// Domain width observed by the previous selection.
    pub previous_span: f64,
    /// Search origin for the next selection when the span has not grown.
    pub previous_index: usize,
}

impl SelectorState {
    /// Fresh state for `catalog`: no span seen yet, search from the finest level.
    #[must_use]
    pub fn initial(catalog: &IntervalCatalog) -> Self {
        Self {
            previous_span: 0.0,
            previous_index: catalog.finest_index(),
        }
    }
}

/// Outcome of one level selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelSelection {
    pub level: usize,
    /// Index the scan started from.
    pub starting_point: usize,
    /// `false` when no level fit and the coarsest was used anyway.
    pub fit_found: bool,
    /// Number of level fit checks evaluated.
    pub fit_checks: usize,
    /// State to thread into the next selection.
    pub state: SelectorState,
}

#[must_use]
pub fn domain_span(domain: (f64, f64)) -> f64 {
    (domain.1 - domain.0).abs()
}

/// Where the scan starts: the previous origin unless the span grew.
#[must_use]
pub fn starting_point(catalog: &IntervalCatalog, state: SelectorState, current_span: f64) -> usize {
    let finest = catalog.finest_index();
    if current_span <= state.previous_span + SPAN_GROWTH_TOLERANCE {
        state.previous_index.min(finest)
    } else {
        finest
    }
}

/// Picks the finest level whose minor and major labels both fit.
///
/// When the starting point fits, the scan walks toward finer levels while they
/// keep fitting. Otherwise the levels finer than the start are searched from
/// the finest down, then the coarser ones, so a fitting level is never skipped
/// even when fit is not monotonic across the catalog. If nothing fits, level 0
/// is returned with a warning. The returned state stores `level - 1` as the
/// next origin, so an unchanged domain starts one level coarser and refines
/// back to the same result.
pub fn select_tick_level<F>(
    catalog: &IntervalCatalog,
    state: SelectorState,
    current_span: f64,
    mut fits: F,
) -> LevelSelection
where
    F: FnMut(&TickLevel) -> bool,
{
    let finest = catalog.finest_index();
    let start = starting_point(catalog, state, current_span);

    let mut fit_checks = 0usize;
    let mut check = |index: usize| {
        fit_checks += 1;
        fits(&catalog[index])
    };

    let (level, fit_found) = if check(start) {
        let mut level = start;
        while level < finest && check(level + 1) {
            level += 1;
        }
        (level, true)
    } else {
        let finer = (start + 1..=finest).rev().find(|&index| check(index));
        let found = match finer {
            Some(level) => Some(level),
            None => (0..start).rev().find(|&index| check(index)),
        };
        match found {
            Some(level) => (level, true),
            None => {
                warn!(
                    levels = catalog.len(),
                    current_span, "could not find suitable interval to display labels"
                );
                (0, false)
            }
        }
    };

    LevelSelection {
        level,
        starting_point: start,
        fit_found,
        fit_checks,
        state: SelectorState {
            previous_span: current_span,
            previous_index: level.saturating_sub(1),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{SelectorState, select_tick_level};
    use crate::api::interval_catalog::IntervalCatalog;

    fn fits_up_to(limit: usize) -> impl FnMut(&crate::api::TickLevel) -> bool {
        let catalog = IntervalCatalog::standard();
        move |level| {
            catalog
                .iter()
                .position(|candidate| candidate == level)
                .is_some_and(|index| index <= limit)
        }
    }

    #[test]
    fn first_selection_scans_down_from_the_finest_level() {
        let catalog = IntervalCatalog::standard();
        let selection = select_tick_level(&catalog, SelectorState::initial(&catalog), 3_600.0, fits_up_to(20));
        assert_eq!(selection.starting_point, catalog.finest_index());
        assert_eq!(selection.level, 20);
        assert!(selection.fit_found);
        assert_eq!(selection.state.previous_index, 19);
    }

    #[test]
    fn unchanged_span_refines_back_from_previous_origin() {
        let catalog = IntervalCatalog::standard();
        let first = select_tick_level(&catalog, SelectorState::initial(&catalog), 3_600.0, fits_up_to(20));
        let second = select_tick_level(&catalog, first.state, 3_600.0, fits_up_to(20));
        assert_eq!(second.starting_point, 19);
        assert_eq!(second.level, 20);
        assert_eq!(second.fit_checks, 3);
    }

    #[test]
    fn level_zero_is_used_when_nothing_fits() {
        let catalog = IntervalCatalog::standard();
        let selection = select_tick_level(&catalog, SelectorState::initial(&catalog), 10.0, |_| false);
        assert_eq!(selection.level, 0);
        assert!(!selection.fit_found);
        assert_eq!(selection.state.previous_index, 0);
        assert_eq!(selection.fit_checks, catalog.len());
    }

    #[test]
    fn unfitting_origin_falls_back_to_finer_levels() {
        let catalog = IntervalCatalog::standard();
        let sparse_fit = |level: &crate::api::TickLevel| {
            catalog
                .iter()
                .position(|candidate| candidate == level)
                .is_some_and(|index| index == 20 || index == 22)
        };

        let mut state = SelectorState::initial(&catalog);
        let mut levels = Vec::new();
        for _ in 0..3 {
            let selection = select_tick_level(&catalog, state, 3_600.0, sparse_fit);
            assert!(selection.fit_found);
            levels.push(selection.level);
            state = selection.state;
        }
        assert_eq!(levels, vec![22, 22, 22]);
    }
}
