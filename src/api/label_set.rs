use indexmap::IndexMap;

use super::tick_label_renderer::LabelPlacement;

/// Visible labels of one series, keyed by instant milliseconds.
///
/// `IndexMap` keeps labels in instant order so frames are emitted
/// deterministically.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelSet {
    labels: IndexMap<i64, LabelPlacement>,
}

/// Minimal change set between two consecutive label sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelDiff {
    /// Keys that appear in the new pass.
    pub entered: Vec<i64>,
    /// Keys present in both passes whose text or position changed.
    pub updated: Vec<i64>,
    /// Keys that disappeared.
    pub exited: Vec<i64>,
}

impl LabelDiff {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entered.is_empty() && self.updated.is_empty() && self.exited.is_empty()
    }
}

impl LabelSet {
    /// Collects the visible placements; a later placement with the same key
    /// replaces an earlier one.
    #[must_use]
    pub fn from_placements(placements: impl IntoIterator<Item = LabelPlacement>) -> Self {
        let labels = placements
            .into_iter()
            .filter(|placement| placement.visible)
            .map(|placement| (placement.key, placement))
            .collect();
        Self { labels }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    #[must_use]
    pub fn get(&self, key: i64) -> Option<&LabelPlacement> {
        self.labels.get(&key)
    }

    pub fn keys(&self) -> impl Iterator<Item = i64> + '_ {
        self.labels.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LabelPlacement> {
        self.labels.values()
    }

    #[must_use]
    pub fn diff(&self, previous: &Self) -> LabelDiff {
        let mut diff = LabelDiff::default();
        for (key, label) in &self.labels {
            match previous.labels.get(key) {
                None => diff.entered.push(*key),
                Some(old) if !same_rendering(old, label) => diff.updated.push(*key),
                Some(_) => {}
            }
        }
        diff.exited = previous
            .labels
            .keys()
            .filter(|key| !self.labels.contains_key(*key))
            .copied()
            .collect();
        diff
    }
}

fn same_rendering(a: &LabelPlacement, b: &LabelPlacement) -> bool {
    a.text == b.text && a.x == b.x && a.y == b.y && a.h_align == b.h_align
}
