use std::collections::HashMap;

use crate::render::LabelFont;

/// Runtime metrics exposed by the worst-case label width cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WidthCacheStats {
    pub hits: u64,
    pub misses: u64,
    pub size: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct WidthCacheKey {
    format: String,
    font_family: String,
    font_size_bits: u64,
}

impl WidthCacheKey {
    fn new(format: &str, font: &LabelFont) -> Self {
        Self {
            format: format.to_owned(),
            font_family: font.family.clone(),
            font_size_bits: font.size_px.to_bits(),
        }
    }
}

/// Memoized worst-case widths keyed by (format, font).
///
/// The worst-case text of a format never changes, so entries stay valid until
/// the measurer or the fonts are swapped.
#[derive(Debug, Default)]
pub struct WorstCaseWidthCache {
    entries: HashMap<WidthCacheKey, f64>,
    hits: u64,
    misses: u64,
}

impl WorstCaseWidthCache {
    pub fn get_or_measure(
        &mut self,
        format: &str,
        font: &LabelFont,
        measure: impl FnOnce() -> f64,
    ) -> f64 {
        let key = WidthCacheKey::new(format, font);
        if let Some(width) = self.entries.get(&key) {
            self.hits = self.hits.saturating_add(1);
            return *width;
        }

        self.misses = self.misses.saturating_add(1);
        let width = measure();
        self.entries.insert(key, width);
        width
    }

    #[must_use]
    pub fn stats(&self) -> WidthCacheStats {
        WidthCacheStats {
            hits: self.hits,
            misses: self.misses,
            size: self.entries.len(),
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }
}
