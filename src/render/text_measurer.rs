use serde::{Deserialize, Serialize};

use crate::error::{AxisError, AxisResult};

/// Font a tick label series is drawn with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelFont {
    pub family: String,
    pub size_px: f64,
}

impl Default for LabelFont {
    fn default() -> Self {
        Self {
            family: "Sans".to_owned(),
            size_px: 12.0,
        }
    }
}

impl LabelFont {
    #[must_use]
    pub fn new(family: impl Into<String>, size_px: f64) -> Self {
        Self {
            family: family.into(),
            size_px,
        }
    }

    pub fn validate(&self) -> AxisResult<()> {
        if self.family.trim().is_empty() {
            return Err(AxisError::InvalidData(
                "label font family must not be empty".to_owned(),
            ));
        }
        if !self.size_px.is_finite() || self.size_px <= 0.0 {
            return Err(AxisError::InvalidData(
                "label font size must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Measured bounds of one line of text, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextExtent {
    pub width: f64,
    pub height: f64,
}

/// Text measurement capability used by label fitting and layout.
///
/// Implementations that need scratch resources (layouts, DOM nodes) must
/// acquire and release them inside `measure`.
pub trait TextMeasurer {
    fn measure(&self, text: &str, font: &LabelFont) -> TextExtent;

    /// Height of one line of text in `font`.
    fn line_height(&self, font: &LabelFont) -> f64 {
        self.measure("0", font).height
    }
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn measure(&self, text: &str, font: &LabelFont) -> TextExtent {
        (**self).measure(text, font)
    }

    fn line_height(&self, font: &LabelFont) -> f64 {
        (**self).line_height(font)
    }
}

/// Deterministic, backend-independent glyph-width estimate.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, font: &LabelFont) -> TextExtent {
        let units = text.chars().fold(0.0, |acc, ch| {
            acc + match ch {
                '0'..='9' => 0.62,
                '.' | ',' | ':' => 0.34,
                '-' | '+' | '%' => 0.42,
                ' ' => 0.33,
                _ => 0.58,
            }
        });
        TextExtent {
            width: units * font.size_px,
            height: font.size_px,
        }
    }
}
