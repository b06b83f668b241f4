use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AxisError, AxisResult};
use crate::render::{Color, LabelFont};

/// Side of the plot the time axis is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AxisOrientation {
    Top,
    #[default]
    Bottom,
}

impl AxisOrientation {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}

impl FromStr for AxisOrientation {
    type Err = AxisError;

    /// Accepts `top` and `bottom` in any letter case.
    fn from_str(value: &str) -> AxisResult<Self> {
        match value.to_ascii_lowercase().as_str() {
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            _ => Err(AxisError::UnsupportedOrientation(value.to_owned())),
        }
    }
}

impl TryFrom<String> for AxisOrientation {
    type Error = AxisError;

    fn try_from(value: String) -> AxisResult<Self> {
        value.parse()
    }
}

impl From<AxisOrientation> for String {
    fn from(orientation: AxisOrientation) -> Self {
        orientation.as_str().to_owned()
    }
}

impl fmt::Display for AxisOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presentation settings of a time axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeAxisConfig {
    pub orientation: AxisOrientation,
    /// Horizontal padding around each label, also the unlabeled mark length.
    pub tick_label_padding_px: f64,
    /// Nominal tick length; derived from label heights when `None`.
    pub tick_length_px: Option<f64>,
    pub minor_label_font: LabelFont,
    pub major_label_font: LabelFont,
    pub label_color: Color,
    pub tick_mark_color: Color,
    pub tick_mark_width_px: f64,
}

impl Default for TimeAxisConfig {
    fn default() -> Self {
        Self {
            orientation: AxisOrientation::Bottom,
            tick_label_padding_px: 5.0,
            tick_length_px: None,
            minor_label_font: LabelFont::default(),
            major_label_font: LabelFont::default(),
            label_color: Color::BLACK,
            tick_mark_color: Color::rgb(0.4, 0.4, 0.4),
            tick_mark_width_px: 1.0,
        }
    }
}

impl TimeAxisConfig {
    #[must_use]
    pub fn with_orientation(mut self, orientation: AxisOrientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Parses `orientation` (`"top"`/`"bottom"`); anything else is rejected.
    pub fn with_orientation_str(self, orientation: &str) -> AxisResult<Self> {
        Ok(self.with_orientation(orientation.parse()?))
    }

    #[must_use]
    pub fn with_tick_label_padding_px(mut self, padding: f64) -> Self {
        self.tick_label_padding_px = padding;
        self
    }

    #[must_use]
    pub fn with_tick_length_px(mut self, tick_length: f64) -> Self {
        self.tick_length_px = Some(tick_length);
        self
    }

    #[must_use]
    pub fn with_minor_label_font(mut self, font: LabelFont) -> Self {
        self.minor_label_font = font;
        self
    }

    #[must_use]
    pub fn with_major_label_font(mut self, font: LabelFont) -> Self {
        self.major_label_font = font;
        self
    }

    pub fn validate(&self) -> AxisResult<()> {
        if !self.tick_label_padding_px.is_finite() || self.tick_label_padding_px < 0.0 {
            return Err(AxisError::InvalidData(
                "tick label padding must be finite and >= 0".to_owned(),
            ));
        }
        if let Some(tick_length) = self.tick_length_px {
            if !tick_length.is_finite() || tick_length < 0.0 {
                return Err(AxisError::InvalidData(
                    "tick length must be finite and >= 0".to_owned(),
                ));
            }
        }
        if !self.tick_mark_width_px.is_finite() || self.tick_mark_width_px <= 0.0 {
            return Err(AxisError::InvalidData(
                "tick mark width must be finite and > 0".to_owned(),
            ));
        }
        self.minor_label_font.validate()?;
        self.major_label_font.validate()?;
        self.label_color.validate()?;
        self.tick_mark_color.validate()
    }

    pub fn from_json_str(input: &str) -> AxisResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            AxisError::InvalidData(format!("failed to parse time axis config json: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> AxisResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            AxisError::InvalidData(format!("failed to serialize time axis config json: {e}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{AxisOrientation, TimeAxisConfig};
    use crate::error::AxisError;

    #[test]
    fn orientation_parsing_is_case_insensitive() {
        assert_eq!("TOP".parse::<AxisOrientation>().ok(), Some(AxisOrientation::Top));
        assert_eq!("Bottom".parse::<AxisOrientation>().ok(), Some(AxisOrientation::Bottom));
    }

    #[test]
    fn unsupported_orientation_fails_fast() {
        let result = TimeAxisConfig::default().with_orientation_str("left");
        assert!(matches!(result, Err(AxisError::UnsupportedOrientation(value)) if value == "left"));
    }

    #[test]
    fn negative_padding_is_rejected() {
        let config = TimeAxisConfig::default().with_tick_label_padding_px(-1.0);
        assert!(config.validate().is_err());
    }
}
