use std::borrow::Cow;
use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::core::TimeUnit;
use crate::error::{AxisError, AxisResult};

use super::label_format::validate_format;

/// One tick series: every `step` `time_unit`s, labelled with `format`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IntervalDescriptor {
    pub time_unit: TimeUnit,
    pub step: u32,
    pub format: Cow<'static, str>,
}

impl IntervalDescriptor {
    #[must_use]
    pub const fn new(time_unit: TimeUnit, step: u32, format: &'static str) -> Self {
        Self {
            time_unit,
            step,
            format: Cow::Borrowed(format),
        }
    }

    /// Nominal duration of one step in seconds.
    #[must_use]
    pub fn nominal_seconds(&self) -> f64 {
        self.time_unit.nominal_seconds() * f64::from(self.step)
    }

    /// Step-1 labels describe a whole interval and are centered inside it.
    #[must_use]
    pub fn is_centered(&self) -> bool {
        self.step == 1
    }

    fn validate(&self) -> AxisResult<()> {
        if self.step == 0 {
            return Err(AxisError::InvalidData(
                "interval step must be > 0".to_owned(),
            ));
        }
        validate_format(&self.format)
    }
}

/// A zoom level: the fine series and its coarse companion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TickLevel {
    pub minor: IntervalDescriptor,
    pub major: IntervalDescriptor,
}

impl TickLevel {
    #[must_use]
    pub const fn new(minor: IntervalDescriptor, major: IntervalDescriptor) -> Self {
        Self { minor, major }
    }
}

const fn level(
    minor_unit: TimeUnit,
    minor_step: u32,
    minor_format: &'static str,
    major_unit: TimeUnit,
    major_step: u32,
    major_format: &'static str,
) -> TickLevel {
    TickLevel::new(
        IntervalDescriptor::new(minor_unit, minor_step, minor_format),
        IntervalDescriptor::new(major_unit, major_step, major_format),
    )
}

// Multi-year levels pair with a 100000-year major series, which never has a
// tick inside a realistic domain: those levels show no major labels.
const CENTURY_SCALE_MAJOR: u32 = 100_000;

const DATE_FORMAT: &str = "%B %e, %Y";
const MINUTE_FORMAT: &str = "%I:%M %p";
const SECOND_FORMAT: &str = "%I:%M:%S %p";

static STANDARD_LEVELS: [TickLevel; 29] = {
    use TimeUnit::{Day, Hour, Minute, Month, Second, Year};
    [
        level(Year, 1_000, "%Y", Year, CENTURY_SCALE_MAJOR, "%Y"),
        level(Year, 500, "%Y", Year, CENTURY_SCALE_MAJOR, "%Y"),
        level(Year, 200, "%Y", Year, CENTURY_SCALE_MAJOR, "%Y"),
        level(Year, 100, "%Y", Year, CENTURY_SCALE_MAJOR, "%Y"),
        level(Year, 50, "%Y", Year, CENTURY_SCALE_MAJOR, "%Y"),
        level(Year, 25, "%Y", Year, CENTURY_SCALE_MAJOR, "%Y"),
        level(Year, 5, "%Y", Year, CENTURY_SCALE_MAJOR, "%Y"),
        level(Year, 1, "%y", Year, CENTURY_SCALE_MAJOR, "%Y"),
        level(Year, 1, "%Y", Year, CENTURY_SCALE_MAJOR, "%Y"),
        level(Month, 6, "%B", Year, 1, "%Y"),
        level(Month, 3, "%B", Year, 1, "%Y"),
        level(Month, 1, "%b", Year, 1, "%Y"),
        level(Month, 1, "%B", Year, 1, "%Y"),
        level(Day, 1, "%e", Month, 1, "%B %Y"),
        level(Day, 1, "%a %e", Month, 1, "%B %Y"),
        level(Hour, 12, "%I %p", Day, 1, DATE_FORMAT),
        level(Hour, 6, "%I %p", Day, 1, DATE_FORMAT),
        level(Hour, 3, "%I %p", Day, 1, DATE_FORMAT),
        level(Hour, 1, "%I %p", Day, 1, DATE_FORMAT),
        level(Minute, 30, MINUTE_FORMAT, Day, 1, DATE_FORMAT),
        level(Minute, 15, MINUTE_FORMAT, Day, 1, DATE_FORMAT),
        level(Minute, 10, MINUTE_FORMAT, Day, 1, DATE_FORMAT),
        level(Minute, 5, MINUTE_FORMAT, Day, 1, DATE_FORMAT),
        level(Minute, 1, MINUTE_FORMAT, Day, 1, DATE_FORMAT),
        level(Second, 30, SECOND_FORMAT, Day, 1, DATE_FORMAT),
        level(Second, 15, SECOND_FORMAT, Day, 1, DATE_FORMAT),
        level(Second, 10, SECOND_FORMAT, Day, 1, DATE_FORMAT),
        level(Second, 5, SECOND_FORMAT, Day, 1, DATE_FORMAT),
        level(Second, 1, SECOND_FORMAT, Day, 1, DATE_FORMAT),
    ]
};

/// Ordered table of tick levels.
///
/// Index 0 is the coarsest level and `len() - 1` the finest; the nominal
/// minor duration never grows with the index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<TickLevel>", into = "Vec<TickLevel>")]
pub struct IntervalCatalog {
    levels: Cow<'static, [TickLevel]>,
}

impl Default for IntervalCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl IntervalCatalog {
    /// Built-in 29-level table, from 1000-year steps down to single seconds.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            levels: Cow::Borrowed(&STANDARD_LEVELS),
        }
    }

    pub fn new(levels: Vec<TickLevel>) -> AxisResult<Self> {
        if levels.is_empty() {
            return Err(AxisError::InvalidData(
                "interval catalog must contain at least one level".to_owned(),
            ));
        }
        for level in &levels {
            level.minor.validate()?;
            level.major.validate()?;
        }
        for (index, pair) in levels.windows(2).enumerate() {
            if pair[1].minor.nominal_seconds() > pair[0].minor.nominal_seconds() {
                return Err(AxisError::InvalidData(format!(
                    "interval catalog level {} is coarser than level {index}",
                    index + 1
                )));
            }
        }

        Ok(Self {
            levels: Cow::Owned(levels),
        })
    }

    pub fn from_json_str(input: &str) -> AxisResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            AxisError::InvalidData(format!("failed to parse interval catalog json: {e}"))
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    #[must_use]
    pub fn finest_index(&self) -> usize {
        self.levels.len().saturating_sub(1)
    }

    #[must_use]
    pub fn level(&self, index: usize) -> Option<&TickLevel> {
        self.levels.get(index)
    }

    #[must_use]
    pub fn minor(&self, index: usize) -> Option<&IntervalDescriptor> {
        self.level(index).map(|level| &level.minor)
    }

    #[must_use]
    pub fn major(&self, index: usize) -> Option<&IntervalDescriptor> {
        self.level(index).map(|level| &level.major)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TickLevel> {
        self.levels.iter()
    }
}

impl Index<usize> for IntervalCatalog {
    type Output = TickLevel;

    fn index(&self, index: usize) -> &Self::Output {
        &self.levels[index]
    }
}

impl TryFrom<Vec<TickLevel>> for IntervalCatalog {
    type Error = AxisError;

    fn try_from(levels: Vec<TickLevel>) -> AxisResult<Self> {
        Self::new(levels)
    }
}

impl From<IntervalCatalog> for Vec<TickLevel> {
    fn from(catalog: IntervalCatalog) -> Self {
        catalog.levels.into_owned()
    }
}
