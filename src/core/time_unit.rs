use chrono::{Datelike, FixedOffset, Months, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeDelta, Timelike, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Hard cap on calendar steps walked by one `TimeUnit::range` call.
pub const MAX_RANGE_ITERATIONS: usize = 100_000;

/// Calendar unit a tick interval is counted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
    Day,
    Month,
    Year,
}

impl TimeUnit {
    /// Average length of one unit in seconds (Gregorian month and year).
    #[must_use]
    pub const fn nominal_seconds(self) -> f64 {
        match self {
            Self::Second => 1.0,
            Self::Minute => 60.0,
            Self::Hour => 3_600.0,
            Self::Day => 86_400.0,
            Self::Month => 2_629_746.0,
            Self::Year => 31_556_952.0,
        }
    }

    /// Truncates `time` to the start of its unit.
    #[must_use]
    pub fn floor(self, time: NaiveDateTime) -> NaiveDateTime {
        let date = time.date();
        let floored = match self {
            Self::Second => NaiveTime::from_hms_opt(time.hour(), time.minute(), time.second())
                .map(|t| date.and_time(t)),
            Self::Minute => {
                NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).map(|t| date.and_time(t))
            }
            Self::Hour => NaiveTime::from_hms_opt(time.hour(), 0, 0).map(|t| date.and_time(t)),
            Self::Day => Some(date.and_time(NaiveTime::MIN)),
            Self::Month => NaiveDate::from_ymd_opt(date.year(), date.month(), 1)
                .map(|d| d.and_time(NaiveTime::MIN)),
            Self::Year => {
                NaiveDate::from_ymd_opt(date.year(), 1, 1).map(|d| d.and_time(NaiveTime::MIN))
            }
        };
        floored.unwrap_or(time)
    }

    /// Moves `time` by `steps` units. Month and year offsets clamp the day to
    /// the end of the target month.
    #[must_use]
    pub fn offset(self, time: NaiveDateTime, steps: i64) -> Option<NaiveDateTime> {
        match self {
            Self::Second => time.checked_add_signed(TimeDelta::try_seconds(steps)?),
            Self::Minute => time.checked_add_signed(TimeDelta::try_minutes(steps)?),
            Self::Hour => time.checked_add_signed(TimeDelta::try_hours(steps)?),
            Self::Day => time.checked_add_signed(TimeDelta::try_days(steps)?),
            Self::Month => offset_months(time, steps),
            Self::Year => offset_months(time, steps.checked_mul(12)?),
        }
    }

    /// The calendar field a step is aligned against: seconds of the minute,
    /// minutes of the hour, hours of the day, zero-based day of the month,
    /// zero-based month, or the year itself.
    #[must_use]
    pub fn field_value(self, time: NaiveDateTime) -> i64 {
        match self {
            Self::Second => i64::from(time.second()),
            Self::Minute => i64::from(time.minute()),
            Self::Hour => i64::from(time.hour()),
            Self::Day => i64::from(time.day0()),
            Self::Month => i64::from(time.month0()),
            Self::Year => i64::from(time.year()),
        }
    }

    /// Unit boundaries in `[start, end]` whose field value is a multiple of `step`.
    #[must_use]
    pub fn range(self, start: NaiveDateTime, end: NaiveDateTime, step: u32) -> Vec<NaiveDateTime> {
        let step = i64::from(step.max(1));
        let mut values = Vec::new();
        if start > end {
            return values;
        }

        let mut cursor = self.floor(start);
        if cursor < start {
            match self.offset(cursor, 1) {
                Some(next) => cursor = next,
                None => return values,
            }
        }

        let mut iterations = 0usize;
        while cursor <= end {
            if self.field_value(cursor).rem_euclid(step) == 0 {
                values.push(cursor);
            }
            iterations += 1;
            if iterations >= MAX_RANGE_ITERATIONS {
                debug!(
                    unit = ?self,
                    step,
                    emitted = values.len(),
                    "tick enumeration capped"
                );
                break;
            }
            match self.offset(cursor, 1) {
                Some(next) => cursor = next,
                None => break,
            }
        }

        values
    }
}

fn offset_months(time: NaiveDateTime, months: i64) -> Option<NaiveDateTime> {
    let magnitude = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months >= 0 {
        time.checked_add_months(magnitude)
    } else {
        time.checked_sub_months(magnitude)
    }
}

/// Calendar used to align ticks and format labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TimeAxisTimeZone {
    #[default]
    Utc,
    FixedOffsetMinutes {
        minutes: i16,
    },
}

impl TimeAxisTimeZone {
    #[must_use]
    pub fn offset_minutes(self) -> i16 {
        match self {
            Self::Utc => 0,
            Self::FixedOffsetMinutes { minutes } => minutes,
        }
    }

    #[must_use]
    pub fn fixed_offset(self) -> FixedOffset {
        let seconds = i32::from(self.offset_minutes()) * 60;
        FixedOffset::east_opt(seconds).unwrap_or_else(|| Utc.fix())
    }
}
