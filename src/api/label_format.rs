use std::fmt::Write as _;

use chrono::format::{Item, StrftimeItems};
use chrono::{NaiveDate, NaiveDateTime};

use crate::core::{TimeAxisTimeZone, instant_to_local};
use crate::error::{AxisError, AxisResult};

/// Rejects format strings chrono cannot render.
pub fn validate_format(format: &str) -> AxisResult<()> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(AxisError::InvalidData(format!(
            "unsupported time label format: `{format}`"
        )));
    }
    Ok(())
}

/// Formats wall-clock time with a strftime-style template.
///
/// Invalid templates produce an empty label instead of panicking.
#[must_use]
pub fn format_local(local: NaiveDateTime, format: &str) -> String {
    let mut text = String::new();
    if write!(text, "{}", local.format(format)).is_err() {
        text.clear();
    }
    text
}

/// Formats an instant (unix seconds) in the given calendar.
#[must_use]
pub fn format_instant(instant: f64, format: &str, time_zone: TimeAxisTimeZone) -> String {
    match instant_to_local(instant, time_zone.fixed_offset()) {
        Some(local) => format_local(local, format),
        None => String::new(),
    }
}

/// Synthetic date whose formatted fields are as wide as they get:
/// a four-digit year, the longest month and weekday names (September,
/// Wednesday), and two-digit day, 12-hour, minute and second fields.
#[must_use]
pub fn worst_case_datetime() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(9999, 9, 29)
        .and_then(|date| date.and_hms_opt(12, 59, 59))
        .unwrap_or(NaiveDateTime::MAX)
}
