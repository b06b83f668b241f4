use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};

/// Quantizes an instant (unix seconds) to whole milliseconds.
///
/// Used as the identity of ticks and labels across render passes, so two
/// instants that only differ below a millisecond share one key.
#[must_use]
pub fn instant_key_millis(instant: f64) -> i64 {
    if !instant.is_finite() {
        return 0;
    }
    let millis = (instant * 1_000.0).round();
    if millis > (i64::MAX as f64) {
        i64::MAX
    } else if millis < (i64::MIN as f64) {
        i64::MIN
    } else {
        millis as i64
    }
}

/// Converts an instant to wall-clock time in `offset`.
///
/// Returns `None` for non-finite instants and instants outside chrono's range.
#[must_use]
pub fn instant_to_local(instant: f64, offset: FixedOffset) -> Option<NaiveDateTime> {
    if !instant.is_finite() {
        return None;
    }
    let utc = DateTime::<Utc>::from_timestamp_millis(instant_key_millis(instant))?;
    Some(utc.with_timezone(&offset).naive_local())
}

#[must_use]
pub fn local_to_instant(local: NaiveDateTime, offset: FixedOffset) -> Option<f64> {
    let zoned = local.and_local_timezone(offset).single()?;
    Some(zoned.timestamp_millis() as f64 / 1000.0)
}
