//! Calendar-day bucketing
//!
//! Stored timestamps are UTC instants, but every day bucket lives in the
//! viewer's calendar: an instant is projected into the timezone carried by
//! the caller's `now` before its day is taken, so the same record can land
//! on different days for viewers in different zones. These primitives are
//! shared by every builder; none of them reads the ambient clock.

use chrono::{DateTime, Duration, LocalResult, NaiveDate, TimeZone};

/// Truncates an instant to its calendar day, in the instant's own timezone.
///
/// Pairs with [`day_key`] the way the views use them:
/// `day_key(start_of_day(&instant))` names the bucket an instant falls in.
pub fn start_of_day<Tz: TimeZone>(instant: &DateTime<Tz>) -> NaiveDate {
    instant.date_naive()
}

/// Formats a day as its `YYYY-MM-DD` grouping key.
pub fn day_key(day: NaiveDate) -> String {
    day.format("%Y-%m-%d").to_string()
}

/// The 7 consecutive days ending at `end` inclusive, chronological.
///
/// Shared by the insights volume strip and the weekly series so the two
/// views can never disagree about the window.
pub fn trailing_week(end: NaiveDate) -> [NaiveDate; 7] {
    let mut days = [end; 7];
    for (offset, slot) in days.iter_mut().enumerate() {
        *slot = end - Duration::days(6 - offset as i64);
    }
    days
}

/// The first valid wall-clock instant of a day in a timezone.
pub fn day_start_instant<Tz: TimeZone>(day: NaiveDate, tz: &Tz) -> DateTime<Tz> {
    let midnight = day.and_hms_opt(0, 0, 0).unwrap();
    match tz.from_local_datetime(&midnight) {
        LocalResult::Single(instant) => instant,
        LocalResult::Ambiguous(earliest, _) => earliest,
        // Midnight fell into a DST gap; take the first valid time after it
        LocalResult::None => tz
            .from_local_datetime(&(midnight + Duration::hours(1)))
            .earliest()
            .unwrap_or_else(|| tz.from_utc_datetime(&midnight)),
    }
}
