//! Analytics module for beingbetter
//!
//! The three pure builders the views consume:
//! - Word cloud (intensity-weighted word frequencies)
//! - Check-in insights (totals, streak, intensity averages, daily volume, top lists)
//! - Weekly rating series (7-point averaged chart)
//!
//! plus the shared day-bucketing primitives in [`day`].
//!
//! Builders are deterministic: the caller supplies the record collection
//! and an explicit `now`, and the timezone of `now` defines the calendar
//! days are bucketed in (the app passes a `Local` instant so buckets match
//! what the viewer perceives as "today"; tests pass a fixed zone). Records
//! that fail to parse are skipped, never fatal, and the builders leave
//! reporting them to the caller.

pub mod cloud;
pub mod day;
pub mod insights;
pub mod weekly;

pub use cloud::{build_word_cloud, cloud_window_range};
pub use day::{day_key, day_start_instant, start_of_day, trailing_week};
pub use insights::build_check_in_insights;
pub use weekly::build_last_week_series;

/// Rounds to one decimal place, the precision of every reported average.
pub(crate) fn round_to_one(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
