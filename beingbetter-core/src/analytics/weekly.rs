//! Weekly rating chart builder
//!
//! Produces exactly seven points for the trailing week ending today, one
//! per calendar day, oldest first. Days without ratings carry `None` so a
//! chart renders them as gaps instead of misleading zeroes.

use crate::analytics::day::{day_key, start_of_day, trailing_week};
use crate::analytics::round_to_one;
use crate::locale::LocaleProfile;
use crate::types::{Rating, RatingPoint};
use crate::validate::parse_record_instant;
use chrono::{DateTime, NaiveDate, TimeZone};
use std::collections::HashMap;

/// Builds the seven-point rating series for the week ending at `now`'s day.
///
/// Ratings with unparsable timestamps or days outside the window are
/// dropped silently; the window shape never depends on the input.
pub fn build_last_week_series<Tz: TimeZone>(
    ratings: &[Rating],
    locale: &LocaleProfile,
    now: &DateTime<Tz>,
) -> Vec<RatingPoint> {
    let tz = now.timezone();
    let days = trailing_week(start_of_day(now));
    let first = days[0];
    let last = days[6];

    let mut buckets: HashMap<NaiveDate, Vec<u8>> = HashMap::new();
    for rating in ratings {
        let Some(instant) = parse_record_instant(&rating.timestamp) else {
            continue;
        };
        let day = start_of_day(&instant.with_timezone(&tz));
        if day < first || day > last {
            continue;
        }
        buckets.entry(day).or_default().push(rating.rating);
    }

    days.into_iter()
        .map(|day| RatingPoint {
            day_key: day_key(day),
            day_label: locale.day_label(day),
            value: buckets.get(&day).map(|values| {
                let total: u32 = values.iter().copied().map(u32::from).sum();
                round_to_one(f64::from(total) / values.len() as f64)
            }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::LocaleRegistry;
    use chrono::Utc;

    fn make_rating(timestamp: &str, rating: u8) -> Rating {
        Rating { timestamp: timestamp.to_string(), rating }
    }

    fn noon_utc(date: &str) -> DateTime<Utc> {
        format!("{}T12:00:00Z", date).parse().unwrap()
    }

    #[test]
    fn test_averages_per_day_and_ignores_out_of_window_rows() {
        let registry = LocaleRegistry::builtin();
        let ratings = vec![
            make_rating("2026-02-23T01:00:00.000Z", 6),
            make_rating("2026-02-23T08:30:00.000Z", 8),
            make_rating("2026-02-21T08:30:00.000Z", 4),
            make_rating("2026-02-10T08:30:00.000Z", 10),
        ];

        let points =
            build_last_week_series(&ratings, registry.resolve("en"), &noon_utc("2026-02-23"));

        assert_eq!(points.len(), 7);
        assert_eq!(points[6].day_key, "2026-02-23");
        assert_eq!(points[6].value, Some(7.0));
        assert_eq!(points[4].day_key, "2026-02-21");
        assert_eq!(points[4].value, Some(4.0));
        assert_eq!(points[0].day_key, "2026-02-17");
        assert_eq!(points[0].value, None);
    }

    #[test]
    fn test_empty_days_are_gaps_not_zeroes() {
        let registry = LocaleRegistry::builtin();
        let points = build_last_week_series(&[], registry.resolve("en"), &noon_utc("2026-02-23"));

        assert_eq!(points.len(), 7);
        assert!(points.iter().all(|point| point.value.is_none()));
    }

    #[test]
    fn test_averages_round_to_one_decimal() {
        let registry = LocaleRegistry::builtin();
        let ratings = vec![
            make_rating("2026-02-23T08:00:00.000Z", 6),
            make_rating("2026-02-23T09:00:00.000Z", 7),
            make_rating("2026-02-23T10:00:00.000Z", 7),
        ];

        let points =
            build_last_week_series(&ratings, registry.resolve("en"), &noon_utc("2026-02-23"));

        // 20 / 3 = 6.666..., kept at chart precision
        assert_eq!(points[6].value, Some(6.7));
    }

    #[test]
    fn test_unparsable_timestamps_are_dropped() {
        let registry = LocaleRegistry::builtin();
        let ratings = vec![
            make_rating("yesterday-ish", 9),
            make_rating("2026-02-23T08:00:00.000Z", 5),
        ];

        let points =
            build_last_week_series(&ratings, registry.resolve("en"), &noon_utc("2026-02-23"));

        assert_eq!(points[6].value, Some(5.0));
    }

    #[test]
    fn test_labels_follow_the_locale() {
        let registry = LocaleRegistry::builtin();
        let points = build_last_week_series(&[], registry.resolve("pl"), &noon_utc("2026-02-23"));

        assert_eq!(points[6].day_label, "pon., 23.02");
        assert_eq!(points[0].day_label, "wt., 17.02");
    }
}
