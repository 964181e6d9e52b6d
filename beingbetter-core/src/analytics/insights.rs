//! Check-in insights builder
//!
//! One pass over the collection fills the day buckets and the per-metric
//! intensity accumulators; everything else derives from those. A record
//! whose timestamp no longer parses joins no bucket and no accumulator but
//! still counts toward the total and still feeds the top lists, so one
//! corrupt row never hides the rest.

use crate::analytics::day::{day_key, start_of_day, trailing_week};
use crate::analytics::round_to_one;
use crate::locale::LocaleProfile;
use crate::types::{
    CheckIn, CheckInInsights, DailyVolumePoint, FrequencySummary, IntensityMetric,
    IntensitySummary, TOP_FREQUENCY_LIMIT,
};
use crate::validate::parse_record_instant;
use crate::words::normalize_word;
use chrono::{DateTime, NaiveDate, TimeZone};
use std::collections::HashMap;

/// Builds the multi-metric insights summary for a check-in collection.
///
/// `now` anchors "today", and its timezone defines the calendar records
/// are bucketed in.
pub fn build_check_in_insights<Tz: TimeZone>(
    check_ins: &[CheckIn],
    locale: &LocaleProfile,
    now: &DateTime<Tz>,
) -> CheckInInsights {
    let tz = now.timezone();
    let today = start_of_day(now);

    let mut day_buckets: HashMap<NaiveDate, usize> = HashMap::new();
    let mut accumulators = [(0u32, 0usize); 4];

    for check_in in check_ins {
        let Some(instant) = parse_record_instant(&check_in.timestamp) else {
            continue;
        };
        let day = start_of_day(&instant.with_timezone(&tz));
        *day_buckets.entry(day).or_insert(0) += 1;

        for (metric, (total, count)) in IntensityMetric::ALL.iter().zip(accumulators.iter_mut()) {
            if let Some(value) = check_in.intensity.level(*metric) {
                *total += u32::from(value);
                *count += 1;
            }
        }
    }

    let intensity = IntensityMetric::ALL
        .iter()
        .zip(accumulators)
        .map(|(metric, (total, count))| IntensitySummary {
            metric: *metric,
            average: (count > 0).then(|| round_to_one(f64::from(total) / count as f64)),
            sample_count: count,
        })
        .collect();

    CheckInInsights {
        total_check_ins: check_ins.len(),
        active_days: day_buckets.len(),
        current_streak: current_streak(&day_buckets, today),
        intensity,
        daily_volume: last_seven_days_volume(&day_buckets, locale, today),
        top_context_tags: top_frequencies(
            check_ins.iter().flat_map(|check_in| &check_in.context_tags),
            TOP_FREQUENCY_LIMIT,
        ),
        top_suggested_words: top_frequencies(
            check_ins
                .iter()
                .flat_map(|check_in| &check_in.suggested_words_used),
            TOP_FREQUENCY_LIMIT,
        ),
    }
}

/// Consecutive populated days ending today; a gap on today itself means 0.
fn current_streak(day_buckets: &HashMap<NaiveDate, usize>, today: NaiveDate) -> u32 {
    let mut streak = 0;
    let mut day = today;
    while day_buckets.contains_key(&day) {
        streak += 1;
        match day.pred_opt() {
            Some(previous) => day = previous,
            None => break,
        }
    }
    streak
}

fn last_seven_days_volume(
    day_buckets: &HashMap<NaiveDate, usize>,
    locale: &LocaleProfile,
    today: NaiveDate,
) -> Vec<DailyVolumePoint> {
    trailing_week(today)
        .into_iter()
        .map(|day| DailyVolumePoint {
            day_key: day_key(day),
            day_label: locale.day_label(day),
            count: day_buckets.get(&day).copied().unwrap_or(0),
        })
        .collect()
}

/// Ranks normalized values by count desc, then value asc, keeping `limit`.
///
/// Values pass through [`normalize_word`] only; tags and palette words are
/// structured input, so no stopword filtering applies.
fn top_frequencies<'a, I>(values: I, limit: usize) -> Vec<FrequencySummary>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut counts: HashMap<String, usize> = HashMap::new();
    for raw in values {
        let value = normalize_word(raw);
        if value.is_empty() {
            continue;
        }
        *counts.entry(value).or_insert(0) += 1;
    }

    let mut ranked: Vec<FrequencySummary> = counts
        .into_iter()
        .map(|(value, count)| FrequencySummary { value, count })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.value.cmp(&b.value)));
    ranked.truncate(limit);
    ranked
}
