//! Word-cloud builder
//!
//! Scores words by intensity-weighted frequency: each check-in's words
//! count `1 + intensityAverage / 10` apiece (so a word costs between 1.0
//! and 2.0), surfacing words associated with stronger emotional states
//! more prominently than plain counting would.

use crate::analytics::day::{day_start_instant, start_of_day};
use crate::locale::LocaleProfile;
use crate::store::InstantRange;
use crate::types::{CheckIn, CloudWindow, CloudWord};
use crate::validate::format_instant;
use crate::words::normalize_words_for_cloud;
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::collections::HashMap;

/// Builds the ranked word cloud for a check-in collection.
///
/// The result is sorted by descending score, ties broken by ascending
/// word. Check-ins with no intensity answers weigh 1.0.
pub fn build_word_cloud(check_ins: &[CheckIn], locale: &LocaleProfile) -> Vec<CloudWord> {
    let mut scores: HashMap<String, f64> = HashMap::new();

    for check_in in check_ins {
        let weight = 1.0 + check_in.intensity.average().unwrap_or(0.0) / 10.0;
        for word in normalize_words_for_cloud(&check_in.words, locale) {
            *scores.entry(word).or_insert(0.0) += weight;
        }
    }

    let mut cloud: Vec<CloudWord> = scores
        .into_iter()
        .map(|(word, score)| CloudWord { word, score })
        .collect();
    cloud.sort_by(|a, b| b.score.total_cmp(&a.score).then_with(|| a.word.cmp(&b.word)));
    cloud
}

/// Computes the store query range for one cloud window.
///
/// `from` is local midnight of the window's first day in `now`'s calendar
/// (the Unix epoch for `all-time`); `to` is `now` itself. Both bounds are
/// canonical instants, ready for [`crate::store::CheckInStore::list_check_ins`].
pub fn cloud_window_range<Tz: TimeZone>(window: CloudWindow, now: &DateTime<Tz>) -> InstantRange {
    let to = now.with_timezone(&Utc);
    let from = match window {
        CloudWindow::Today => window_start(now, 0),
        CloudWindow::Week => window_start(now, 6),
        CloudWindow::Month => window_start(now, 29),
        CloudWindow::AllTime => DateTime::UNIX_EPOCH,
    };
    InstantRange::new(format_instant(&from), format_instant(&to))
}

fn window_start<Tz: TimeZone>(now: &DateTime<Tz>, days_back: i64) -> DateTime<Utc> {
    let first_day = start_of_day(now) - Duration::days(days_back);
    day_start_instant(first_day, &now.timezone()).with_timezone(&Utc)
}
