//! Integration tests for the store-to-builders pipeline
//!
//! These tests use the snapshot fixture in `tests/fixtures/` to verify the
//! end-to-end flow: records enter a store validated, get listed over a
//! window, and feed the three builders.

use beingbetter_core::store::{CheckInStore, InstantRange, RatingStore};
use beingbetter_core::{
    build_check_in_insights, build_last_week_series, build_word_cloud, cloud_window_range,
    CheckIn, CloudWindow, Config, LocaleRegistry, MemoryStore, Rating,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::path::PathBuf;
use tempfile::TempDir;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot {
    check_ins: Vec<CheckIn>,
    ratings: Vec<Rating>,
}

/// Load the snapshot fixture into a populated store.
fn populated_store() -> MemoryStore {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/week-snapshot.json");
    let raw = std::fs::read_to_string(path).expect("fixture should be readable");
    let snapshot: Snapshot = serde_json::from_str(&raw).expect("fixture should deserialize");

    let mut store = MemoryStore::new();
    for check_in in snapshot.check_ins {
        store
            .append_check_in(check_in)
            .expect("fixture check-ins should pass validation");
    }
    for rating in snapshot.ratings {
        store
            .append_rating(rating)
            .expect("fixture ratings should pass validation");
    }
    store
}

fn now() -> DateTime<Utc> {
    "2026-02-24T12:00:00Z".parse().expect("literal instant")
}

fn all_time() -> InstantRange {
    cloud_window_range(CloudWindow::AllTime, &now())
}

// ============================================
// Insights Pipeline Tests
// ============================================

#[test]
fn test_snapshot_flows_from_store_to_insights() {
    let store = populated_store();
    let registry = LocaleRegistry::builtin();

    let check_ins = store.list_check_ins(&all_time()).expect("range is valid");
    assert_eq!(check_ins.len(), 4);

    let insights = build_check_in_insights(&check_ins, registry.resolve("en"), &now());

    assert_eq!(insights.total_check_ins, 4);
    assert_eq!(insights.active_days, 4);
    // Populated: Feb 22-24. The Feb 15 record is past the gap at Feb 21.
    assert_eq!(insights.current_streak, 3);

    let energy = &insights.intensity[0];
    assert_eq!(energy.average, Some(5.0));
    assert_eq!(energy.sample_count, 4);

    let anxiety = &insights.intensity[2];
    assert_eq!(anxiety.average, Some(3.0));
    assert_eq!(anxiety.sample_count, 3);

    // sleep and work tie at 2; the tie breaks lexicographically
    assert_eq!(insights.top_context_tags[0].value, "sleep");
    assert_eq!(insights.top_context_tags[0].count, 2);
    assert_eq!(insights.top_context_tags[1].value, "work");
    assert_eq!(insights.top_context_tags[2].value, "social");

    let suggested: Vec<&str> = insights
        .top_suggested_words
        .iter()
        .map(|entry| entry.value.as_str())
        .collect();
    assert_eq!(suggested, vec!["calm", "restless", "tired"]);

    let counts: Vec<usize> = insights
        .daily_volume
        .iter()
        .map(|point| point.count)
        .collect();
    assert_eq!(counts, vec![0, 0, 0, 0, 1, 1, 1]);
}

#[test]
fn test_insights_serialize_in_wire_shape() {
    let store = populated_store();
    let registry = LocaleRegistry::builtin();
    let check_ins = store.list_check_ins(&all_time()).expect("range is valid");
    let insights = build_check_in_insights(&check_ins, registry.resolve("en"), &now());

    let json = serde_json::to_value(&insights).expect("insights should serialize");
    assert_eq!(json["totalCheckIns"], 4);
    assert_eq!(json["currentStreak"], 3);
    assert_eq!(json["intensity"][0]["metric"], "energy");
    assert_eq!(json["intensity"][0]["sampleCount"], 4);
    assert_eq!(json["dailyVolume"][6]["dayKey"], "2026-02-24");
    assert_eq!(json["dailyVolume"][6]["dayLabel"], "Tue, 02/24");
    assert_eq!(json["topContextTags"][0]["value"], "sleep");
}

// ============================================
// Word Cloud Pipeline Tests
// ============================================

#[test]
fn test_word_cloud_over_the_week_window() {
    let store = populated_store();
    let registry = LocaleRegistry::builtin();

    let range = cloud_window_range(CloudWindow::Week, &now());
    assert_eq!(range.from, "2026-02-18T00:00:00.000Z");
    assert_eq!(range.to, "2026-02-24T12:00:00.000Z");

    let check_ins = store.list_check_ins(&range).expect("range is valid");
    // The Feb 15 record falls outside the trailing week
    assert_eq!(check_ins.len(), 3);

    let cloud = build_word_cloud(&check_ins, registry.resolve("en"));
    let words: Vec<&str> = cloud.iter().map(|entry| entry.word.as_str()).collect();
    assert_eq!(
        words,
        vec!["calm", "focused", "morning", "steady", "drained", "tired"]
    );

    // calm appears twice: weight 1.5 on Feb 24 plus weight 1.45 on Feb 22
    assert!((cloud[0].score - 2.95).abs() < 1e-9);
}

#[test]
fn test_all_time_window_reaches_back_past_the_week() {
    let store = populated_store();
    let registry = LocaleRegistry::builtin();

    let check_ins = store.list_check_ins(&all_time()).expect("range is valid");
    let cloud = build_word_cloud(&check_ins, registry.resolve("en"));

    assert!(cloud.iter().any(|entry| entry.word == "restless"));
}

// ============================================
// Weekly Series Pipeline Tests
// ============================================

#[test]
fn test_weekly_series_from_stored_ratings() {
    let store = populated_store();
    let registry = LocaleRegistry::builtin();

    let ratings = store.list_ratings(&all_time()).expect("range is valid");
    // Every snapshot record predates now, so the now-bounded listing is
    // complete; a future-stamped fixture row would go missing here
    assert_eq!(ratings.len(), 5);

    let points = build_last_week_series(&ratings, registry.resolve("en"), &now());

    assert_eq!(points.len(), 7);
    assert_eq!(points[0].day_key, "2026-02-18");
    assert_eq!(points[0].value, Some(5.0));
    assert_eq!(points[5].value, Some(6.5));
    assert_eq!(points[6].value, Some(8.0));
    // Days without ratings render as gaps
    assert_eq!(points[1].value, None);
    // The Feb 10 rating is outside the trailing week
    assert!(points.iter().all(|point| point.day_key != "2026-02-10"));
}

// ============================================
// Configuration Tests
// ============================================

#[test]
fn test_configured_stopwords_reach_the_cloud() {
    let temp_dir = TempDir::new().expect("temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        r#"
[analytics]
default_locale = "en"

[locales.en]
stopwords = ["morning"]
"#,
    )
    .expect("config should be writable");

    let config = Config::load_from(&config_path).expect("config should load");
    let registry = LocaleRegistry::from_config(&config).expect("locales should resolve");

    let store = populated_store();
    let range = cloud_window_range(CloudWindow::Week, &now());
    let check_ins = store.list_check_ins(&range).expect("range is valid");

    let locale = registry.resolve(config.analytics.default_locale.as_str());
    let cloud = build_word_cloud(&check_ins, locale);
    let words: Vec<&str> = cloud.iter().map(|entry| entry.word.as_str()).collect();
    assert_eq!(words, vec!["calm", "focused", "steady", "drained", "tired"]);
}

// ============================================
// Validation Boundary Tests
// ============================================

#[test]
fn test_rejected_records_never_reach_the_builders() {
    let mut store = populated_store();
    let registry = LocaleRegistry::builtin();

    let malformed = CheckIn {
        timestamp: "2026-02-24T09:00:00Z".to_string(),
        words: vec!["calm".to_string()],
        suggested_words_used: vec![],
        intensity: Default::default(),
        context_tags: vec![],
    };
    assert!(
        store.append_check_in(malformed).is_err(),
        "non-canonical timestamp should be rejected on write"
    );
    assert!(store
        .append_rating(Rating {
            timestamp: "2026-02-24T11:30:00.000Z".to_string(),
            rating: 11,
        })
        .is_err());

    let check_ins = store.list_check_ins(&all_time()).expect("range is valid");
    let insights = build_check_in_insights(&check_ins, registry.resolve("en"), &now());
    assert_eq!(insights.total_check_ins, 4);

    let ratings = store.list_ratings(&all_time()).expect("range is valid");
    assert_eq!(ratings.len(), 5);
}
