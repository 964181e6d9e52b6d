//! # beingbetter-core
//!
//! Core library for beingbetter - a personal wellbeing tracker.
//!
//! This library provides:
//! - Domain types for check-ins, ratings, and derived aggregates
//! - Validation of records before they reach a store
//! - The three analytics builders (word cloud, insights, weekly series)
//! - Locale profiles, configuration management, and logging infrastructure
//!
//! ## Architecture
//!
//! Data flows one direction:
//! - **Records:** Check-ins and ratings are validated on write and held by a
//!   store backend (append-only, immutable once stored)
//! - **Collections:** Builders receive read-only slices listed from a store
//! - **Aggregates:** Each builder produces view-ready output, recomputed per
//!   query and never persisted
//!
//! Builders are pure: the clock enters only through an explicit `now`
//! argument, whose timezone also fixes the calendar records are bucketed in.
//!
//! ## Example
//!
//! ```rust,no_run
//! use beingbetter_core::{build_check_in_insights, Config, LocaleRegistry, MemoryStore};
//! use beingbetter_core::store::{CheckInStore, InstantRange};
//! use chrono::Local;
//!
//! let config = Config::load().expect("failed to load config");
//! let locales = LocaleRegistry::from_config(&config).expect("bad locale config");
//!
//! let store = MemoryStore::new();
//! let range = InstantRange::new("1970-01-01T00:00:00.000Z", "2100-01-01T00:00:00.000Z");
//! let check_ins = store.list_check_ins(&range).expect("bad range");
//!
//! let locale = locales.resolve(config.analytics.default_locale.as_str());
//! let insights = build_check_in_insights(&check_ins, locale, &Local::now());
//! println!("streak: {}", insights.current_streak);
//! ```

// Re-export commonly used items at the crate root
pub use analytics::{
    build_check_in_insights, build_last_week_series, build_word_cloud, cloud_window_range,
};
pub use config::Config;
pub use error::{Error, Result};
pub use locale::{LocaleProfile, LocaleRegistry};
pub use store::MemoryStore;
pub use types::*;

// Public modules
pub mod analytics;
pub mod config;
pub mod error;
pub mod locale;
pub mod logging;
pub mod store;
pub mod types;
pub mod validate;
pub mod words;
