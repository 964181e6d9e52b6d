//! Locale profiles and the locale registry
//!
//! Everything locale-conditioned in the engine sits behind a profile: the
//! stopword set for cloud normalization, weekday abbreviations, and the
//! day-label format. The registry maps locale identifiers to profiles,
//! ships `en` and `pl`, and extends from configuration, so adding a locale
//! never touches normalization or bucketing code. Unknown identifiers
//! resolve to the default profile.

use crate::config::Config;
use crate::error::{Error, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Identifier of the built-in fallback locale.
pub const DEFAULT_LOCALE: &str = "en";

const STOPWORDS_EN: [&str; 15] = [
    "the", "a", "an", "and", "or", "is", "are", "to", "of", "in", "on", "for", "it", "i", "you",
];

const STOPWORDS_PL: [&str; 12] = [
    "i", "oraz", "a", "to", "na", "w", "z", "że", "się", "jest", "dla", "do",
];

const WEEKDAYS_EN: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

const WEEKDAYS_PL: [&str; 7] = ["pon.", "wt.", "śr.", "czw.", "pt.", "sob.", "niedz."];

/// Ordering of the numeric fields in a day label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateOrder {
    /// `MM/DD`, e.g. `"Mon, 02/23"`
    MonthDay,
    /// `DD.MM`, e.g. `"pon., 23.02"`
    DayMonth,
}

/// Resolved locale bundle: stopwords, weekday abbreviations, label format.
#[derive(Debug, Clone)]
pub struct LocaleProfile {
    id: String,
    stopwords: HashSet<String>,
    weekdays: [String; 7],
    date_order: DateOrder,
}

impl LocaleProfile {
    fn new(id: &str, stopwords: &[&str], weekdays: &[&str; 7], date_order: DateOrder) -> Self {
        Self {
            id: id.to_string(),
            stopwords: stopwords.iter().map(|word| word.to_string()).collect(),
            weekdays: weekdays.map(str::to_string),
            date_order,
        }
    }

    /// The locale identifier this profile was registered under.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether a normalized word is a stopword in this locale.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Formats a day as weekday abbreviation plus zero-padded day and month.
    pub fn day_label(&self, day: NaiveDate) -> String {
        let weekday = &self.weekdays[day.weekday().num_days_from_monday() as usize];
        match self.date_order {
            DateOrder::MonthDay => format!("{}, {:02}/{:02}", weekday, day.month(), day.day()),
            DateOrder::DayMonth => format!("{}, {:02}.{:02}", weekday, day.day(), day.month()),
        }
    }

    fn extend_stopwords<I: IntoIterator<Item = String>>(&mut self, extra: I) {
        self.stopwords
            .extend(extra.into_iter().map(|word| word.to_lowercase()));
    }
}

/// Maps locale identifiers to profiles, with a default-locale fallback.
#[derive(Debug, Clone)]
pub struct LocaleRegistry {
    profiles: HashMap<String, LocaleProfile>,
    default: LocaleProfile,
}

impl LocaleRegistry {
    /// Registry with the two shipped profiles, `en` (default) and `pl`.
    pub fn builtin() -> Self {
        let en = LocaleProfile::new(DEFAULT_LOCALE, &STOPWORDS_EN, &WEEKDAYS_EN, DateOrder::MonthDay);
        let pl = LocaleProfile::new("pl", &STOPWORDS_PL, &WEEKDAYS_PL, DateOrder::DayMonth);
        let default = en.clone();
        let mut profiles = HashMap::new();
        profiles.insert(en.id.clone(), en);
        profiles.insert(pl.id.clone(), pl);
        Self { profiles, default }
    }

    /// Builds the registry from configuration on top of the built-ins.
    ///
    /// A `[locales.<id>]` entry for a known locale merges extra stopwords
    /// and may override its weekday labels or date order; an entry for a
    /// new locale must carry exactly 7 weekday labels. The configured
    /// `default_locale` must resolve after merging.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut registry = Self::builtin();

        for (id, entry) in &config.locales {
            match registry.profiles.get_mut(id) {
                Some(profile) => {
                    profile.extend_stopwords(entry.stopwords.iter().cloned());
                    if let Some(weekdays) = &entry.weekdays {
                        profile.weekdays = weekday_labels(id, weekdays)?;
                    }
                    if let Some(date_order) = entry.date_order {
                        profile.date_order = date_order;
                    }
                }
                None => {
                    let weekdays = entry.weekdays.as_ref().ok_or_else(|| {
                        Error::Config(format!(
                            "locale {}: a new locale needs 7 weekday labels",
                            id
                        ))
                    })?;
                    let mut profile = LocaleProfile {
                        id: id.clone(),
                        stopwords: HashSet::new(),
                        weekdays: weekday_labels(id, weekdays)?,
                        date_order: entry.date_order.unwrap_or(DateOrder::DayMonth),
                    };
                    profile.extend_stopwords(entry.stopwords.iter().cloned());
                    registry.profiles.insert(id.clone(), profile);
                }
            }
        }

        let default_id = &config.analytics.default_locale;
        registry.default = registry.profiles.get(default_id).cloned().ok_or_else(|| {
            Error::Config(format!(
                "default_locale {} is not a known locale",
                default_id
            ))
        })?;

        tracing::debug!(
            locales = registry.profiles.len(),
            default = %registry.default.id,
            "Locale registry ready"
        );
        Ok(registry)
    }

    /// Resolves an identifier, falling back to the default profile.
    pub fn resolve(&self, id: &str) -> &LocaleProfile {
        self.profiles.get(id).unwrap_or(&self.default)
    }

    /// Returns the profile for an identifier if one is registered.
    pub fn get(&self, id: &str) -> Option<&LocaleProfile> {
        self.profiles.get(id)
    }

    /// The fallback profile unknown identifiers resolve to.
    pub fn default_profile(&self) -> &LocaleProfile {
        &self.default
    }
}

impl Default for LocaleRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

fn weekday_labels(id: &str, labels: &[String]) -> Result<[String; 7]> {
    let count = labels.len();
    labels.to_vec().try_into().map_err(|_| {
        Error::Config(format!(
            "locale {}: expected 7 weekday labels, got {}",
            id, count
        ))
    })
}
