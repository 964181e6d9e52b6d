//! Core domain types for beingbetter
//!
//! These types model the two record kinds users submit and the derived
//! aggregates the analytics builders hand to view collaborators.
//!
//! ## Terminology
//!
//! | Term | Definition |
//! |------|------------|
//! | **Check-in** | One submitted wellbeing record: free-text words, tags, up to four intensity answers |
//! | **Rating** | One submitted 1-10 daily mood score, used by the weekly chart path |
//! | **Intensity** | The four optional 0-10 dimensions of a check-in (energy, stress, anxiety, joy) |
//! | **Suggested word** | An entry from the fixed one-tap word palette ([`SUGGESTED_WORDS`]) |
//! | **Context tag** | A free-text or preset tag attached to a check-in ([`PRESET_CONTEXT_TAGS`]) |
//! | **Day key** | A `YYYY-MM-DD` string naming one local calendar day |
//! | **Streak** | Count of consecutive populated days ending at (and including) today |
//!
//! Timestamps are kept as the stored ISO 8601 strings rather than parsed
//! values: the validity rule is byte round-tripping through the canonical
//! form (see [`crate::validate::parse_instant`]), and that rule is over the
//! text itself. Field names serialize in camelCase so collections exchanged
//! with the application's JSON adapters deserialize directly.

use serde::{Deserialize, Serialize};

// ============================================
// Bounds and vocabularies
// ============================================

/// Upper bound (inclusive) for intensity answers; the lower bound is 0.
pub const INTENSITY_MAX: u8 = 10;

/// Lower bound (inclusive) for daily ratings.
pub const RATING_MIN: u8 = 1;

/// Upper bound (inclusive) for daily ratings.
pub const RATING_MAX: u8 = 10;

/// Maximum entries in a ranked top-frequency list.
pub const TOP_FREQUENCY_LIMIT: usize = 8;

/// Preset tag chips offered by the entry form.
pub const PRESET_CONTEXT_TAGS: [&str; 6] =
    ["sleep", "work", "social", "health", "weather", "cycle"];

/// The one-tap word palette offered by the entry form.
pub const SUGGESTED_WORDS: [&str; 12] = [
    "calm",
    "hopeful",
    "tired",
    "drained",
    "focused",
    "grateful",
    "overwhelmed",
    "steady",
    "joyful",
    "restless",
    "clear",
    "anxious",
];

// ============================================
// Check-in
// ============================================

/// One user-submitted wellbeing check-in.
///
/// Append-only: a check-in is created once at submission time and never
/// updated or deleted. Validation ([`crate::validate::validate_check_in`])
/// must pass before a check-in enters any store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckIn {
    /// Canonical ISO 8601 UTC instant (`YYYY-MM-DDTHH:MM:SS.mmmZ`)
    pub timestamp: String,
    /// Free-text tokens as entered, unnormalized
    pub words: Vec<String>,
    /// Palette words the user tapped, unnormalized
    pub suggested_words_used: Vec<String>,
    /// The four optional intensity answers
    pub intensity: Intensity,
    /// Free-text or preset tags, unnormalized
    pub context_tags: Vec<String>,
}

/// The four intensity dimensions of a check-in.
///
/// Each dimension is either a whole number in [0, 10] or absent ("no answer
/// for this one"). Absence is meaningful and must never collapse into zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Intensity {
    pub energy: Option<u8>,
    pub stress: Option<u8>,
    pub anxiety: Option<u8>,
    pub joy: Option<u8>,
}

impl Intensity {
    /// Returns the answer for one dimension.
    pub fn level(&self, metric: IntensityMetric) -> Option<u8> {
        match metric {
            IntensityMetric::Energy => self.energy,
            IntensityMetric::Stress => self.stress,
            IntensityMetric::Anxiety => self.anxiety,
            IntensityMetric::Joy => self.joy,
        }
    }

    /// Mean of the dimensions that were answered, `None` if none were.
    pub fn average(&self) -> Option<f64> {
        let mut total = 0u32;
        let mut count = 0u32;
        for metric in IntensityMetric::ALL {
            if let Some(value) = self.level(metric) {
                total += u32::from(value);
                count += 1;
            }
        }
        if count == 0 {
            None
        } else {
            Some(f64::from(total) / f64::from(count))
        }
    }
}

/// The fixed intensity dimensions, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntensityMetric {
    Energy,
    Stress,
    Anxiety,
    Joy,
}

impl IntensityMetric {
    /// All dimensions in their fixed display order.
    pub const ALL: [IntensityMetric; 4] = [
        IntensityMetric::Energy,
        IntensityMetric::Stress,
        IntensityMetric::Anxiety,
        IntensityMetric::Joy,
    ];

    /// Returns the identifier used in serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            IntensityMetric::Energy => "energy",
            IntensityMetric::Stress => "stress",
            IntensityMetric::Anxiety => "anxiety",
            IntensityMetric::Joy => "joy",
        }
    }
}

impl std::fmt::Display for IntensityMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for IntensityMetric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "energy" => Ok(IntensityMetric::Energy),
            "stress" => Ok(IntensityMetric::Stress),
            "anxiety" => Ok(IntensityMetric::Anxiety),
            "joy" => Ok(IntensityMetric::Joy),
            _ => Err(format!("unknown intensity metric: {}", s)),
        }
    }
}

// ============================================
// Rating
// ============================================

/// One user-submitted daily mood score.
///
/// The simpler sibling of [`CheckIn`]: a single mandatory integer in
/// [1, 10], also append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    /// Canonical ISO 8601 UTC instant (`YYYY-MM-DDTHH:MM:SS.mmmZ`)
    pub timestamp: String,
    /// Mood score in [1, 10]
    pub rating: u8,
}

// ============================================
// Derived aggregates
// ============================================

/// One ranked entry of the word cloud.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloudWord {
    /// Normalized word
    pub word: String,
    /// Accumulated intensity-weighted frequency, strictly positive
    pub score: f64,
}

/// Per-dimension intensity average over a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntensitySummary {
    /// Which dimension this summarizes
    pub metric: IntensityMetric,
    /// Mean of answered values rounded to one decimal, `None` with no samples
    pub average: Option<f64>,
    /// How many check-ins answered this dimension
    pub sample_count: usize,
}

/// One ranked entry of a top-frequency list (tags or suggested words).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencySummary {
    /// Normalized value
    pub value: String,
    /// Occurrences across the collection
    pub count: usize,
}

/// Check-in count for one day of the trailing-week volume strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyVolumePoint {
    /// `YYYY-MM-DD` grouping key
    pub day_key: String,
    /// Locale-formatted label, e.g. `"Mon, 02/23"`
    pub day_label: String,
    /// Check-ins that day, 0 when the day is empty
    pub count: usize,
}

/// The multi-metric insights summary over a check-in collection.
///
/// Ephemeral: recomputed on each query, never persisted. Structural
/// equality is derived so identical inputs can be asserted to produce
/// identical output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInInsights {
    /// All supplied records, including any skipped for parse failure
    pub total_check_ins: usize,
    /// Distinct local days with at least one check-in
    pub active_days: usize,
    /// Consecutive populated days ending today, 0 if today is empty
    pub current_streak: u32,
    /// One summary per dimension, in [`IntensityMetric::ALL`] order
    pub intensity: Vec<IntensitySummary>,
    /// Exactly 7 entries for the trailing week, chronological
    pub daily_volume: Vec<DailyVolumePoint>,
    /// Up to 8 most frequent context tags
    pub top_context_tags: Vec<FrequencySummary>,
    /// Up to 8 most frequent suggested words
    pub top_suggested_words: Vec<FrequencySummary>,
}

/// One day of the weekly rating chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingPoint {
    /// `YYYY-MM-DD` grouping key
    pub day_key: String,
    /// Locale-formatted label, e.g. `"pon., 23.02"`
    pub day_label: String,
    /// Mean of that day's ratings rounded to one decimal, `None` with no data
    ///
    /// `None` renders as a gap in the chart, never as zero.
    pub value: Option<f64>,
}

// ============================================
// Cloud windows
// ============================================

/// Query windows offered by the word-cloud view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CloudWindow {
    Today,
    Week,
    Month,
    AllTime,
}

impl CloudWindow {
    /// Returns the identifier used in serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            CloudWindow::Today => "today",
            CloudWindow::Week => "week",
            CloudWindow::Month => "month",
            CloudWindow::AllTime => "all-time",
        }
    }
}

impl std::fmt::Display for CloudWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CloudWindow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "today" => Ok(CloudWindow::Today),
            "week" => Ok(CloudWindow::Week),
            "month" => Ok(CloudWindow::Month),
            "all-time" => Ok(CloudWindow::AllTime),
            _ => Err(format!("unknown cloud window: {}", s)),
        }
    }
}
