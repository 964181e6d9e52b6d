//! Word normalization for free-text analysis
//!
//! Check-in words arrive exactly as typed. Before any counting they are
//! case-folded and stripped down to letters, digits, and the two internal
//! joiners (hyphen, apostrophe); words that reduce to nothing carry no
//! signal and are dropped. Stopword filtering applies only to free text
//! bound for the cloud, never to structured tags, and the stopword set
//! comes from the resolved [`LocaleProfile`] so normalization itself stays
//! locale-agnostic.

use crate::locale::LocaleProfile;

/// Splits free-form entry text into raw word tokens.
///
/// Unicode whitespace separates tokens; empty fragments are dropped.
pub fn split_words(input: &str) -> Vec<String> {
    input.split_whitespace().map(str::to_string).collect()
}

/// Lowercases a word and strips every character that is not a Unicode
/// letter, Unicode digit, hyphen, or apostrophe.
pub fn normalize_word(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|&c| c.is_alphabetic() || c.is_numeric() || c == '-' || c == '\'')
        .collect()
}

/// Normalizes a check-in's word list for cloud aggregation.
///
/// Applies [`normalize_word`] to each entry, drops words that reduce to the
/// empty string, then drops the locale's stopwords. Input order is kept for
/// the survivors; ranking happens downstream.
pub fn normalize_words_for_cloud(words: &[String], locale: &LocaleProfile) -> Vec<String> {
    words
        .iter()
        .map(|word| normalize_word(word))
        .filter(|word| !word.is_empty() && !locale.is_stopword(word))
        .collect()
}
