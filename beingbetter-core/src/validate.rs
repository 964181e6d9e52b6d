//! Record validation and instant parsing
//!
//! The canonical validity test for every timestamp in the system is byte
//! round-tripping: parse as an RFC 3339 instant, re-serialize in canonical
//! form (millisecond precision, `Z` suffix), require equality with the
//! input. Validation runs before a record enters a store, never after;
//! aggregation over records already read back is lenient instead (see
//! [`parse_record_instant`]).

use crate::error::{Error, Result};
use crate::types::{CheckIn, IntensityMetric, Rating, INTENSITY_MAX, RATING_MAX, RATING_MIN};
use chrono::{DateTime, SecondsFormat, Utc};

/// Parses a canonical ISO 8601 UTC instant.
///
/// Accepts exactly the strings for which
/// `format_instant(&parse_instant(s)?) == s`. Offset forms, missing or
/// extra sub-second digits, and anything unparsable are rejected.
pub fn parse_instant(value: &str) -> Result<DateTime<Utc>> {
    let parsed = DateTime::parse_from_rfc3339(value)
        .map_err(|_| Error::InvalidTimestamp(value.to_string()))?
        .with_timezone(&Utc);
    if format_instant(&parsed) != value {
        return Err(Error::InvalidTimestamp(value.to_string()));
    }
    Ok(parsed)
}

/// Formats an instant in canonical form, `YYYY-MM-DDTHH:MM:SS.mmmZ`.
pub fn format_instant(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Lenient instant parse for records read back from storage.
///
/// Builders skip, rather than reject, records this cannot parse; stored
/// records are canonical, so a failure here means corrupted data.
pub fn parse_record_instant(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|instant| instant.with_timezone(&Utc))
}

/// Validates a check-in before it may be persisted.
///
/// Rejects a non-canonical timestamp and any answered intensity dimension
/// outside [0, 10]. Pure check, no partial effects.
pub fn validate_check_in(check_in: &CheckIn) -> Result<()> {
    parse_instant(&check_in.timestamp)?;
    for metric in IntensityMetric::ALL {
        if let Some(value) = check_in.intensity.level(metric) {
            if value > INTENSITY_MAX {
                return Err(Error::IntensityOutOfRange { metric, value });
            }
        }
    }
    Ok(())
}

/// Validates a rating before it may be persisted.
pub fn validate_rating(rating: &Rating) -> Result<()> {
    parse_instant(&rating.timestamp)?;
    if rating.rating < RATING_MIN || rating.rating > RATING_MAX {
        return Err(Error::RatingOutOfRange(rating.rating));
    }
    Ok(())
}

/// Parses a raw intensity form field into an answer in [0, 10].
///
/// Returns `None` for anything else; an unparsable field means "no answer",
/// not an error.
pub fn parse_intensity_input(raw: &str) -> Option<u8> {
    let value: u8 = raw.trim().parse().ok()?;
    (value <= INTENSITY_MAX).then_some(value)
}

/// Parses a raw rating form field into a score in [1, 10].
pub fn parse_rating_input(raw: &str) -> Option<u8> {
    let value: u8 = raw.trim().parse().ok()?;
    (RATING_MIN..=RATING_MAX).contains(&value).then_some(value)
}
