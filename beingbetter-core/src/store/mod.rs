//! Record store layer
//!
//! The analytics builders only ever see materialized collections; this
//! module defines the contract they are fetched through:
//! - Append-only writes, validated before a record is accepted
//! - Range listing over canonical instant strings, inclusive on both ends
//!
//! Backends implement [`CheckInStore`] and [`RatingStore`]; the bundled
//! [`MemoryStore`] backs tests and ephemeral sessions.

pub mod memory;

pub use memory::MemoryStore;

use crate::error::{Error, Result};
use crate::types::{CheckIn, Rating};
use crate::validate::parse_instant;

/// An inclusive query range over canonical instant strings.
///
/// Canonical instants are fixed-width and zero-padded, so lexicographic
/// order over the strings is chronological order and containment checks
/// never need to parse. Bounds are still checked for well-formedness via
/// [`InstantRange::validate`] before a backend trusts them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstantRange {
    /// Earliest instant included
    pub from: String,
    /// Latest instant included
    pub to: String,
}

impl InstantRange {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Rejects bounds that are not canonical instants.
    pub fn validate(&self) -> Result<()> {
        for bound in [&self.from, &self.to] {
            if parse_instant(bound).is_err() {
                return Err(Error::InvalidRange(bound.clone()));
            }
        }
        Ok(())
    }

    /// Whether a canonical timestamp falls inside the range.
    pub fn contains(&self, timestamp: &str) -> bool {
        timestamp >= self.from.as_str() && timestamp <= self.to.as_str()
    }
}

/// Storage contract for check-ins.
pub trait CheckInStore {
    /// Validates and appends one check-in. Rejected records must leave the
    /// store unchanged.
    fn append_check_in(&mut self, check_in: CheckIn) -> Result<()>;

    /// Lists check-ins inside `range`, oldest first.
    fn list_check_ins(&self, range: &InstantRange) -> Result<Vec<CheckIn>>;
}

/// Storage contract for daily ratings.
pub trait RatingStore {
    /// Validates and appends one rating. Rejected records must leave the
    /// store unchanged.
    fn append_rating(&mut self, rating: Rating) -> Result<()>;

    /// Lists ratings inside `range`, oldest first.
    fn list_ratings(&self, range: &InstantRange) -> Result<Vec<Rating>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_accepts_canonical_bounds() {
        let range = InstantRange::new("2026-02-01T00:00:00.000Z", "2026-02-24T12:00:00.000Z");
        assert!(range.validate().is_ok());
    }

    #[test]
    fn test_range_rejects_non_canonical_bounds() {
        let range = InstantRange::new("2026-02-01", "2026-02-24T12:00:00.000Z");
        let err = range.validate().unwrap_err();
        assert!(matches!(err, Error::InvalidRange(bound) if bound == "2026-02-01"));
    }

    #[test]
    fn test_contains_is_inclusive_on_both_ends() {
        let range = InstantRange::new("2026-02-01T00:00:00.000Z", "2026-02-24T12:00:00.000Z");
        assert!(range.contains("2026-02-01T00:00:00.000Z"));
        assert!(range.contains("2026-02-24T12:00:00.000Z"));
        assert!(range.contains("2026-02-10T08:30:00.000Z"));
        assert!(!range.contains("2026-01-31T23:59:59.999Z"));
        assert!(!range.contains("2026-02-24T12:00:00.001Z"));
    }
}
