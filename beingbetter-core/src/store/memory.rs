//! In-memory store backend
//!
//! Holds both record collections in plain vectors. Used by tests and by
//! ephemeral sessions that never touch disk; listing clones, so callers
//! own their snapshots.

use crate::error::Result;
use crate::store::{CheckInStore, InstantRange, RatingStore};
use crate::types::{CheckIn, Rating};
use crate::validate::{validate_check_in, validate_rating};

/// Append-only store keeping every record in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    check_ins: Vec<CheckIn>,
    ratings: Vec<Rating>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total records held, across both collections.
    pub fn len(&self) -> usize {
        self.check_ins.len() + self.ratings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.check_ins.is_empty() && self.ratings.is_empty()
    }
}

impl CheckInStore for MemoryStore {
    fn append_check_in(&mut self, check_in: CheckIn) -> Result<()> {
        validate_check_in(&check_in)?;
        tracing::debug!(
            timestamp = %check_in.timestamp,
            words = check_in.words.len(),
            "Appended check-in"
        );
        self.check_ins.push(check_in);
        Ok(())
    }

    fn list_check_ins(&self, range: &InstantRange) -> Result<Vec<CheckIn>> {
        range.validate()?;
        let mut matched: Vec<CheckIn> = self
            .check_ins
            .iter()
            .filter(|check_in| range.contains(&check_in.timestamp))
            .cloned()
            .collect();
        matched.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
        tracing::debug!(
            from = %range.from,
            to = %range.to,
            count = matched.len(),
            "Listed check-ins"
        );
        Ok(matched)
    }
}

impl RatingStore for MemoryStore {
    fn append_rating(&mut self, rating: Rating) -> Result<()> {
        validate_rating(&rating)?;
        tracing::debug!(
            timestamp = %rating.timestamp,
            rating = rating.rating,
            "Appended rating"
        );
        self.ratings.push(rating);
        Ok(())
    }

    fn list_ratings(&self, range: &InstantRange) -> Result<Vec<Rating>> {
        range.validate()?;
        let mut matched: Vec<Rating> = self
            .ratings
            .iter()
            .filter(|rating| range.contains(&rating.timestamp))
            .cloned()
            .collect();
        matched.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
        tracing::debug!(
            from = %range.from,
            to = %range.to,
            count = matched.len(),
            "Listed ratings"
        );
        Ok(matched)
    }
}
