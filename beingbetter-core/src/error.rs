//! Error types for beingbetter-core

use crate::types::IntensityMetric;
use thiserror::Error;

/// Main error type for the beingbetter-core library
#[derive(Error, Debug)]
pub enum Error {
    /// Timestamp is not a canonical ISO 8601 UTC instant
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// A present intensity value falls outside [0, 10]
    #[error("{metric} intensity out of range: {value}")]
    IntensityOutOfRange {
        metric: IntensityMetric,
        value: u8,
    },

    /// Rating falls outside [1, 10]
    #[error("rating out of range: {0}")]
    RatingOutOfRange(u8),

    /// A query range bound is not a canonical instant
    #[error("invalid range bound: {0}")]
    InvalidRange(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for beingbetter-core
pub type Result<T> = std::result::Result<T, Error>;
