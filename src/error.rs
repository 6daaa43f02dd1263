use std::path::PathBuf;

use thiserror::Error;

/// Reasons a meal cannot be constructed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MealError {
    #[error("meal name must not be empty")]
    EmptyName,

    #[error("rating {0} is outside 0..=5")]
    RatingOutOfRange(i64),
}

/// Errors returned by the meal archive.
#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("archive io error at {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed archive")]
    Malformed(#[from] serde_json::Error),

    #[error("archived meal has no name")]
    MissingName,

    #[error("archived meal is invalid: {0}")]
    InvalidMeal(#[from] MealError),
}

/// Errors returned by the rating control.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RatingError {
    #[error("no star at position {position} (control has {star_count})")]
    UnknownPosition { position: i64, star_count: u8 },

    #[error("invalid rating control config: {0}")]
    InvalidConfig(String),
}
