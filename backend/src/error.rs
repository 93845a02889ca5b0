//! Crate-wide error type.

use crate::config::ConfigError;
use crate::models::{DateParseError, DateRangeError, ListingError};
use crate::services::availability::ValidationFailure;
use crate::services::booking::BookingError;
use crate::services::publish::PublishError;

/// Result type for operations that can fail in more than one domain.
pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Date(#[from] DateParseError),

    #[error(transparent)]
    DateRange(#[from] DateRangeError),

    #[error("Availability rejected: {0}")]
    Validation(#[from] ValidationFailure),

    #[error("Booking rejected: {0}")]
    Booking(#[from] BookingError),

    #[error("Invalid listing: {0}")]
    Listing(#[from] ListingError),

    #[error(transparent)]
    Publish(#[from] PublishError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Text for a user-facing notification.
    ///
    /// Validation and booking failures carry their own message already.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(failure) => failure.message(),
            AppError::Booking(err) => err.to_string(),
            AppError::Publish(PublishError::Rejected(failure)) => failure.message(),
            other => other.to_string(),
        }
    }
}
