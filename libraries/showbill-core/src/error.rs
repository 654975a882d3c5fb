/// Core error types for Showbill
use thiserror::Error;

use crate::types::{ArtistId, ShowId, VenueId};

/// Result type alias using `ShowbillError`
pub type Result<T> = std::result::Result<T, ShowbillError>;

/// Core error type for Showbill
#[derive(Error, Debug)]
pub enum ShowbillError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Venue not found
    #[error("Venue not found: {0}")]
    VenueNotFound(VenueId),

    /// Artist not found
    #[error("Artist not found: {0}")]
    ArtistNotFound(ArtistId),

    /// Show not found
    #[error("Show not found: {0}")]
    ShowNotFound(ShowId),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// Database errors (for storage implementations)
    #[error("Database error: {0}")]
    Database(String),
}

impl ShowbillError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

#[cfg(feature = "sqlx-support")]
impl From<sqlx::Error> for ShowbillError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}
