//! Error types for the data-loader crate.

use crate::types::{ListingId, UserId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataLoadError {
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A numeric field couldn't be parsed
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },

    /// A keyword field (role, active flag, like/dislike) had an unknown value
    #[error("Invalid {field} '{value}' at line {line}")]
    InvalidValue {
        field: &'static str,
        value: String,
        line: usize,
    },

    /// Fewer `::` separated fields than the record format needs
    #[error("Expected at least {expected} fields but found {found} in line {line}")]
    FieldCountMismatch {
        expected: usize,
        found: usize,
        line: usize,
    },

    #[error("Interactions reference unknown user {user_id}")]
    UnknownUser { user_id: UserId },

    #[error("User {user_id} judged unknown listing {listing_id}")]
    UnknownListing {
        user_id: UserId,
        listing_id: ListingId,
    },

    /// A user may like or dislike a listing once
    #[error("User {user_id} has more than one interaction with listing {listing_id}")]
    DuplicateInteraction {
        user_id: UserId,
        listing_id: ListingId,
    },
}

pub type Result<T> = std::result::Result<T, DataLoadError>;
