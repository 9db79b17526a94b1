//! Error types for activity parsing.

use thiserror::Error;

/// Errors returned while parsing activity values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ActivityDomainError {
    /// The pagination cursor is not an ISO-8601 instant.
    #[error("invalid cursor '{0}', expected an ISO-8601 instant")]
    InvalidCursor(String),

    /// The event type is not part of the closed set.
    #[error("unknown activity type: {0}")]
    UnknownActivityType(String),

    /// The entity tag is not part of the closed set.
    #[error("unknown activity entity: {0}")]
    UnknownEntity(String),
}
