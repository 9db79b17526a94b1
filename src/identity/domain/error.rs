//! Error types for identity parsing.

use thiserror::Error;

/// Error returned when a string is not a syntactically valid identifier.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid {kind} identifier: '{value}'")]
pub struct IdentityParseError {
    /// Identifier kind, for example `user` or `workspace`.
    pub kind: &'static str,
    /// Rejected input value.
    pub value: String,
}
