//! Failure classification shared by the service layers.
//!
//! Outer request handlers map every service error onto one of three
//! user-visible outcomes and never echo internal details for the last one.

use serde::Serialize;

/// User-visible class of a service failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The request carried malformed input; the message names the field.
    InvalidInput,
    /// The target does not exist within the caller's workspace.
    NotFound,
    /// Anything else; details stay in the logs.
    Internal,
}

impl FailureKind {
    /// Generic message for failures whose details must not leak.
    pub const INTERNAL_MESSAGE: &'static str = "internal error";
    /// Message for missing targets.
    pub const NOT_FOUND_MESSAGE: &'static str = "not found";
}

/// Classification implemented by every service error.
pub trait ClassifiedError: std::error::Error {
    /// Returns the user-visible failure class.
    fn failure_kind(&self) -> FailureKind;

    /// Returns a message that is safe to show to the caller.
    fn public_message(&self) -> String {
        match self.failure_kind() {
            FailureKind::InvalidInput => self.to_string(),
            FailureKind::NotFound => FailureKind::NOT_FOUND_MESSAGE.to_owned(),
            FailureKind::Internal => FailureKind::INTERNAL_MESSAGE.to_owned(),
        }
    }
}
