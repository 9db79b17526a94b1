//! Error types for calendar parsing and arithmetic.

use chrono::NaiveDate;
use thiserror::Error;

/// Result type for calendar operations.
pub type CalendarResult<T> = Result<T, CalendarError>;

/// Errors returned by calendar parsing and day bucketing.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CalendarError {
    /// The due-date input is neither a calendar day nor a point in time.
    #[error("invalid due date '{0}', expected YYYY-MM-DD or an ISO-8601 date-time")]
    InvalidDueDate(String),

    /// The day input is neither a calendar day nor a point in time.
    #[error("invalid day '{0}', expected YYYY-MM-DD or an ISO-8601 date-time")]
    InvalidDay(String),

    /// The calendar day has no representable successor or start instant.
    #[error("calendar day {0} is outside the supported range")]
    OutOfRange(NaiveDate),
}
