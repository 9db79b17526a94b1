//! Shared fixtures for unit tests.

use chrono::{DateTime, Utc};

/// Parses an RFC 3339 fixture instant.
pub fn instant(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .expect("valid RFC 3339 fixture instant")
        .with_timezone(&Utc)
}
