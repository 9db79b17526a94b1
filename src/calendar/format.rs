//! ISO-8601 rendering for externally visible instants.

use chrono::{DateTime, SecondsFormat, Utc};

/// Renders an instant as ISO-8601 UTC with millisecond precision.
#[must_use]
pub fn format_instant(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parses an ISO-8601 instant that carries its own offset.
#[must_use]
pub fn parse_iso_instant(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value.trim())
        .ok()
        .map(|instant| instant.with_timezone(&Utc))
}
