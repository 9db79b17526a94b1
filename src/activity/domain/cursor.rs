//! Cursor and page-size types for activity pagination.

use super::ActivityDomainError;
use crate::calendar::{format_instant, parse_iso_instant};
use chrono::{DateTime, Utc};
use std::fmt;

/// Exclusive upper bound for the next page: the creation instant of the last
/// item already returned.
///
/// Pages are ordered by creation instant descending and the next page asks
/// for `created_at < cursor`, so events appended after the first page was
/// read can never leak into later pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ActivityCursor(DateTime<Utc>);

impl ActivityCursor {
    /// Creates a cursor from an instant.
    #[must_use]
    pub const fn from_instant(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    /// Parses a cursor from its ISO-8601 string form.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityDomainError::InvalidCursor`] when the value is not
    /// an ISO-8601 instant with an offset.
    pub fn parse(value: &str) -> Result<Self, ActivityDomainError> {
        parse_iso_instant(value)
            .map(Self)
            .ok_or_else(|| ActivityDomainError::InvalidCursor(value.to_owned()))
    }

    /// Returns the bounding instant.
    #[must_use]
    pub const fn instant(self) -> DateTime<Utc> {
        self.0
    }
}

impl fmt::Display for ActivityCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_instant(self.0))
    }
}

/// Page size clamped to `[PageLimit::MIN, PageLimit::MAX]`, defaulting to
/// [`PageLimit::DEFAULT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimit(usize);

impl PageLimit {
    /// Page size used when the caller supplies none.
    pub const DEFAULT: usize = 30;
    /// Smallest page size.
    pub const MIN: usize = 1;
    /// Largest page size a caller may request.
    pub const MAX: usize = 100;

    /// Clamps a caller-supplied page size.
    #[must_use]
    pub fn clamp(requested: Option<i64>) -> Self {
        let Some(value) = requested else {
            return Self(Self::DEFAULT);
        };
        let size = usize::try_from(value).map_or_else(
            |_| if value < 0 { Self::MIN } else { Self::MAX },
            |size| size.clamp(Self::MIN, Self::MAX),
        );
        Self(size)
    }

    /// Returns the page size.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Returns how many rows to request: one extra to detect a next page.
    #[must_use]
    pub const fn fetch_size(self) -> usize {
        self.0 + 1
    }
}

impl Default for PageLimit {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}
