//! Caller timezone resolution.

use chrono_tz::Tz;

/// Zone used when no valid zone is configured or supplied.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::America::Mexico_City;

/// Parses an IANA zone name, returning `None` for unknown names.
#[must_use]
pub fn parse_timezone(name: &str) -> Option<Tz> {
    name.trim().parse::<Tz>().ok()
}

/// Resolves caller-supplied zone names with a silent fallback.
///
/// A missing, empty or unrecognized zone name resolves to the fallback zone
/// instead of rejecting the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimezoneResolver {
    fallback: Tz,
}

impl TimezoneResolver {
    /// Creates a resolver with the given fallback zone.
    #[must_use]
    pub const fn new(fallback: Tz) -> Self {
        Self { fallback }
    }

    /// Returns the fallback zone.
    #[must_use]
    pub const fn fallback(&self) -> Tz {
        self.fallback
    }

    /// Resolves an optional zone name, typically read from a request header.
    #[must_use]
    pub fn resolve(&self, name: Option<&str>) -> Tz {
        match name.map(str::trim).filter(|value| !value.is_empty()) {
            None => self.fallback,
            Some(raw) => parse_timezone(raw).unwrap_or_else(|| {
                tracing::debug!(
                    requested = raw,
                    fallback = %self.fallback,
                    "unrecognized timezone, using fallback"
                );
                self.fallback
            }),
        }
    }
}

impl Default for TimezoneResolver {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEZONE)
    }
}
