//! Runtime settings loaded from the environment.

use crate::calendar::{DEFAULT_TIMEZONE, TimezoneResolver, Tz, parse_timezone};
use thiserror::Error;

/// Environment variable naming the default IANA timezone.
pub const DEFAULT_TIMEZONE_VAR: &str = "TASKSPACE_DEFAULT_TIMEZONE";
/// Environment variable holding the `PostgreSQL` connection URL.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

/// Errors raised while loading settings.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The configured default timezone is not an IANA zone name.
    #[error("{var} is not a recognized IANA timezone: '{value}'")]
    InvalidTimezone {
        /// Variable that carried the value.
        var: &'static str,
        /// Rejected value.
        value: String,
    },
}

/// Process-wide settings.
///
/// | Env Var                      | Default               |
/// |------------------------------|-----------------------|
/// | `TASKSPACE_DEFAULT_TIMEZONE` | `America/Mexico_City` |
/// | `DATABASE_URL`               | unset (in-memory)     |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Zone used when a caller supplies none or an unrecognized one.
    pub default_timezone: Tz,
    /// `PostgreSQL` connection URL; `None` selects the in-memory adapters.
    pub database_url: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_timezone: DEFAULT_TIMEZONE,
            database_url: None,
        }
    }
}

impl Settings {
    /// Loads settings from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTimezone`] when the configured default
    /// zone is not recognized. Unlike per-request zones, a bad configured
    /// default is never silently replaced.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads settings through an arbitrary key lookup.
    ///
    /// Blank values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTimezone`] when the configured default
    /// zone is not recognized.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };

        let default_timezone = match read(DEFAULT_TIMEZONE_VAR) {
            None => DEFAULT_TIMEZONE,
            Some(value) => parse_timezone(&value).ok_or(ConfigError::InvalidTimezone {
                var: DEFAULT_TIMEZONE_VAR,
                value,
            })?,
        };

        Ok(Self {
            default_timezone,
            database_url: read(DATABASE_URL_VAR),
        })
    }

    /// Builds the resolver for caller-supplied zone names.
    #[must_use]
    pub const fn timezone_resolver(&self) -> TimezoneResolver {
        TimezoneResolver::new(self.default_timezone)
    }
}
