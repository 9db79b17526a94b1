//! Due-date normalization.

use super::{CalendarError, CalendarResult, day_range::end_of_day, day_range::resolve_local};
use chrono::{DateTime, NaiveDate, NaiveDateTime, SubsecRound, Utc};
use chrono_tz::Tz;

/// Zone-less date-time layouts accepted as wall-clock time in the caller zone.
const LOCAL_LAYOUTS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Normalizes due-date input into one absolute instant.
///
/// - A bare `YYYY-MM-DD` means "by the end of that day in `zone`" and maps
///   to 23:59:59.999 wall clock.
/// - A date-time carrying an offset or `Z` is honoured verbatim.
/// - A zone-less date-time is read as wall-clock time in `zone`.
///
/// The result is truncated to millisecond precision.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDueDate`] for unparseable input; callers
/// must reject the request rather than substitute a default.
pub fn parse_due_date(input: &str, zone: Tz) -> CalendarResult<DateTime<Utc>> {
    let trimmed = input.trim();
    let invalid = || CalendarError::InvalidDueDate(input.to_owned());

    if is_calendar_day(trimmed) {
        let day = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| invalid())?;
        return end_of_day(day, zone).map_err(|_| invalid());
    }

    parse_instant(trimmed, zone)
        .map(|instant| instant.trunc_subsecs(3))
        .ok_or_else(invalid)
}

/// Returns `true` for strings shaped exactly like `YYYY-MM-DD`.
pub(super) fn is_calendar_day(value: &str) -> bool {
    value.len() == 10
        && value.bytes().enumerate().all(|(index, byte)| match index {
            4 | 7 => byte == b'-',
            _ => byte.is_ascii_digit(),
        })
}

/// Parses a full point-in-time string, using `zone` for zone-less input.
pub(super) fn parse_instant(value: &str, zone: Tz) -> Option<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Some(instant.with_timezone(&Utc));
    }
    if let Ok(instant) = DateTime::parse_from_rfc2822(value) {
        return Some(instant.with_timezone(&Utc));
    }
    LOCAL_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(value, layout).ok())
        .and_then(|local| resolve_local(zone, local))
        .map(|instant| instant.with_timezone(&Utc))
}
