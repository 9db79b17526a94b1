//! Day bucketing: calendar day plus zone to absolute instant range.

use super::{CalendarError, CalendarResult, due_date::is_calendar_day, due_date::parse_instant};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;
use mockable::Clock;

/// Longest wall-clock gap skipped while searching for a valid local instant.
const MAX_GAP_MINUTES: u32 = 24 * 60;

/// Absolute instant range covering one calendar day in one timezone.
///
/// `from` is the first instant of the day and `to` its last millisecond
/// (23:59:59.999 wall clock). Membership is tested half-open against
/// `until`, the first instant of the following day, so sub-millisecond
/// instants after `to` still belong to the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayRange {
    day: NaiveDate,
    zone: Tz,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
    until: DateTime<Utc>,
}

impl DayRange {
    /// Buckets `day`, interpreted as a wall-clock date in `zone`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] when the day or its successor
    /// cannot be represented.
    pub fn new(day: NaiveDate, zone: Tz) -> CalendarResult<Self> {
        let from = start_of_day(day, zone)?;
        let next = day.succ_opt().ok_or(CalendarError::OutOfRange(day))?;
        let until = start_of_day(next, zone)?;
        let to = until - TimeDelta::milliseconds(1);
        Ok(Self {
            day,
            zone,
            from,
            to,
            until,
        })
    }

    /// Returns the bucketed calendar day.
    #[must_use]
    pub const fn day(&self) -> NaiveDate {
        self.day
    }

    /// Returns the zone the day was interpreted in.
    #[must_use]
    pub const fn zone(&self) -> Tz {
        self.zone
    }

    /// Returns the first instant of the day.
    #[must_use]
    pub const fn from(&self) -> DateTime<Utc> {
        self.from
    }

    /// Returns the last millisecond of the day.
    #[must_use]
    pub const fn to(&self) -> DateTime<Utc> {
        self.to
    }

    /// Returns the first instant of the following day.
    #[must_use]
    pub const fn until(&self) -> DateTime<Utc> {
        self.until
    }

    /// Returns the absolute length of the day (23, 24 or 25 hours around DST).
    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        self.until - self.from
    }

    /// Returns `true` when the instant falls within the day.
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.from <= instant && instant < self.until
    }
}

/// Buckets a calendar day in `zone` into its absolute instant range.
///
/// # Errors
///
/// Returns [`CalendarError::OutOfRange`] for unrepresentable days.
pub fn day_range(day: NaiveDate, zone: Tz) -> CalendarResult<DayRange> {
    DayRange::new(day, zone)
}

/// Returns the first instant of `day` in `zone`.
///
/// When local midnight does not exist (a DST gap at 00:00) the first valid
/// wall-clock instant after it is used; an ambiguous midnight resolves to
/// its earliest instant.
///
/// # Errors
///
/// Returns [`CalendarError::OutOfRange`] when no valid instant is found.
pub fn start_of_day(day: NaiveDate, zone: Tz) -> CalendarResult<DateTime<Utc>> {
    let midnight = day.and_time(NaiveTime::MIN);
    resolve_local(zone, midnight)
        .map(|instant| instant.with_timezone(&Utc))
        .ok_or(CalendarError::OutOfRange(day))
}

/// Returns the last millisecond of `day` in `zone`.
///
/// # Errors
///
/// Returns [`CalendarError::OutOfRange`] for unrepresentable days.
pub fn end_of_day(day: NaiveDate, zone: Tz) -> CalendarResult<DateTime<Utc>> {
    DayRange::new(day, zone).map(|range| range.to())
}

/// Returns the current wall-clock date in `zone`.
#[must_use]
pub fn today_in(zone: Tz, clock: &impl Clock) -> NaiveDate {
    clock.utc().with_timezone(&zone).date_naive()
}

/// Returns the last millisecond of today in `zone`.
///
/// # Errors
///
/// Returns [`CalendarError::OutOfRange`] for unrepresentable days.
pub fn end_of_today(zone: Tz, clock: &impl Clock) -> CalendarResult<DateTime<Utc>> {
    end_of_day(today_in(zone, clock), zone)
}

/// Resolves a calendar-day-or-instant input to a wall-clock date in `zone`.
///
/// A bare `YYYY-MM-DD` is taken as-is; a point in time is converted to
/// `zone` and its local date is used.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDay`] when the input is unparseable.
pub fn resolve_calendar_day(input: &str, zone: Tz) -> CalendarResult<NaiveDate> {
    let trimmed = input.trim();
    if is_calendar_day(trimmed) {
        return NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .map_err(|_| CalendarError::InvalidDay(input.to_owned()));
    }
    parse_instant(trimmed, zone)
        .map(|instant| instant.with_timezone(&zone).date_naive())
        .ok_or_else(|| CalendarError::InvalidDay(input.to_owned()))
}

/// Maps a wall-clock time in `zone` to its earliest valid instant, skipping
/// forward over DST gaps.
pub(super) fn resolve_local(zone: Tz, local: NaiveDateTime) -> Option<DateTime<Tz>> {
    let mut candidate = local;
    for _ in 0..=MAX_GAP_MINUTES {
        if let Some(resolved) = zone.from_local_datetime(&candidate).earliest() {
            return Some(resolved);
        }
        candidate = candidate.checked_add_signed(TimeDelta::minutes(1))?;
    }
    None
}
