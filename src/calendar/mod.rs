//! Timezone-aware calendar arithmetic.
//!
//! Every "which day does this belong to" question in the crate is answered
//! here. Calendar days are always interpreted as wall-clock dates in an IANA
//! timezone and converted to absolute instants through the tz database, so
//! day boundaries stay correct across daylight-saving transitions.
//!
//! - [`DayRange`] buckets a calendar day into an absolute instant range.
//! - [`parse_due_date`] normalizes heterogeneous due-date input.
//! - [`TimezoneResolver`] turns a caller-supplied zone name into a [`Tz`],
//!   falling back to a configured default.

mod day_range;
mod due_date;
mod error;
mod format;
mod timezone;

pub use chrono_tz::Tz;
pub use day_range::{
    DayRange, day_range, end_of_day, end_of_today, resolve_calendar_day, start_of_day, today_in,
};
pub use due_date::parse_due_date;
pub use error::{CalendarError, CalendarResult};
pub use format::{format_instant, parse_iso_instant};
pub use timezone::{DEFAULT_TIMEZONE, TimezoneResolver, parse_timezone};

#[cfg(test)]
mod tests;
