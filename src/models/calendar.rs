//! Week calendar helpers.
//!
//! Weeks start on Monday. Weekday indices are 0-based offsets from Monday
//! (0 = Monday .. 6 = Sunday), the same indices used by preferences.
//! Dates cross the storage boundary as ISO `YYYY-MM-DD` strings.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::error::RosterError;

/// Number of days in a roster week.
pub const DAYS_PER_WEEK: usize = 7;

const DATE_FORMAT: &str = "%Y-%m-%d";

const WEEKDAYS: [Weekday; DAYS_PER_WEEK] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Parses an ISO `YYYY-MM-DD` date.
pub fn parse_date(input: &str) -> Result<NaiveDate, RosterError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|source| {
        RosterError::InvalidDate {
            input: input.to_string(),
            source,
        }
    })
}

/// Formats a date as ISO `YYYY-MM-DD` (the stored week key format).
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Weekday index of a date (0 = Monday).
#[inline]
pub fn weekday_index(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_monday() as u8
}

/// Converts a weekday index to a chrono weekday.
pub fn weekday_from_index(index: u8) -> Result<Weekday, RosterError> {
    WEEKDAYS
        .get(usize::from(index))
        .copied()
        .ok_or(RosterError::InvalidWeekday(index))
}

/// Monday of the week containing `date`.
pub fn monday_of(date: NaiveDate) -> NaiveDate {
    days_before(date, u64::from(weekday_index(date)))
}

/// The seven dates of the week starting at `week_start`, Monday first.
///
/// Dates past the end of the supported calendar clamp to `NaiveDate::MAX`.
pub fn week_dates(week_start: NaiveDate) -> [NaiveDate; DAYS_PER_WEEK] {
    std::array::from_fn(|offset| days_after(week_start, offset as u64))
}

/// Last day (Sunday) of the week starting at `week_start`.
pub fn week_end(week_start: NaiveDate) -> NaiveDate {
    days_after(week_start, DAYS_PER_WEEK as u64 - 1)
}

/// Monday of the week before the one containing `date`.
pub fn previous_week(date: NaiveDate) -> NaiveDate {
    days_before(monday_of(date), DAYS_PER_WEEK as u64)
}

/// Monday of the week after the one containing `date`.
pub fn next_week(date: NaiveDate) -> NaiveDate {
    days_after(monday_of(date), DAYS_PER_WEEK as u64)
}

fn days_after(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX)
}

fn days_before(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_sub_days(Days::new(days)).unwrap_or(NaiveDate::MIN)
}
