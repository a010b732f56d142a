//! Month arithmetic.
//!
//! Moving by one month keeps the day of month and clamps it to the last day
//! of the target month when that month is shorter (Jan 31 -> Feb 29).

use chrono::{Datelike, Months, NaiveDate, Weekday};

use crate::error::{CalGridError, CalGridResult};

/// First day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    // day 1 is valid for every month, so with_day cannot fail here
    date.with_day(1).unwrap_or(date)
}

/// How many columns `date` sits to the right of `week_start`.
pub fn weekday_offset(date: NaiveDate, week_start: Weekday) -> u32 {
    (date.weekday().num_days_from_monday() + 7 - week_start.num_days_from_monday()) % 7
}

/// The same day of month, one month earlier (clamped).
pub fn get_previous_month(date: NaiveDate) -> CalGridResult<NaiveDate> {
    date.checked_sub_months(Months::new(1))
        .ok_or_else(|| CalGridError::InvalidDate(date.to_string()))
}

/// The same day of month, one month later (clamped).
pub fn get_next_month(date: NaiveDate) -> CalGridResult<NaiveDate> {
    date.checked_add_months(Months::new(1))
        .ok_or_else(|| CalGridError::InvalidDate(date.to_string()))
}
