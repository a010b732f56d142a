//! Calendar-day comparisons and marked-date lookups.
//!
//! Every comparison first pins both sides to a calendar day in the same time
//! zone, so two instants an hour apart across midnight differ while two
//! instants at 01:00 and 23:00 on the same day match.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use chrono_tz::Tz;

use crate::clock::Clock;
use crate::date_input::{CalendarDay, DateInput};
use crate::error::CalGridResult;

pub fn is_same_day(a: impl CalendarDay, b: impl CalendarDay, tz: Tz) -> bool {
    a.calendar_day(tz) == b.calendar_day(tz)
}

pub fn is_same_month(a: impl CalendarDay, b: impl CalendarDay, tz: Tz) -> bool {
    let (a, b) = (a.calendar_day(tz), b.calendar_day(tz));
    a.year() == b.year() && a.month() == b.month()
}

pub fn is_today(clock: &impl Clock, date: impl CalendarDay, tz: Tz) -> bool {
    clock.today(tz) == date.calendar_day(tz)
}

/// True if any entry of `marked_dates` falls on the same calendar day as `date`.
pub fn is_marked<T: CalendarDay>(marked_dates: &[T], date: impl CalendarDay, tz: Tz) -> bool {
    let day = date.calendar_day(tz);
    marked_dates.iter().any(|m| m.calendar_day(tz) == day)
}

/// Marked dates normalized to calendar days once, for repeated lookups while
/// rendering a grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkedDates {
    days: BTreeSet<NaiveDate>,
}

impl MarkedDates {
    pub fn new<I, T>(entries: I, tz: Tz) -> Self
    where
        I: IntoIterator<Item = T>,
        T: CalendarDay,
    {
        MarkedDates {
            days: entries.into_iter().map(|e| e.calendar_day(tz)).collect(),
        }
    }

    /// Parse each string as a [`DateInput`]; the first bad entry fails the whole set.
    pub fn parse<S: AsRef<str>>(entries: &[S], tz: Tz) -> CalGridResult<Self> {
        let inputs = entries
            .iter()
            .map(|s| DateInput::parse(s.as_ref()))
            .collect::<CalGridResult<Vec<_>>>()?;
        Ok(MarkedDates::new(inputs, tz))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.days.contains(&date)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NaiveDate> {
        self.days.iter()
    }
}
