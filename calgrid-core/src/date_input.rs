//! Date-like values supplied by callers.
//!
//! Marked dates, `--mark` flags and start dates arrive as strings in a handful
//! of shapes. They are parsed into a [`DateInput`] and then normalized to a
//! calendar day in one time zone so day-level comparisons never depend on the
//! time-of-day component.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{CalGridError, CalGridResult};

/// Floating date-time layouts, tried in order.
const FLOATING_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateInput {
    /// A plain calendar date (YYYY-MM-DD)
    Date(NaiveDate),
    /// A wall-clock date-time with no offset; its date is taken as-is
    Floating(NaiveDateTime),
    /// A fixed instant, converted into the display time zone before use
    Instant(DateTime<Utc>),
}

impl DateInput {
    /// Parse a date-like string.
    ///
    /// Accepts `YYYY-MM-DD`, RFC 3339 (`2024-03-10T23:00:00+02:00`),
    /// `Z`-suffixed date-times without seconds (`2024-03-10T23:00Z`) and
    /// floating date-times (`2024-03-10T23:00`).
    pub fn parse(s: &str) -> CalGridResult<Self> {
        let s = s.trim();

        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Ok(DateInput::Date(date));
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(DateInput::Instant(dt.with_timezone(&Utc)));
        }

        if let Some(naive) = s.strip_suffix('Z').or_else(|| s.strip_suffix('z')) {
            if let Some(dt) = parse_floating(naive) {
                return Ok(DateInput::Instant(dt.and_utc()));
            }
        }

        parse_floating(s)
            .map(DateInput::Floating)
            .ok_or_else(|| CalGridError::InvalidDate(s.to_string()))
    }

    /// The calendar day this value falls on when viewed in `tz`.
    pub fn calendar_day(&self, tz: Tz) -> NaiveDate {
        match self {
            DateInput::Date(d) => *d,
            DateInput::Floating(dt) => dt.date(),
            DateInput::Instant(dt) => dt.with_timezone(&tz).date_naive(),
        }
    }
}

fn parse_floating(s: &str) -> Option<NaiveDateTime> {
    FLOATING_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

impl FromStr for DateInput {
    type Err = CalGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DateInput::parse(s)
    }
}

impl fmt::Display for DateInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateInput::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            DateInput::Floating(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S")),
            DateInput::Instant(dt) => {
                write!(f, "{}", dt.to_rfc3339_opts(SecondsFormat::Secs, true))
            }
        }
    }
}

impl From<NaiveDate> for DateInput {
    fn from(date: NaiveDate) -> Self {
        DateInput::Date(date)
    }
}

impl From<NaiveDateTime> for DateInput {
    fn from(dt: NaiveDateTime) -> Self {
        DateInput::Floating(dt)
    }
}

impl From<DateTime<Utc>> for DateInput {
    fn from(dt: DateTime<Utc>) -> Self {
        DateInput::Instant(dt)
    }
}

impl Serialize for DateInput {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateInput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        DateInput::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Anything that can be pinned to a single calendar day in a time zone.
pub trait CalendarDay {
    fn calendar_day(&self, tz: Tz) -> NaiveDate;
}

impl CalendarDay for DateInput {
    fn calendar_day(&self, tz: Tz) -> NaiveDate {
        DateInput::calendar_day(self, tz)
    }
}

impl CalendarDay for NaiveDate {
    fn calendar_day(&self, _tz: Tz) -> NaiveDate {
        *self
    }
}

impl CalendarDay for NaiveDateTime {
    fn calendar_day(&self, _tz: Tz) -> NaiveDate {
        self.date()
    }
}

impl CalendarDay for DateTime<Utc> {
    fn calendar_day(&self, tz: Tz) -> NaiveDate {
        self.with_timezone(&tz).date_naive()
    }
}

impl<T: CalendarDay + ?Sized> CalendarDay for &T {
    fn calendar_day(&self, tz: Tz) -> NaiveDate {
        (**self).calendar_day(tz)
    }
}
