//! Injectable source of "now".

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

/// Supplies the current instant for default dates and `is_today` checks.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    /// The current calendar day in `tz`.
    fn today(&self, tz: Tz) -> NaiveDate {
        self.now().with_timezone(&tz).date_naive()
    }
}

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the same instant. Used by tests and by callers that pin "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
