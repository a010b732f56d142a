pub mod config;
pub mod init;
pub mod month;
pub mod row;
pub mod weekdays;

use anyhow::Result;
use calgrid_core::date_input::DateInput;
use chrono::NaiveDate;
use chrono_tz::Tz;

/// Parse a command-line date argument into the calendar day it names in `tz`.
pub fn parse_day(input: &str, tz: Tz) -> Result<NaiveDate> {
    Ok(DateInput::parse(input)?.calendar_day(tz))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_day_uses_timezone_for_instants() {
        let day = parse_day("2024-03-10T23:00Z", Tz::Asia__Tokyo).unwrap();
        assert_eq!(day, NaiveDate::from_ymd_opt(2024, 3, 11).unwrap());
    }

    #[test]
    fn parse_day_rejects_garbage() {
        let err = parse_day("someday", Tz::UTC).unwrap_err();
        assert!(err.to_string().contains("someday"));
    }
}
