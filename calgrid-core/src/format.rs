//! Month header and weekday labels.

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{Days, NaiveDate, Weekday};

use crate::error::{CalGridError, CalGridResult};

pub const DEFAULT_MONTH_HEADER_FORMAT: &str = "%B %Y";
pub const DEFAULT_DAY_TITLE_FORMAT: &str = "%a";

/// Reject strftime patterns chrono cannot interpret.
pub fn validate_pattern(pattern: &str) -> CalGridResult<()> {
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(CalGridError::InvalidFormat(pattern.to_string()));
    }
    Ok(())
}

/// Format a date with a strftime pattern without panicking on bad patterns
/// or on time specifiers a plain date cannot fill.
pub fn format_date(date: NaiveDate, pattern: &str) -> CalGridResult<String> {
    validate_pattern(pattern)?;
    let mut out = String::new();
    write!(out, "{}", date.format(pattern))
        .map_err(|_| CalGridError::InvalidFormat(pattern.to_string()))?;
    Ok(out)
}

/// Month name and year, e.g. "March 2024" with the default pattern.
pub fn format_month_header(date: NaiveDate, pattern: &str) -> CalGridResult<String> {
    format_date(date, pattern)
}

/// Seven weekday labels starting at `week_start`.
pub fn get_days_of_week(week_start: Weekday, pattern: &str) -> CalGridResult<[String; 7]> {
    // 2023-01-01 was a Sunday
    let sunday = NaiveDate::from_ymd_opt(2023, 1, 1)
        .ok_or_else(|| CalGridError::InvalidDate("2023-01-01".into()))?;

    let mut labels: [String; 7] = Default::default();
    let mut weekday = week_start;
    for label in labels.iter_mut() {
        let date = sunday + Days::new(u64::from(weekday.num_days_from_sunday()));
        *label = format_date(date, pattern)?;
        weekday = weekday.succ();
    }
    Ok(labels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_header_default() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        assert_eq!(
            format_month_header(date, DEFAULT_MONTH_HEADER_FORMAT).unwrap(),
            "March 2024"
        );
        assert_eq!(format_month_header(date, "%b '%y").unwrap(), "Mar '24");
    }

    #[test]
    fn test_days_of_week_sunday_start() {
        let labels = get_days_of_week(Weekday::Sun, DEFAULT_DAY_TITLE_FORMAT).unwrap();
        assert_eq!(labels, ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]);
    }

    #[test]
    fn test_days_of_week_monday_start_long_names() {
        let labels = get_days_of_week(Weekday::Mon, "%A").unwrap();
        assert_eq!(labels[0], "Monday");
        assert_eq!(labels[6], "Sunday");
    }

    #[test]
    fn test_invalid_patterns_error_instead_of_panicking() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        assert!(matches!(
            format_month_header(date, "%Q"),
            Err(CalGridError::InvalidFormat(_))
        ));
        // Hour specifier has nothing to format on a plain date
        assert!(matches!(
            format_month_header(date, "%H"),
            Err(CalGridError::InvalidFormat(_))
        ));
    }
}
