//! Month grid generation.
//!
//! A month is always shown as 6 week rows of 7 days. The first row begins on
//! the configured week-start weekday on or before the 1st, and the remaining
//! cells are filled with consecutive days, spilling into the neighbouring
//! months as needed.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::config::GridConfig;
use crate::error::{CalGridError, CalGridResult};
use crate::format::{DEFAULT_MONTH_HEADER_FORMAT, format_month_header};
use crate::month::{first_of_month, weekday_offset};

pub const NUMBER_OF_ROWS: usize = 6;
pub const DAYS_PER_WEEK: usize = 7;
pub const DAYS_PER_PAGE: usize = NUMBER_OF_ROWS * DAYS_PER_WEEK;

/// Week start used when nothing is configured.
pub const DEFAULT_WEEK_START: Weekday = Weekday::Sun;

/// One day in a month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCell {
    pub date: NaiveDate,
    /// Day of month, 1-31
    pub day: u32,
    /// Zero-based month of this cell's own date (0 = January)
    pub month_index: u32,
    pub year: i32,
    /// Canonical YYYY-MM-DD key for lookups
    pub date_key: String,
    pub is_in_displayed_month: bool,
}

impl DayCell {
    fn new(date: NaiveDate, displayed: NaiveDate) -> Self {
        DayCell {
            date,
            day: date.day(),
            month_index: date.month0(),
            year: date.year(),
            date_key: date.format("%Y-%m-%d").to_string(),
            is_in_displayed_month: date.year() == displayed.year()
                && date.month() == displayed.month(),
        }
    }
}

/// The 6x7 grid for one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthGrid {
    pub display_name: String,
    pub reference_date: NaiveDate,
    pub week_start: Weekday,
    pub rows: Vec<Vec<DayCell>>,
}

impl MonthGrid {
    /// Row index of `date` in this grid, if the grid contains it.
    pub fn row_of(&self, date: NaiveDate) -> Option<usize> {
        self.rows
            .iter()
            .position(|row| row.iter().any(|cell| cell.date == date))
    }

    pub fn cells(&self) -> impl Iterator<Item = &DayCell> {
        self.rows.iter().flatten()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.cells().next().map(|cell| cell.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.cells().last().map(|cell| cell.date)
    }

    /// Whether this grid was built for the month containing `date`.
    pub fn shows_month_of(&self, date: NaiveDate) -> bool {
        self.reference_date.year() == date.year() && self.reference_date.month() == date.month()
    }
}

/// Start of the week containing `date`.
pub fn week_start_of(date: NaiveDate, week_start: Weekday) -> CalGridResult<NaiveDate> {
    date.checked_sub_days(Days::new(u64::from(weekday_offset(date, week_start))))
        .ok_or_else(|| CalGridError::InvalidDate(date.to_string()))
}

/// Build the grid for the month containing `reference_date`, titled with the
/// default header pattern.
pub fn generate_month_matrix(
    reference_date: NaiveDate,
    week_start: Weekday,
) -> CalGridResult<MonthGrid> {
    build_grid(reference_date, week_start, DEFAULT_MONTH_HEADER_FORMAT)
}

/// Same as [`generate_month_matrix`] using the week start and header pattern
/// from `config`.
pub fn generate_month_matrix_with(
    reference_date: NaiveDate,
    config: &GridConfig,
) -> CalGridResult<MonthGrid> {
    build_grid(
        reference_date,
        config.week_start,
        &config.month_header_format,
    )
}

fn build_grid(
    reference_date: NaiveDate,
    week_start: Weekday,
    header_format: &str,
) -> CalGridResult<MonthGrid> {
    let first = first_of_month(reference_date);
    let grid_start = week_start_of(first, week_start)?;

    let mut rows = Vec::with_capacity(NUMBER_OF_ROWS);
    for week in 0..NUMBER_OF_ROWS {
        let mut row = Vec::with_capacity(DAYS_PER_WEEK);
        for weekday in 0..DAYS_PER_WEEK {
            let offset = (week * DAYS_PER_WEEK + weekday) as u64;
            let date = grid_start
                .checked_add_days(Days::new(offset))
                .ok_or_else(|| CalGridError::InvalidDate(reference_date.to_string()))?;
            row.push(DayCell::new(date, reference_date));
        }
        rows.push(row);
    }

    trace!(%reference_date, %grid_start, "generated month grid");

    Ok(MonthGrid {
        display_name: format_month_header(reference_date, header_format)?,
        reference_date,
        week_start,
        rows,
    })
}

/// Zero-based row (0-5) of `date` within its own month's grid.
pub fn get_date_row(date: NaiveDate, week_start: Weekday) -> usize {
    let lead = weekday_offset(first_of_month(date), week_start);
    ((lead + date.day0()) / DAYS_PER_WEEK as u32) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn every_day(from: NaiveDate, to: NaiveDate) -> impl Iterator<Item = NaiveDate> {
        from.iter_days().take_while(move |d| *d <= to)
    }

    #[test]
    fn test_march_2024_sunday_start() {
        let grid = generate_month_matrix(ymd(2024, 3, 10), Weekday::Sun).unwrap();

        assert_eq!(grid.display_name, "March 2024");
        let first_row: Vec<_> = grid.rows[0].iter().map(|c| c.date_key.as_str()).collect();
        assert_eq!(
            first_row,
            [
                "2024-02-25",
                "2024-02-26",
                "2024-02-27",
                "2024-02-28",
                "2024-02-29",
                "2024-03-01",
                "2024-03-02",
            ]
        );
        assert_eq!(grid.rows[1][0].date, ymd(2024, 3, 3));

        for cell in grid.cells() {
            let expected = cell.date >= ymd(2024, 3, 1) && cell.date <= ymd(2024, 3, 31);
            assert_eq!(cell.is_in_displayed_month, expected, "{}", cell.date_key);
        }
    }

    #[test]
    fn test_march_2024_monday_start() {
        let grid = generate_month_matrix(ymd(2024, 3, 10), Weekday::Mon).unwrap();
        assert_eq!(grid.rows[0][0].date, ymd(2024, 2, 26));
        assert_eq!(grid.rows[0][4].date, ymd(2024, 3, 1));
    }

    #[test]
    fn test_cell_fields() {
        let grid = generate_month_matrix(ymd(2024, 3, 10), Weekday::Sun).unwrap();
        let leading = &grid.rows[0][0];
        assert_eq!(
            (leading.day, leading.month_index, leading.year),
            (25, 1, 2024)
        );
        assert!(!leading.is_in_displayed_month);

        let december = generate_month_matrix(ymd(2023, 12, 10), Weekday::Sun).unwrap();
        let trailing = december.cells().last().unwrap();
        assert_eq!(
            (trailing.day, trailing.month_index, trailing.year),
            (6, 0, 2024)
        );
    }

    #[test]
    fn test_grid_shape_and_contiguity() {
        for week_start in [Weekday::Sun, Weekday::Mon, Weekday::Sat] {
            let days = every_day(ymd(2023, 1, 1), ymd(2025, 12, 31));
            for date in days.filter(|d| d.day() == 15) {
                let grid = generate_month_matrix(date, week_start).unwrap();

                assert_eq!(grid.rows.len(), NUMBER_OF_ROWS);
                assert!(grid.rows.iter().all(|row| row.len() == DAYS_PER_WEEK));

                let cells: Vec<_> = grid.cells().collect();
                assert_eq!(cells.len(), DAYS_PER_PAGE);
                for pair in cells.windows(2) {
                    assert_eq!(pair[0].date.succ_opt().unwrap(), pair[1].date);
                }

                let start = grid.first_date().unwrap();
                assert_eq!(start.weekday(), week_start);
                assert!(start <= first_of_month(date));
                assert!((first_of_month(date) - start).num_days() < 7);

                // In-month cells form one contiguous run covering the whole month
                let flags: Vec<bool> = cells.iter().map(|c| c.is_in_displayed_month).collect();
                let begin = flags.iter().position(|f| *f).unwrap();
                let end = flags.iter().rposition(|f| *f).unwrap();
                assert!(flags[begin..=end].iter().all(|f| *f));
                assert_eq!(cells[begin].day, 1);
                assert_eq!(cells[end].date.succ_opt().unwrap().day(), 1);
            }
        }
    }

    #[test]
    fn test_four_week_month_is_padded_to_six_rows() {
        // February 2015 starts on a Sunday and spans exactly four weeks
        let grid = generate_month_matrix(ymd(2015, 2, 1), Weekday::Sun).unwrap();
        assert_eq!(grid.rows[0][0].date, ymd(2015, 2, 1));
        assert_eq!(grid.last_date().unwrap(), ymd(2015, 3, 14));
        for cell in grid.rows[4].iter().chain(&grid.rows[5]) {
            assert!(!cell.is_in_displayed_month);
        }
    }

    #[test]
    fn test_six_week_month_is_not_truncated() {
        // June 2024 starts on a Saturday and needs all six rows
        let grid = generate_month_matrix(ymd(2024, 6, 1), Weekday::Sun).unwrap();
        assert_eq!(grid.row_of(ymd(2024, 6, 30)), Some(5));
    }

    #[test]
    fn test_get_date_row_matches_grid() {
        for week_start in [Weekday::Sun, Weekday::Mon] {
            for date in every_day(ymd(2024, 1, 1), ymd(2024, 12, 31)) {
                let grid = generate_month_matrix(date, week_start).unwrap();
                let row = get_date_row(date, week_start);
                assert_eq!(Some(row), grid.row_of(date), "{date}");
            }
        }
    }

    #[test]
    fn test_get_date_row_first_of_month() {
        // 2024-09-01 is a Sunday: aligned with column 0 on Sunday-start weeks
        assert_eq!(get_date_row(ymd(2024, 9, 1), Weekday::Sun), 0);
        assert_eq!(get_date_row(ymd(2024, 3, 1), Weekday::Sun), 0);
        assert_eq!(get_date_row(ymd(2024, 3, 10), Weekday::Sun), 2);
        assert_eq!(get_date_row(ymd(2024, 3, 31), Weekday::Sun), 5);
    }

    #[test]
    fn test_generation_is_idempotent() {
        let a = generate_month_matrix(ymd(2024, 3, 10), Weekday::Sun).unwrap();
        let b = generate_month_matrix(ymd(2024, 3, 10), Weekday::Sun).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_grid_at_calendar_edge_is_invalid_date() {
        assert!(matches!(
            generate_month_matrix(NaiveDate::MAX, Weekday::Sun),
            Err(CalGridError::InvalidDate(_))
        ));
    }
}
