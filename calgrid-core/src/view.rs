//! Selection state for a month calendar.
//!
//! Holds the selected date and the grid for its month. The grid is rebuilt
//! only when the selection moves to a different month, so callers can call
//! [`CalendarView::select`] on every tap or gesture release. Listeners
//! registered with [`CalendarView::on_date_change`] hear about every selection.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::compare::{MarkedDates, is_same_month};
use crate::config::GridConfig;
use crate::error::CalGridResult;
use crate::format::get_days_of_week;
use crate::grid::{DayCell, MonthGrid, generate_month_matrix_with, get_date_row};
use crate::month::{get_next_month, get_previous_month};

/// How a single day cell should be drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DayState {
    pub selected: bool,
    pub today: bool,
    pub in_month: bool,
    pub marked: bool,
    /// Marker drawn in the contrast color (on top of the highlighted today bubble)
    pub contrast_dot: bool,
}

pub struct CalendarView<C: Clock = SystemClock> {
    config: GridConfig,
    clock: C,
    selected: NaiveDate,
    grid: MonthGrid,
    days_of_week: [String; 7],
    /// Called with the new date after every successful selection.
    on_date_change_callbacks: Vec<Box<dyn FnMut(NaiveDate)>>,
}

impl<C: Clock> CalendarView<C> {
    /// Start on `start`, or on today according to `clock`.
    pub fn new(config: GridConfig, clock: C, start: Option<NaiveDate>) -> CalGridResult<Self> {
        config.validate()?;
        let selected = start.unwrap_or_else(|| clock.today(config.timezone));
        let grid = generate_month_matrix_with(selected, &config)?;
        let days_of_week = get_days_of_week(config.week_start, &config.day_title_format)?;

        Ok(CalendarView {
            config,
            clock,
            selected,
            grid,
            days_of_week,
            on_date_change_callbacks: Vec::new(),
        })
    }

    /// Register a listener for selection changes, including month steps.
    pub fn on_date_change(&mut self, callback: impl FnMut(NaiveDate) + 'static) {
        self.on_date_change_callbacks.push(Box::new(callback));
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn selected(&self) -> NaiveDate {
        self.selected
    }

    pub fn grid(&self) -> &MonthGrid {
        &self.grid
    }

    pub fn header(&self) -> &str {
        &self.grid.display_name
    }

    pub fn days_of_week(&self) -> &[String; 7] {
        &self.days_of_week
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today(self.config.timezone)
    }

    /// Row of the selected date, used to keep its week in view while collapsed.
    pub fn selected_row(&self) -> usize {
        get_date_row(self.selected, self.config.week_start)
    }

    /// Select `date`. Returns true if the month changed and the grid was rebuilt.
    pub fn select(&mut self, date: NaiveDate) -> CalGridResult<bool> {
        let rebuilt = !self.grid.shows_month_of(date);
        if rebuilt {
            let grid = generate_month_matrix_with(date, &self.config)?;
            debug!(
                from = %self.selected,
                to = %date,
                "month changed, grid rebuilt"
            );
            self.grid = grid;
        }

        self.selected = date;
        for callback in &mut self.on_date_change_callbacks {
            callback(date);
        }
        Ok(rebuilt)
    }

    pub fn show_next_month(&mut self) -> CalGridResult<()> {
        let next = get_next_month(self.selected)?;
        self.select(next).map(|_| ())
    }

    pub fn show_previous_month(&mut self) -> CalGridResult<()> {
        let previous = get_previous_month(self.selected)?;
        self.select(previous).map(|_| ())
    }

    pub fn day_state(&self, cell: &DayCell, marked: &MarkedDates) -> DayState {
        let selected = cell.date == self.selected;
        let today = cell.date == self.today();
        let marked = marked.contains(cell.date);

        DayState {
            selected,
            today,
            in_month: is_same_month(cell.date, self.selected, self.config.timezone),
            marked,
            contrast_dot: marked && selected && today,
        }
    }
}
