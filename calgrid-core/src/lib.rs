//! Core types for calgrid.
//!
//! This crate provides the month grid engine behind a swipeable calendar:
//! - `grid` builds the fixed 6x7 grid of day cells for a month
//! - `month`, `format` and `compare` answer the date queries a calendar widget needs
//! - `view` tracks the selected date and rebuilds the grid on month changes
//! - `gesture` and `layout` model the drag-to-expand week/month transition

pub mod clock;
pub mod compare;
pub mod config;
pub mod date_input;
pub mod error;
pub mod format;
pub mod gesture;
pub mod grid;
pub mod layout;
pub mod month;
pub mod view;

pub use clock::{Clock, FixedClock, SystemClock};
pub use compare::{MarkedDates, is_marked, is_same_day, is_same_month, is_today};
pub use config::GridConfig;
pub use date_input::{CalendarDay, DateInput};
pub use error::{CalGridError, CalGridResult};
pub use format::{format_month_header, get_days_of_week};
pub use grid::{DayCell, MonthGrid, generate_month_matrix, generate_month_matrix_with, get_date_row};
pub use month::{get_next_month, get_previous_month};
pub use view::{CalendarView, DayState};
