//! Terminal rendering of month grids.
//!
//! Colors follow the widget palette: today in the primary color (inverted when
//! selected), the selected day underlined, days of neighbouring months dimmed
//! and marked days followed by a dot.

use calgrid_core::clock::Clock;
use calgrid_core::compare::MarkedDates;
use calgrid_core::view::{CalendarView, DayState};
use owo_colors::{OwoColorize, Style};

const MARKER: char = '•';

/// Width of one column: the widest weekday label (at least 3) plus a gap.
fn column_width(labels: &[String; 7]) -> usize {
    labels
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        .max(3)
        + 1
}

fn day_style(state: &DayState) -> Style {
    let mut style = Style::new();
    if state.today {
        style = if state.selected {
            style.reversed().bold()
        } else {
            style.blue().bold()
        };
    } else if state.selected {
        style = style.underline();
    }
    if !state.in_month {
        style = style.dimmed();
    }
    style
}

fn render_marker(state: &DayState, color: bool) -> String {
    if !state.marked {
        return " ".to_string();
    }
    if !color {
        return MARKER.to_string();
    }
    if state.contrast_dot {
        MARKER.white().to_string()
    } else {
        MARKER.blue().to_string()
    }
}

pub fn render_month<C: Clock>(
    view: &CalendarView<C>,
    marked: &MarkedDates,
    color: bool,
) -> String {
    let labels = view.days_of_week();
    let width = column_width(labels);
    let total = width * labels.len();
    let mut lines = Vec::new();

    let header = format!("{:^total$}", view.header());
    lines.push(if color {
        header.bold().to_string()
    } else {
        header
    });

    let weekdays: String = labels
        .iter()
        .map(|label| format!("{:>w$} ", label, w = width - 1))
        .collect();
    lines.push(if color {
        weekdays.dimmed().to_string()
    } else {
        weekdays
    });

    for row in &view.grid().rows {
        let mut line = String::new();
        for cell in row {
            let state = view.day_state(cell, marked);
            let day = format!("{:>w$}", cell.day, w = width - 1);
            if color {
                line.push_str(&day.style(day_style(&state)).to_string());
            } else {
                line.push_str(&day);
            }
            line.push_str(&render_marker(&state, color));
        }
        lines.push(line);
    }

    lines
        .into_iter()
        .map(|l| l.trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
