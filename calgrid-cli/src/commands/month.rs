use anyhow::Result;
use calgrid_core::clock::SystemClock;
use calgrid_core::compare::MarkedDates;
use calgrid_core::config::GridConfig;
use calgrid_core::view::CalendarView;
use serde_json::json;
use tracing::debug;

use crate::commands::parse_day;
use crate::render::render_month;

pub fn run(
    config: GridConfig,
    date: Option<&str>,
    marks: &[String],
    json: bool,
    color: bool,
) -> Result<()> {
    let tz = config.timezone;
    let start = date.map(|d| parse_day(d, tz)).transpose()?;
    let marked = MarkedDates::parse(marks, tz)?;
    debug!(?start, marked = marked.len(), "rendering month");

    let view = CalendarView::new(config, SystemClock, start)?;

    if json {
        let cells: Vec<_> = view
            .grid()
            .cells()
            .map(|cell| json!({ "cell": cell, "state": view.day_state(cell, &marked) }))
            .collect();
        let marked_days: Vec<_> = marked.iter().collect();
        let output = json!({
            "display_name": view.header(),
            "reference_date": view.selected(),
            "selected_row": view.selected_row(),
            "first_date": view.grid().first_date(),
            "last_date": view.grid().last_date(),
            "days_of_week": view.days_of_week(),
            "marked": marked_days,
            "cells": cells,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", render_month(&view, &marked, color));
    }

    Ok(())
}
