use anyhow::Result;
use calgrid_core::config::GridConfig;
use calgrid_core::grid::get_date_row;

use crate::commands::parse_day;

pub fn run(config: &GridConfig, date: &str) -> Result<()> {
    let day = parse_day(date, config.timezone)?;
    println!("{}", get_date_row(day, config.week_start));
    Ok(())
}
