use anyhow::Result;
use calgrid_core::config::GridConfig;
use calgrid_core::format::get_days_of_week;

pub fn run(config: &GridConfig) -> Result<()> {
    let labels = get_days_of_week(config.week_start, &config.day_title_format)?;
    println!("{}", labels.join(" "));
    Ok(())
}
