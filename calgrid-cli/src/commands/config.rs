use std::path::Path;

use anyhow::Result;
use calgrid_core::config::GridConfig;
use owo_colors::OwoColorize;

pub fn run(config_path: &Path, config: &GridConfig) -> Result<()> {
    let status = if config_path.exists() {
        ""
    } else {
        " (not created yet)"
    };

    println!("{}", "Paths".bold());
    println!("  Config:     {}{}", config_path.display(), status.dimmed());
    println!();
    println!("{}", "Settings".bold());
    println!("  Week start: {}", config.week_start);
    println!("  Time zone:  {}", config.timezone.name());
    println!("  Header:     {}", config.month_header_format);
    println!("  Weekdays:   {}", config.day_title_format);

    Ok(())
}
