use std::path::Path;

use anyhow::Result;
use calgrid_core::config::GridConfig;
use owo_colors::OwoColorize;

pub fn run(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        anyhow::bail!(
            "Config file already exists at {}\n\n\
            Re-run with --force to overwrite it.",
            config_path.display()
        );
    }

    GridConfig::create_default_config(config_path)?;
    println!("{} {}", "Created".green(), config_path.display());

    Ok(())
}
