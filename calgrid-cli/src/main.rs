mod commands;
mod render;

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::{Context, Result};
use calgrid_core::config::{GridConfig, parse_timezone, parse_weekday};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "calgrid")]
#[command(about = "Print month calendars with marked dates")]
struct Cli {
    /// Read configuration from this file instead of ~/.config/calgrid/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// First day of the week (e.g. "sunday", "monday")
    #[arg(long, global = true)]
    week_start: Option<String>,

    /// Time zone used to place instants on calendar days (e.g. "Europe/Berlin")
    #[arg(long, global = true)]
    tz: Option<String>,

    /// Print without colors (implied when stdout is not a terminal)
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the month grid containing DATE (defaults to today)
    Month {
        /// Date to select (YYYY-MM-DD or an RFC 3339 date-time)
        date: Option<String>,

        /// Mark a date with a dot (repeatable)
        #[arg(short, long)]
        mark: Vec<String>,

        /// Print the grid as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the zero-based grid row that DATE falls on
    Row { date: String },
    /// Print the weekday labels in column order
    Weekdays,
    /// Show the config path and effective settings
    Config,
    /// Write a commented default config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Month { date, mark, json } => {
            let config = resolve_config(&cli)?;
            let color = use_color(cli.no_color, std::io::stdout().is_terminal());
            commands::month::run(config, date.as_deref(), mark, *json, color)
        }
        Commands::Row { date } => {
            let config = resolve_config(&cli)?;
            commands::row::run(&config, date)
        }
        Commands::Weekdays => {
            let config = resolve_config(&cli)?;
            commands::weekdays::run(&config)
        }
        Commands::Config => {
            let config = resolve_config(&cli)?;
            commands::config::run(&config_path(&cli)?, &config)
        }
        Commands::Init { force } => commands::init::run(&config_path(&cli)?, *force),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Colors only go to a terminal, and never with --no-color.
fn use_color(no_color: bool, is_terminal: bool) -> bool {
    !no_color && is_terminal
}

fn config_path(cli: &Cli) -> Result<PathBuf> {
    match &cli.config {
        Some(path) => Ok(path.clone()),
        None => Ok(GridConfig::config_path()?),
    }
}

/// Load the config file (if any) and apply command-line overrides on top.
fn resolve_config(cli: &Cli) -> Result<GridConfig> {
    let mut config = match &cli.config {
        Some(path) => GridConfig::load_from(path)
            .with_context(|| format!("Could not load config from {}", path.display()))?,
        None => GridConfig::load()?,
    };

    if let Some(day) = &cli.week_start {
        config.week_start = parse_weekday(day)?;
    }
    if let Some(tz) = &cli.tz {
        config.timezone = parse_timezone(tz)?;
    }

    debug!(
        week_start = ?config.week_start,
        timezone = config.timezone.name(),
        "resolved config"
    );
    Ok(config)
}
