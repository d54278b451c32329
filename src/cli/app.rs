//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::{grid_cmd, shell};
use crate::config::CabinConfig;
use crate::domain::{CabinLayout, SeatInventory};

#[derive(Parser)]
#[command(name = "cabin")]
#[command(author, version, about = "In-memory seat inventory and booking for a single flight")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Cabin layout TOML file
    #[arg(long, global = true, env = "CABIN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Number of seat rows (overrides the config file)
    #[arg(long, global = true)]
    pub rows: Option<u32>,

    /// Ordered column labels, aisle marker included (overrides the config file)
    #[arg(long, global = true)]
    pub cols: Option<String>,

    /// Column label that marks the aisle (overrides the config file)
    #[arg(long, global = true)]
    pub aisle: Option<char>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive booking session (the default)
    Shell,

    /// Print the seat map of a freshly built cabin
    Map,

    /// Print how many seats are available in a freshly built cabin
    Count,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    output.verbose("Cabin CLI starting");

    let layout = resolve_layout(&cli, &output)?;
    let mut inventory = SeatInventory::new(layout);

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => shell::run(&output, &mut inventory)?,
        Commands::Map => grid_cmd::map(&output, &inventory),
        Commands::Count => grid_cmd::count(&output, &inventory),
    }
    Ok(())
}

/// Resolves the cabin layout: defaults, then config file, then flags
fn resolve_layout(cli: &Cli, output: &Output) -> Result<CabinLayout> {
    let mut config = match &cli.config {
        Some(path) => {
            output.verbose_ctx("layout", &format!("Loading cabin config from {}", path.display()));
            CabinConfig::load(path)?
        }
        None => CabinConfig::default(),
    };

    if let Some(rows) = cli.rows {
        config.rows = rows;
    }
    if let Some(cols) = &cli.cols {
        config.columns = cols.clone();
    }
    if let Some(aisle) = cli.aisle {
        config.aisle = aisle;
    }

    output.verbose_ctx(
        "layout",
        &format!(
            "{} rows, columns {}, aisle {}",
            config.rows, config.columns, config.aisle
        ),
    );

    Ok(config.into_layout()?)
}
