//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{SampleArgs, StripArgs};

/// dualcurve - Libor projection and OIS discounting curve stripper
#[derive(Parser)]
#[command(name = "dualcurve")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Suppress headers and status lines
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Strip curves from a TOML or JSON market data file
    Strip(StripArgs),

    /// Strip the built-in USD sample market and value a forward-starting swap
    Sample(SampleArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
}
