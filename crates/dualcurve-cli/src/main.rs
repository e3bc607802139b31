//! dualcurve CLI - strip projection and discounting curves from market quotes.
//!
//! # Usage
//!
//! ```bash
//! # Strip both curves from a market data file
//! dualcurve strip --file market.toml
//!
//! # Strip a single curve (no basis swaps)
//! dualcurve strip --file deposits_and_swaps.json --single
//!
//! # Built-in USD sample, with a 2y5y forward-starting swap valuation
//! dualcurve --format json sample
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod error;
mod market;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays machine readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("dualcurve=info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let format = cli.format;
    let quiet = cli.quiet;

    match cli.command {
        Commands::Strip(args) => commands::strip::execute(args, format, quiet)?,
        Commands::Sample(args) => commands::sample::execute(args, format, quiet)?,
    }

    Ok(())
}
