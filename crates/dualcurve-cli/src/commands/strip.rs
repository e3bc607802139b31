//! Strip command implementation.
//!
//! Strips curves from a market data file. Files with basis swaps are
//! stripped jointly into projection and discounting curves; `--single`
//! strips one curve used for both.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;
use tracing::info;

use dualcurve_curves::prelude::*;

use crate::cli::OutputFormat;
use crate::commands::report;
use crate::market::MarketData;

/// Arguments for the strip command.
#[derive(Args, Debug)]
pub struct StripArgs {
    /// Market data file (.toml or .json)
    #[arg(short = 'i', long, env = "DUALCURVE_MARKET")]
    pub file: PathBuf,

    /// Strip a single curve for projection and discounting
    #[arg(long)]
    pub single: bool,

    /// Override the repricing tolerance
    #[arg(long)]
    pub tolerance: Option<f64>,
}

/// Execute the strip command.
pub fn execute(args: StripArgs, format: OutputFormat, quiet: bool) -> Result<()> {
    let market = MarketData::load(&args.file)?;
    let mut config = market.solver;
    if let Some(tolerance) = args.tolerance {
        config = config.with_repricing_tolerance(tolerance);
    }
    let inputs = market.inputs()?;
    info!(
        file = %args.file.display(),
        instruments = inputs.len(),
        "loaded market data"
    );

    if args.single {
        if market.has_basis_swaps() {
            bail!("basis swaps need a discounting curve; strip without --single");
        }
        let result = CurveStripper::new(config).strip_with_report(market.base_date, &inputs)?;
        report(market.base_date, &result, &[("Single", &result.curve)], None, format, quiet)
    } else {
        let result = JointCurveStripper::new(config).strip_joint_with_report(market.base_date, &inputs)?;
        let curves = &result.curve;
        report(
            market.base_date,
            &result,
            &[("Projection", &curves.projection), ("Discounting", &curves.discounting)],
            None,
            format,
            quiet,
        )
    }
}
