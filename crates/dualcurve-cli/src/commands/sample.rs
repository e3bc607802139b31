//! Sample command implementation.
//!
//! Strips USD Libor projection and OIS discounting curves from the
//! built-in July 2018 market and values a forward-starting swap on them.

use anyhow::Result;
use clap::Args;

use dualcurve_core::calendars::add_months_mod_foll;
use dualcurve_curves::prelude::*;

use crate::cli::OutputFormat;
use crate::commands::{report, SwapValuation};
use crate::error::CliResult;
use crate::market::MarketData;

const SAMPLE_MARKET: &str = include_str!("../../data/sample.toml");

/// Arguments for the sample command.
#[derive(Args, Debug)]
pub struct SampleArgs {
    /// Swap notional; negative receives fixed
    #[arg(long, default_value_t = -50_000_000.0, allow_negative_numbers = true)]
    pub notional: f64,

    /// Fixed rate of the swap as a decimal
    #[arg(long, default_value_t = 0.0305)]
    pub fixed_rate: f64,

    /// Months from spot to the swap's start
    #[arg(long, default_value_t = 24)]
    pub forward_months: u32,

    /// Swap tenor in months
    #[arg(long, default_value_t = 60)]
    pub tenor_months: u32,
}

/// The built-in USD market.
pub fn sample_market() -> CliResult<MarketData> {
    MarketData::from_toml(SAMPLE_MARKET)
}

/// Execute the sample command.
pub fn execute(args: SampleArgs, format: OutputFormat, quiet: bool) -> Result<()> {
    let market = sample_market()?;
    let inputs = market.inputs()?;
    let result = JointCurveStripper::new(market.solver).strip_joint_with_report(market.base_date, &inputs)?;
    let curves = &result.curve;

    let forward_months = i32::try_from(args.forward_months)?;
    let start = add_months_mod_foll(market.spot_date()?, forward_months)?;
    let swap = InterestRateSwap::new(args.notional, start, args.tenor_months, args.fixed_rate)?;
    let present_value = swap.present_value(&curves.projection, &curves.discounting)?;
    let valuation = SwapValuation {
        description: swap.description(),
        notional: args.notional,
        start_date: start,
        end_date: swap.end_date(),
        fixed_rate: args.fixed_rate,
        present_value,
    };

    report(
        market.base_date,
        &result,
        &[("Projection", &curves.projection), ("Discounting", &curves.discounting)],
        Some(valuation),
        format,
        quiet,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_market() {
        let market = sample_market().unwrap();
        let inputs = market.inputs().unwrap();

        assert_eq!(inputs.len(), 27);
        assert_eq!(market.spot_date().unwrap().to_string(), "2018-07-31");
        let discounting = inputs
            .iter()
            .filter(|i| i.role() == CurveRole::Discounting)
            .count();
        assert_eq!(discounting, 10);
    }
}
