//! CLI command implementations.

pub mod sample;
pub mod strip;

pub use sample::SampleArgs;
pub use strip::StripArgs;

use serde::Serialize;

use dualcurve_core::Date;
use dualcurve_curves::prelude::*;

use crate::cli::OutputFormat;
use crate::output::{
    node_rows, print_header, print_json, print_status, print_table, repricing_rows, summary_rows,
    KeyValue, RepricingRow,
};

/// A stripped curve under its role.
#[derive(Debug, Serialize)]
pub struct NamedCurve {
    pub name: &'static str,
    pub curve: CurveSnapshot,
}

/// JSON document printed by `strip` and `sample`.
#[derive(Debug, Serialize)]
pub struct StripOutput {
    pub base_date: Date,
    pub iterations: u32,
    pub max_residual: f64,
    pub valid: bool,
    pub curves: Vec<NamedCurve>,
    pub repricing: Vec<RepricingRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valuation: Option<SwapValuation>,
}

/// Present value of a swap on the stripped curves.
#[derive(Debug, Clone, Serialize)]
pub struct SwapValuation {
    pub description: String,
    pub notional: f64,
    pub start_date: Date,
    pub end_date: Date,
    pub fixed_rate: f64,
    pub present_value: f64,
}

impl SwapValuation {
    fn rows(&self) -> Vec<KeyValue> {
        vec![
            KeyValue::new("Swap", self.description.clone()),
            KeyValue::new("Notional", format!("{:.0}", self.notional)),
            KeyValue::new("Start", self.start_date.to_string()),
            KeyValue::new("End", self.end_date.to_string()),
            KeyValue::new("Fixed rate", crate::output::format_percent(self.fixed_rate)),
            KeyValue::new("Present value", format!("{:.2}", self.present_value)),
        ]
    }
}

/// Prints stripped curves, the repricing audit and an optional valuation.
pub fn report<C>(
    base_date: Date,
    result: &StripResult<C>,
    curves: &[(&'static str, &DiscountCurve)],
    valuation: Option<SwapValuation>,
    format: OutputFormat,
    quiet: bool,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            let output = StripOutput {
                base_date,
                iterations: result.iterations,
                max_residual: result.max_error(),
                valid: result.is_valid(),
                curves: curves
                    .iter()
                    .map(|&(name, curve)| NamedCurve {
                        name,
                        curve: curve.snapshot(),
                    })
                    .collect(),
                repricing: repricing_rows(&result.repricing_report),
                valuation,
            };
            print_json(&output)?;
        }
        OutputFormat::Table => {
            for &(name, curve) in curves {
                if !quiet {
                    print_header(&format!("{name} curve ({base_date})"));
                }
                print_table(&node_rows(curve)?);
            }
            if !quiet {
                print_header("Repricing");
            }
            print_table(&repricing_rows(&result.repricing_report));
            if !quiet {
                print_header("Summary");
            }
            print_table(&summary_rows(result));
            if let Some(valuation) = valuation {
                if !quiet {
                    print_header("Valuation");
                }
                print_table(&valuation.rows());
            }
        }
    }

    if !quiet {
        print_status(result);
    }
    Ok(())
}
