//! Output formatting utilities.

use colored::Colorize;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use dualcurve_curves::prelude::*;

/// Prints data as a formatted table.
pub fn print_table<T: Tabled>(data: &[T]) {
    if data.is_empty() {
        println!("No results.");
        return;
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{table}");
}

/// Prints a value as pretty JSON.
pub fn print_json<T: Serialize>(data: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Formats a rate as a percentage string.
pub fn format_percent(value: f64) -> String {
    format!("{:.4}%", value * 100.0)
}

/// Prints a success message.
pub fn print_success(message: &str) {
    eprintln!("{} {}", "✓".green(), message);
}

/// Prints a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}

/// Prints a section header.
pub fn print_header(title: &str) {
    println!();
    println!("{}", title.bold().underline());
    println!();
}

/// A key-value pair for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Metric")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// One curve node with its implied rates.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct NodeRow {
    #[tabled(rename = "Date")]
    pub date: String,
    #[tabled(rename = "Discount Factor")]
    pub discount_factor: String,
    #[tabled(rename = "Zero (ACT/365F)")]
    pub zero_rate: String,
    #[tabled(rename = "Inst. Forward")]
    pub forward_rate: String,
}

/// Tabulates the nodes of `curve`.
pub fn node_rows(curve: &DiscountCurve) -> CurveResult<Vec<NodeRow>> {
    curve
        .nodes()
        .map(|(date, df)| {
            Ok(NodeRow {
                date: date.to_string(),
                discount_factor: format!("{df:.10}"),
                zero_rate: format_percent(curve.zero_rate(date)?),
                forward_rate: format_percent(curve.instantaneous_forward(date)?),
            })
        })
        .collect()
}

/// One repricing check, ready for display or JSON.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct RepricingRow {
    #[tabled(rename = "Instrument")]
    pub instrument: String,
    #[tabled(rename = "Type")]
    pub instrument_type: String,
    #[tabled(rename = "Residual", display_with = "format_residual")]
    pub residual: f64,
    #[tabled(rename = "OK", display_with = "format_passed")]
    pub passed: bool,
}

fn format_residual(residual: &f64) -> String {
    format!("{residual:.3e}")
}

fn format_passed(passed: &bool) -> String {
    if *passed {
        "✓".to_string()
    } else {
        "✗".to_string()
    }
}

/// Converts a repricing report into rows.
pub fn repricing_rows(report: &RepricingReport) -> Vec<RepricingRow> {
    report
        .checks()
        .iter()
        .map(|check| RepricingRow {
            instrument: check.instrument_id.clone(),
            instrument_type: check.instrument_type.to_string(),
            residual: check.residual,
            passed: check.passed,
        })
        .collect()
}

/// Summary lines of a strip.
pub fn summary_rows<C>(result: &StripResult<C>) -> Vec<KeyValue> {
    let report = &result.repricing_report;
    vec![
        KeyValue::new("Instruments", report.checks().len().to_string()),
        KeyValue::new("Iterations", result.iterations.to_string()),
        KeyValue::new("Max residual", format!("{:.3e}", report.max_error())),
        KeyValue::new("RMS residual", format!("{:.3e}", report.rms_error())),
        KeyValue::new(
            "Build time",
            format!("{:.1} ms", result.build_duration.as_secs_f64() * 1000.0),
        ),
    ]
}

/// Reports whether every input repriced.
pub fn print_status<C>(result: &StripResult<C>) {
    let report = &result.repricing_report;
    if result.is_valid() {
        print_success(&format!("All {} instruments reprice", report.passed_count()));
    } else {
        print_warning(&format!(
            "{} instruments outside tolerance: {}",
            report.failed_count(),
            report.failed_instruments().join(", ")
        ));
    }
}
