//! Repricing reports for stripped curves.
//!
//! Every strip can be accompanied by a [`RepricingReport`]: one
//! [`RepricingCheck`] per calibration input, evaluated on the final curves.
//! A curve that does not reprice its inputs within tolerance is wrong, even
//! if the solver reported convergence.
//!
//! # Usage
//!
//! ```rust,ignore
//! let result = CurveStripper::default().strip_with_report(base_date, &inputs)?;
//!
//! if !result.is_valid() {
//!     eprintln!("Failed inputs: {:?}", result.repricing_report.failed_instruments());
//! }
//! let df = result.curve.df(date)?;
//! ```

use std::fmt;
use std::time::{Duration, Instant};

use crate::calibration::CalibrationInput;
use crate::curves::DiscountCurve;
use crate::error::CurveResult;
use crate::instruments::InstrumentType;

/// Result of repricing a single calibration input.
#[derive(Debug, Clone)]
pub struct RepricingCheck {
    /// Label of the input (e.g. "Swap 2023-07-18").
    pub instrument_id: String,

    /// Type of instrument.
    pub instrument_type: InstrumentType,

    /// Residual on the final curves: PV, or model minus market price.
    pub residual: f64,

    /// Absolute residual.
    pub error: f64,

    /// Tolerance applied.
    pub tolerance: f64,

    /// Whether the input repriced within tolerance.
    pub passed: bool,
}

impl RepricingCheck {
    /// Creates a new repricing check result.
    #[must_use]
    pub fn new(
        instrument_id: String,
        instrument_type: InstrumentType,
        residual: f64,
        tolerance: f64,
    ) -> Self {
        let error = residual.abs();
        Self {
            instrument_id,
            instrument_type,
            residual,
            error,
            tolerance,
            // NaN never passes
            passed: error <= tolerance,
        }
    }

    /// Reprices `input` on the given curves.
    pub fn from_input(
        input: &CalibrationInput,
        projection: &DiscountCurve,
        discounting: &DiscountCurve,
        tolerance: f64,
    ) -> CurveResult<Self> {
        let residual = input.residual(projection, discounting)?;
        Ok(Self::new(input.label(), input.instrument_type(), residual, tolerance))
    }
}

impl fmt::Display for RepricingCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.passed { "✓" } else { "✗" };
        write!(
            f,
            "{} {} | Residual: {:.2e} (tol: {:.2e})",
            status, self.instrument_id, self.residual, self.tolerance
        )
    }
}

/// Repricing checks for every input of a strip.
#[derive(Debug, Clone)]
pub struct RepricingReport {
    checks: Vec<RepricingCheck>,
    max_error: f64,
    rms_error: f64,
    passed_count: usize,
}

impl RepricingReport {
    /// Creates a new repricing report from individual checks.
    #[must_use]
    pub fn new(checks: Vec<RepricingCheck>) -> Self {
        let max_error = checks.iter().map(|c| c.error).fold(0.0_f64, f64::max);

        let rms_error = if checks.is_empty() {
            0.0
        } else {
            let sum_sq: f64 = checks.iter().map(|c| c.error * c.error).sum();
            (sum_sq / checks.len() as f64).sqrt()
        };

        let passed_count = checks.iter().filter(|c| c.passed).count();

        Self {
            checks,
            max_error,
            rms_error,
            passed_count,
        }
    }

    /// Reprices every input on the given curves.
    pub fn from_inputs(
        inputs: &[CalibrationInput],
        projection: &DiscountCurve,
        discounting: &DiscountCurve,
        tolerance: f64,
    ) -> CurveResult<Self> {
        let checks = inputs
            .iter()
            .map(|input| RepricingCheck::from_input(input, projection, discounting, tolerance))
            .collect::<CurveResult<Vec<_>>>()?;
        Ok(Self::new(checks))
    }

    /// Returns whether all inputs passed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.passed_count == self.checks.len()
    }

    /// Returns the individual repricing checks, in input order.
    #[must_use]
    pub fn checks(&self) -> &[RepricingCheck] {
        &self.checks
    }

    /// Returns the maximum absolute residual.
    #[must_use]
    pub fn max_error(&self) -> f64 {
        self.max_error
    }

    /// Returns the RMS residual.
    #[must_use]
    pub fn rms_error(&self) -> f64 {
        self.rms_error
    }

    /// Returns the number of inputs that passed.
    #[must_use]
    pub fn passed_count(&self) -> usize {
        self.passed_count
    }

    /// Returns the number of inputs that failed.
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.checks.len() - self.passed_count
    }

    /// Returns the labels of the inputs that failed.
    #[must_use]
    pub fn failed_instruments(&self) -> Vec<&str> {
        self.checks
            .iter()
            .filter(|c| !c.passed)
            .map(|c| c.instrument_id.as_str())
            .collect()
    }
}

impl fmt::Display for RepricingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Repricing Report")?;
        writeln!(f, "================")?;
        writeln!(f, "Status: {}", if self.is_valid() { "PASSED" } else { "FAILED" })?;
        writeln!(f, "Instruments: {}/{} passed", self.passed_count, self.checks.len())?;
        writeln!(f, "Max Error: {:.2e}", self.max_error)?;
        writeln!(f, "RMS Error: {:.2e}", self.rms_error)?;

        if !self.checks.is_empty() {
            writeln!(f)?;
            writeln!(f, "Details:")?;
            for check in &self.checks {
                writeln!(f, "  {check}")?;
            }
        }

        Ok(())
    }
}

/// A stripped curve (or curve pair) with its repricing audit trail.
#[derive(Debug, Clone)]
pub struct StripResult<C> {
    /// The stripped curve(s).
    pub curve: C,

    /// Repricing of every input on the result.
    pub repricing_report: RepricingReport,

    /// Solver iterations used.
    pub iterations: u32,

    /// Time taken to strip.
    pub build_duration: Duration,
}

impl<C> StripResult<C> {
    /// Returns whether every input reprices within tolerance.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.repricing_report.is_valid()
    }

    /// Returns the maximum repricing error.
    #[must_use]
    pub fn max_error(&self) -> f64 {
        self.repricing_report.max_error()
    }

    /// Consumes the result and returns the curve(s).
    #[must_use]
    pub fn into_curve(self) -> C {
        self.curve
    }
}

impl<C> fmt::Display for StripResult<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Strip Result")?;
        writeln!(
            f,
            "Solver iterations: {}, build time: {:?}",
            self.iterations, self.build_duration
        )?;
        writeln!(f)?;
        write!(f, "{}", self.repricing_report)
    }
}

/// Times curve building.
pub(crate) struct BuildTimer {
    start: Instant,
}

impl BuildTimer {
    pub(crate) fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub(crate) fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruments::LiborDeposit;
    use dualcurve_core::daycounts::{Act360, DayCount};
    use dualcurve_core::Date;

    #[test]
    fn test_repricing_check_passed() {
        let check = RepricingCheck::new("Deposit".to_string(), InstrumentType::Deposit, -1e-10, 1e-6);
        assert!(check.passed);
        assert!(check.error < check.tolerance);
        assert!(check.to_string().starts_with('✓'));
    }

    #[test]
    fn test_repricing_check_failed() {
        let check = RepricingCheck::new("Swap".to_string(), InstrumentType::Swap, 0.01, 1e-6);
        assert!(!check.passed);

        let nan = RepricingCheck::new("Swap".to_string(), InstrumentType::Swap, f64::NAN, 1e-6);
        assert!(!nan.passed);
    }

    #[test]
    fn test_report_counts() {
        let checks = vec![
            RepricingCheck::new("Dep 1".to_string(), InstrumentType::Deposit, 1e-10, 1e-6),
            RepricingCheck::new("Dep 2".to_string(), InstrumentType::Deposit, -0.01, 1e-6),
        ];
        let report = RepricingReport::new(checks);

        assert!(!report.is_valid());
        assert_eq!(report.passed_count(), 1);
        assert_eq!(report.failed_count(), 1);
        assert_eq!(report.failed_instruments(), vec!["Dep 2"]);
        assert!((report.max_error() - 0.01).abs() < 1e-15);
    }

    #[test]
    fn test_empty_report_is_valid() {
        let report = RepricingReport::new(Vec::new());
        assert!(report.is_valid());
        assert_eq!(report.rms_error(), 0.0);
    }

    #[test]
    fn test_report_from_inputs() {
        let start = Date::from_ymd(2018, 7, 9).unwrap();
        let end = Date::from_ymd(2018, 10, 9).unwrap();
        let deposit = LiborDeposit::new(1e6, start, 3, 0.05).unwrap();
        let df = 1.0 / (1.0 + 0.05 * Act360.year_fraction_f64(start, end));
        let curve = DiscountCurve::new(start, vec![end], vec![df]).unwrap();

        let report =
            RepricingReport::from_inputs(&[deposit.into()], &curve, &curve, 1e-6).unwrap();
        assert!(report.is_valid());

        let display = report.to_string();
        assert!(display.contains("PASSED"));
        assert!(display.contains("1/1 passed"));
        assert!(display.contains("Deposit 2018-10-09"));
    }
}
