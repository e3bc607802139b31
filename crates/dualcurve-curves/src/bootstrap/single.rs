//! Single-curve stripping.

use tracing::{debug, info};

use dualcurve_core::Date;

use super::{node_dates, solve};
use crate::calibration::{CalibrationInput, CurveRole, StripperConfig};
use crate::curves::DiscountCurve;
use crate::error::{CurveError, CurveResult};
use crate::repricing::{BuildTimer, RepricingReport, StripResult};

/// Strips one curve that serves as both projection and discounting curve.
///
/// Accepts deposits, futures and par swaps. Basis swaps need a separate
/// discounting curve and are rejected; use
/// [`JointCurveStripper`](super::JointCurveStripper) for them.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurveStripper {
    config: StripperConfig,
}

impl CurveStripper {
    /// Creates a stripper with the given configuration.
    #[must_use]
    pub fn new(config: StripperConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &StripperConfig {
        &self.config
    }

    /// Strips a curve with a node at each input's anchor date.
    ///
    /// The curve reprices every input: deposits and swaps have zero present
    /// value and futures' model prices equal their market prices.
    ///
    /// # Errors
    ///
    /// - `CurveError::Validation` for empty input, a basis swap, an anchor on
    ///   or before `base_date`, or two inputs with the same anchor date
    /// - `CurveError::Calibration` if the solver does not converge
    pub fn strip(&self, base_date: Date, inputs: &[CalibrationInput]) -> CurveResult<DiscountCurve> {
        self.strip_with_report(base_date, inputs).map(StripResult::into_curve)
    }

    /// Strips a curve and reprices every input on it.
    pub fn strip_with_report(
        &self,
        base_date: Date,
        inputs: &[CalibrationInput],
    ) -> CurveResult<StripResult<DiscountCurve>> {
        let timer = BuildTimer::start();

        if let Some(input) = inputs.iter().find(|i| i.role() == CurveRole::Discounting) {
            return Err(CurveError::validation(format!(
                "{} needs a separate discounting curve; strip it jointly",
                input.label()
            )));
        }

        let dates = node_dates(base_date, inputs, "single")?;
        info!(base_date = %base_date, nodes = dates.len(), "stripping single curve");

        let make_curve = |dfs: &[f64]| DiscountCurve::new(base_date, dates.clone(), dfs.to_vec());
        let objective = |dfs: &[f64]| -> CurveResult<Vec<f64>> {
            let curve = make_curve(dfs)?;
            inputs.iter().map(|input| input.residual(&curve, &curve)).collect()
        };

        let solution = solve(objective, dates.len(), &self.config)?;
        let curve = make_curve(&solution.solution)?;

        for (date, df) in curve.nodes() {
            debug!(date = %date, df, "node");
        }

        let repricing_report = RepricingReport::from_inputs(
            inputs,
            &curve,
            &curve,
            self.config.repricing_tolerance,
        )?;
        info!(
            iterations = solution.iterations,
            max_residual = solution.max_residual(),
            "single curve stripped"
        );

        Ok(StripResult {
            curve,
            repricing_report,
            iterations: solution.iterations,
            build_duration: timer.elapsed(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruments::{EurodollarFuture, InterestRateSwap, LiborDeposit, OisBasisSwap};

    fn ymd(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_strip_without_futures() {
        let base = ymd(2018, 7, 16);
        let spot = ymd(2018, 7, 18);
        let notional = 1e6;
        let deposit = LiborDeposit::new(notional, spot, 3, 0.0150).unwrap();
        let swap_1y = InterestRateSwap::new(notional, spot, 12, 0.0250).unwrap();
        let swap_5y = InterestRateSwap::new(notional, spot, 60, 0.0300).unwrap();
        let inputs: Vec<CalibrationInput> =
            vec![deposit.into(), swap_1y.clone().into(), swap_5y.clone().into()];

        let result = CurveStripper::default().strip_with_report(base, &inputs).unwrap();
        let curve = &result.curve;

        assert_eq!(curve.base_date(), base);
        assert_eq!(curve.dates(), &[ymd(2018, 10, 18), ymd(2019, 7, 18), ymd(2023, 7, 18)]);
        for input in &inputs {
            assert!(input.residual(curve, curve).unwrap().abs() < 1e-4);
        }
        assert!(result.is_valid(), "{}", result.repricing_report);
    }

    #[test]
    fn test_strip_with_futures() {
        let base = ymd(2018, 7, 13);
        let spot = ymd(2018, 7, 17);
        let notional = 1e7;
        let edf_1 = EurodollarFuture::new(2018, 9).unwrap();
        let edf_2 = EurodollarFuture::new(2018, 12).unwrap();
        let edf_3 = EurodollarFuture::new(2019, 6).unwrap();
        let inputs = vec![
            LiborDeposit::new(notional, spot, 3, 0.0090).unwrap().into(),
            CalibrationInput::future(edf_1, 98.5),
            CalibrationInput::future(edf_2, 98.3),
            CalibrationInput::future(edf_3, 97.9),
            InterestRateSwap::new(notional, spot, 120, 0.0350).unwrap().into(),
        ];

        let curve = CurveStripper::default().strip(base, &inputs).unwrap();

        assert_eq!(curve.dates().len(), 5);
        assert!((edf_1.model_price(&curve).unwrap() - 98.5).abs() < 1e-9);
        assert!((edf_2.model_price(&curve).unwrap() - 98.3).abs() < 1e-9);
        assert!((edf_3.model_price(&curve).unwrap() - 97.9).abs() < 1e-9);
        for input in &inputs {
            assert!(input.residual(&curve, &curve).unwrap().abs() < 1e-4);
        }
    }

    #[test]
    fn test_rejects_basis_swap() {
        let base = ymd(2018, 7, 16);
        let spot = ymd(2018, 7, 18);
        let inputs = vec![
            LiborDeposit::new(1e6, spot, 3, 0.015).unwrap().into(),
            OisBasisSwap::new(1e6, spot, 24, 0.002).unwrap().into(),
        ];
        let result = CurveStripper::default().strip(base, &inputs);
        assert!(matches!(result, Err(CurveError::Validation { .. })));
    }

    #[test]
    fn test_validation_errors() {
        let stripper = CurveStripper::default();
        let base = ymd(2018, 7, 16);
        let spot = ymd(2018, 7, 18);

        assert!(stripper.strip(base, &[]).unwrap_err().is_validation());

        // Same anchor twice
        let deposit = LiborDeposit::new(1e6, spot, 12, 0.015).unwrap();
        let swap = InterestRateSwap::new(1e6, spot, 12, 0.025).unwrap();
        let err = stripper.strip(base, &[deposit.into(), swap.into()]).unwrap_err();
        assert!(err.is_validation(), "{err}");

        // Anchor before the base date
        let late_base = ymd(2018, 11, 1);
        let deposit = LiborDeposit::new(1e6, spot, 3, 0.015).unwrap();
        let err = stripper.strip(late_base, &[deposit.into()]).unwrap_err();
        assert!(err.is_validation(), "{err}");

        // A future with no price
        let future = EurodollarFuture::new(2019, 3).unwrap();
        let err = stripper.strip(base, &[CalibrationInput::future(future, f64::NAN)]).unwrap_err();
        assert!(err.is_validation(), "{err}");
    }

    #[test]
    fn test_deposit_starting_before_base_date() {
        let base = ymd(2018, 7, 16);
        let deposit = LiborDeposit::new(1e6, ymd(2018, 7, 2), 3, 0.015).unwrap();
        let err = CurveStripper::default().strip(base, &[deposit.into()]).unwrap_err();
        assert!(matches!(err, CurveError::Domain { .. }), "{err}");
    }

    #[test]
    fn test_non_convergence() {
        let base = ymd(2018, 7, 16);
        let spot = ymd(2018, 7, 18);
        let inputs = vec![
            LiborDeposit::new(1e6, spot, 3, 0.015).unwrap().into(),
            InterestRateSwap::new(1e6, spot, 60, 0.03).unwrap().into(),
        ];
        let stripper = CurveStripper::new(StripperConfig::default().with_max_iterations(1));
        let err = stripper.strip(base, &inputs).unwrap_err();
        assert!(matches!(err, CurveError::Calibration { .. }), "{err}");
    }
}
