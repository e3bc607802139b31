//! Joint projection / discounting curve stripping.

use tracing::{debug, info};

use dualcurve_core::Date;

use super::{node_dates, solve};
use crate::calibration::{CalibrationInput, CurveRole, StripperConfig};
use crate::curves::DiscountCurve;
use crate::error::CurveResult;
use crate::repricing::{BuildTimer, RepricingReport, StripResult};

/// A projection curve and the discounting curve stripped with it.
#[derive(Debug, Clone)]
pub struct CurvePair {
    /// Curve for forward rates (Libor).
    pub projection: DiscountCurve,
    /// Curve for discounting (OIS).
    pub discounting: DiscountCurve,
}

/// Strips a projection curve and a discounting curve as one system.
///
/// Deposits, futures and par swaps place nodes on the projection curve;
/// basis swaps place nodes on the discounting curve. Because swap and basis
/// swap residuals depend on both curves, all discount factors are solved
/// together:
///
/// ```text
/// x = [ projection DFs | discounting DFs ]
/// F(x)_i = residual of input i on (projection(x), discounting(x))
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JointCurveStripper {
    config: StripperConfig,
}

impl JointCurveStripper {
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

    /// Strips both curves so that every input reprices.
    ///
    /// # Errors
    ///
    /// - `CurveError::Validation` if either curve has no inputs, an anchor is
    ///   on or before `base_date`, or two inputs anchor the same curve on the
    ///   same date
    /// - `CurveError::Calibration` if the solver does not converge
    pub fn strip_joint(&self, base_date: Date, inputs: &[CalibrationInput]) -> CurveResult<CurvePair> {
        self.strip_joint_with_report(base_date, inputs)
            .map(StripResult::into_curve)
    }

    /// Strips both curves and reprices every input on them.
    pub fn strip_joint_with_report(
        &self,
        base_date: Date,
        inputs: &[CalibrationInput],
    ) -> CurveResult<StripResult<CurvePair>> {
        let timer = BuildTimer::start();

        let projection_dates = node_dates(
            base_date,
            inputs.iter().filter(|i| i.role() == CurveRole::Projection),
            "projection",
        )?;
        let discounting_dates = node_dates(
            base_date,
            inputs.iter().filter(|i| i.role() == CurveRole::Discounting),
            "discounting",
        )?;
        let split = projection_dates.len();
        info!(
            base_date = %base_date,
            projection_nodes = split,
            discounting_nodes = discounting_dates.len(),
            "stripping projection and discounting curves"
        );

        let make_curves = |dfs: &[f64]| -> CurveResult<CurvePair> {
            let (projection, discounting) = dfs.split_at(split);
            Ok(CurvePair {
                projection: DiscountCurve::new(base_date, projection_dates.clone(), projection.to_vec())?,
                discounting: DiscountCurve::new(
                    base_date,
                    discounting_dates.clone(),
                    discounting.to_vec(),
                )?,
            })
        };
        let objective = |dfs: &[f64]| -> CurveResult<Vec<f64>> {
            let curves = make_curves(dfs)?;
            inputs
                .iter()
                .map(|input| input.residual(&curves.projection, &curves.discounting))
                .collect()
        };

        let solution = solve(objective, inputs.len(), &self.config)?;
        let curves = make_curves(&solution.solution)?;

        for (date, df) in curves.projection.nodes() {
            debug!(date = %date, df, "projection node");
        }
        for (date, df) in curves.discounting.nodes() {
            debug!(date = %date, df, "discounting node");
        }

        let repricing_report = RepricingReport::from_inputs(
            inputs,
            &curves.projection,
            &curves.discounting,
            self.config.repricing_tolerance,
        )?;
        info!(
            iterations = solution.iterations,
            max_residual = solution.max_residual(),
            "projection and discounting curves stripped"
        );

        Ok(StripResult {
            curve: curves,
            repricing_report,
            iterations: solution.iterations,
            build_duration: timer.elapsed(),
        })
    }
}
