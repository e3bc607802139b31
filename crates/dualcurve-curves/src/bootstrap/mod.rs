//! Curve stripping.
//!
//! Both strippers turn a set of calibration inputs into a square nonlinear
//! system, one unknown discount factor per node and one residual per input,
//! and solve it with a derivative-free Newton method seeded with all ones.
//!
//! - [`CurveStripper`]: one curve used for both projection and discounting
//! - [`JointCurveStripper`]: a projection curve and a discounting curve
//!   solved together, because swaps and basis swaps depend on both
//!
//! Node dates are the sorted distinct anchor dates of the inputs, so the
//! result does not depend on the order the inputs are given in.
//!
//! # Example
//!
//! ```rust
//! use dualcurve_core::Date;
//! use dualcurve_curves::bootstrap::CurveStripper;
//! use dualcurve_curves::calibration::CalibrationInput;
//! use dualcurve_curves::instruments::{InterestRateSwap, LiborDeposit};
//!
//! let base = Date::from_ymd(2018, 7, 16).unwrap();
//! let spot = Date::from_ymd(2018, 7, 18).unwrap();
//! let inputs: Vec<CalibrationInput> = vec![
//!     LiborDeposit::new(1e6, spot, 3, 0.015).unwrap().into(),
//!     InterestRateSwap::new(1e6, spot, 12, 0.025).unwrap().into(),
//! ];
//!
//! let curve = CurveStripper::default().strip(base, &inputs).unwrap();
//! assert_eq!(curve.dates().len(), 2);
//! ```

mod joint;
mod single;

pub use joint::{CurvePair, JointCurveStripper};
pub use single::CurveStripper;

use dualcurve_core::Date;
use dualcurve_math::solvers::{solve_system, SystemSolverResult};

use crate::calibration::{CalibrationInput, StripperConfig};
use crate::error::{CurveError, CurveResult};

/// Returns the sorted anchor dates of `inputs`, one per input.
///
/// # Errors
///
/// Returns `CurveError::Validation` if there are no inputs, an anchor is on
/// or before `base_date`, or two inputs share an anchor date (which would
/// leave fewer nodes than equations).
pub(crate) fn node_dates<'a>(
    base_date: Date,
    inputs: impl IntoIterator<Item = &'a CalibrationInput>,
    curve: &str,
) -> CurveResult<Vec<Date>> {
    let mut dates = Vec::new();
    for input in inputs {
        input.validate()?;
        let anchor = input.anchor_date();
        if anchor <= base_date {
            return Err(CurveError::validation(format!(
                "{} anchors the {curve} curve on {anchor}, not after the base date {base_date}",
                input.label()
            )));
        }
        dates.push(anchor);
    }

    if dates.is_empty() {
        return Err(CurveError::validation(format!(
            "no inputs determine the {curve} curve"
        )));
    }

    dates.sort_unstable();
    if let Some(pair) = dates.windows(2).find(|w| w[0] == w[1]) {
        return Err(CurveError::validation(format!(
            "two inputs anchor the {curve} curve on {}; each node needs exactly one equation",
            pair[0]
        )));
    }

    Ok(dates)
}

/// Checks the residual function at the seed, then solves from there.
///
/// Errors at the seed are the inputs' own errors (a date before the base
/// date, say) and are returned as they are rather than as solver failures.
pub(crate) fn solve<F>(mut residuals: F, unknowns: usize, config: &StripperConfig) -> CurveResult<SystemSolverResult>
where
    F: FnMut(&[f64]) -> CurveResult<Vec<f64>>,
{
    let seed = vec![1.0; unknowns];
    residuals(&seed)?;
    Ok(solve_system(residuals, &seed, &config.solver)?)
}
