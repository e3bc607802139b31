//! Derivative-free Newton iteration for square nonlinear systems.

use std::fmt::Display;

use log::{debug, trace};
use nalgebra::{DMatrix, DVector};

use super::{max_abs, SolverConfig, SystemSolverResult};
use crate::error::{MathError, MathResult};
use crate::linear_algebra::{solve_damped_least_squares, solve_linear_system};

/// Maximum number of step halvings in the line search.
const MAX_BACKTRACKS: u32 = 40;

/// Sufficient decrease constant for the Armijo condition.
const ARMIJO: f64 = 1e-4;

/// Damping levels tried when the Newton direction makes no progress.
const FALLBACK_LAMBDAS: [f64; 6] = [1e-6, 1e-4, 1e-2, 1.0, 1e2, 1e4];

/// A Newton step this small that still cannot reduce the residual means the
/// residual is at rounding noise.
const STAGNATION_STEP: f64 = 1e-9;

/// Solves `F(x) = 0` for a square system without analytic derivatives.
///
/// `f` maps a trial point to its residual vector. It may fail (for example
/// when a trial point is outside the function's domain); such points are
/// treated as infeasible during the line search and Jacobian evaluation. A
/// failure at the initial guess is reported as `MathError::EvaluationFailed`.
///
/// # Arguments
///
/// * `f` - Residual function; must return as many values as it receives
/// * `initial_guess` - Starting point
/// * `config` - Solver configuration
///
/// # Errors
///
/// - `MathError::InvalidInput` for an empty initial guess
/// - `MathError::DimensionMismatch` if `f` returns a different number of
///   residuals than there are unknowns
/// - `MathError::EvaluationFailed` if `f` fails at the initial guess
/// - `MathError::ConvergenceFailed` if the iteration limit is reached or no
///   step can reduce the residual
///
/// # Example
///
/// ```rust
/// use dualcurve_math::solvers::{solve_system, SolverConfig};
///
/// // Discount factors with df1 = 0.99 and df1 * df2 = 0.97
/// let f = |x: &[f64]| -> Result<Vec<f64>, String> {
///     Ok(vec![x[0] - 0.99, x[0] * x[1] - 0.97])
/// };
///
/// let result = solve_system(f, &[1.0, 1.0], &SolverConfig::default()).unwrap();
/// assert!((result.solution[1] - 0.97 / 0.99).abs() < 1e-12);
/// ```
pub fn solve_system<F, E>(
    mut f: F,
    initial_guess: &[f64],
    config: &SolverConfig,
) -> MathResult<SystemSolverResult>
where
    F: FnMut(&[f64]) -> Result<Vec<f64>, E>,
    E: Display,
{
    let n = initial_guess.len();
    if n == 0 {
        return Err(MathError::invalid_input("cannot solve a system with no unknowns"));
    }

    let mut evaluations = 0u32;
    let mut x = DVector::from_column_slice(initial_guess);

    let first = f(x.as_slice()).map_err(|e| MathError::evaluation_failed(e.to_string()))?;
    evaluations += 1;
    if first.len() != n {
        return Err(MathError::DimensionMismatch {
            unknowns: n,
            equations: first.len(),
        });
    }
    if !all_finite(&first) {
        return Err(MathError::evaluation_failed(
            "residuals at the initial guess are not finite",
        ));
    }
    let mut fx = DVector::from_vec(first);

    for iteration in 0..config.max_iterations {
        let max_residual = max_abs(fx.as_slice());
        debug!("iteration {iteration}: max |F| = {max_residual:.3e}");

        if max_residual <= config.residual_tolerance {
            return Ok(converged(x, fx, iteration, evaluations));
        }

        let jacobian = forward_difference_jacobian(&mut f, &x, &fx, config, &mut evaluations)
            .ok_or_else(|| {
                MathError::convergence_failed(
                    iteration,
                    max_residual,
                    "could not evaluate the Jacobian around the current point",
                )
            })?;

        let newton = solve_linear_system(&jacobian, &(-&fx)).ok();
        let x_norm = x.norm();

        if let Some(delta) = &newton {
            if delta.norm() <= config.step_tolerance * (x_norm + config.step_tolerance) {
                trace!("step {:.3e} below tolerance", delta.norm());
                let x_next = &x + delta;
                if let Some(f_next) = evaluate(&mut f, &x_next, n, &mut evaluations) {
                    if max_abs(f_next.as_slice()) <= max_residual {
                        return Ok(converged(x_next, f_next, iteration + 1, evaluations));
                    }
                }
                return Ok(converged(x, fx, iteration, evaluations));
            }
        } else {
            debug!("iteration {iteration}: singular Jacobian, using damped steps");
        }

        let phi = 0.5 * fx.norm_squared();
        let gradient = jacobian.transpose() * &fx;

        // Newton direction first, then increasingly damped directions
        let mut accepted = None;
        if let Some(delta) = &newton {
            accepted = line_search(&mut f, &x, delta, phi, gradient.dot(delta), n, &mut evaluations);
        }
        if accepted.is_none() {
            for lambda in FALLBACK_LAMBDAS {
                let Ok(delta) = solve_damped_least_squares(&jacobian, &fx, lambda) else {
                    continue;
                };
                if !all_finite(delta.as_slice()) {
                    continue;
                }
                trace!("iteration {iteration}: trying damped step with lambda = {lambda:.0e}");
                accepted =
                    line_search(&mut f, &x, &delta, phi, gradient.dot(&delta), n, &mut evaluations);
                if accepted.is_some() {
                    break;
                }
            }
        }

        match accepted {
            Some((x_next, f_next)) => {
                x = x_next;
                fx = f_next;
            }
            None => {
                let stagnated = newton
                    .as_ref()
                    .is_some_and(|delta| delta.norm() <= STAGNATION_STEP * (x_norm + 1.0));
                if stagnated {
                    debug!("iteration {iteration}: residual at rounding noise, stopping");
                    return Ok(converged(x, fx, iteration, evaluations));
                }
                return Err(MathError::convergence_failed(
                    iteration,
                    max_residual,
                    "no step along the Newton or damped directions reduces the residual",
                ));
            }
        }
    }

    let max_residual = max_abs(fx.as_slice());
    if max_residual <= config.residual_tolerance {
        return Ok(converged(x, fx, config.max_iterations, evaluations));
    }
    Err(MathError::convergence_failed(
        config.max_iterations,
        max_residual,
        format!("iteration limit of {} reached", config.max_iterations),
    ))
}

fn converged(
    x: DVector<f64>,
    fx: DVector<f64>,
    iterations: u32,
    evaluations: u32,
) -> SystemSolverResult {
    debug!(
        "converged after {iterations} iterations ({evaluations} evaluations), max |F| = {:.3e}",
        max_abs(fx.as_slice())
    );
    SystemSolverResult {
        solution: x.as_slice().to_vec(),
        residuals: fx.as_slice().to_vec(),
        iterations,
        evaluations,
    }
}

/// Evaluates `f`, returning `None` for failures and non-finite output.
fn evaluate<F, E>(f: &mut F, x: &DVector<f64>, n: usize, evaluations: &mut u32) -> Option<DVector<f64>>
where
    F: FnMut(&[f64]) -> Result<Vec<f64>, E>,
    E: Display,
{
    *evaluations += 1;
    match f(x.as_slice()) {
        Ok(values) if values.len() == n && all_finite(&values) => Some(DVector::from_vec(values)),
        Ok(_) => None,
        Err(e) => {
            trace!("evaluation failed at trial point: {e}");
            None
        }
    }
}

/// Backtracking line search on `½‖F‖²` along `delta`.
///
/// `slope` is the directional derivative `(JᵀF)·δ`; directions that are not
/// descent directions are rejected outright.
#[allow(clippy::too_many_arguments)]
fn line_search<F, E>(
    f: &mut F,
    x: &DVector<f64>,
    delta: &DVector<f64>,
    phi: f64,
    slope: f64,
    n: usize,
    evaluations: &mut u32,
) -> Option<(DVector<f64>, DVector<f64>)>
where
    F: FnMut(&[f64]) -> Result<Vec<f64>, E>,
    E: Display,
{
    if slope.is_nan() || slope >= 0.0 {
        return None;
    }

    let mut alpha = 1.0;
    for _ in 0..MAX_BACKTRACKS {
        let trial = x + delta * alpha;
        if let Some(f_trial) = evaluate(f, &trial, n, evaluations) {
            let phi_trial = 0.5 * f_trial.norm_squared();
            if phi_trial <= phi + ARMIJO * alpha * slope {
                trace!("accepted step with alpha = {alpha}");
                return Some((trial, f_trial));
            }
        }
        alpha *= 0.5;
    }
    None
}

/// Forward-difference Jacobian `J[i][j] = ∂Fᵢ/∂xⱼ`.
///
/// Each column uses a bump of `jacobian_step · max(|xⱼ|, 1)`; if the bumped
/// point cannot be evaluated the bump is applied in the other direction.
fn forward_difference_jacobian<F, E>(
    f: &mut F,
    x: &DVector<f64>,
    fx: &DVector<f64>,
    config: &SolverConfig,
    evaluations: &mut u32,
) -> Option<DMatrix<f64>>
where
    F: FnMut(&[f64]) -> Result<Vec<f64>, E>,
    E: Display,
{
    let n = x.len();
    let mut jacobian = DMatrix::zeros(n, n);

    for j in 0..n {
        let h = config.jacobian_step * x[j].abs().max(1.0);

        let mut column = None;
        for bump in [h, -h] {
            let mut bumped = x.clone();
            bumped[j] += bump;
            // Use the representable bump to keep the quotient consistent
            let actual = bumped[j] - x[j];
            if let Some(f_bumped) = evaluate(f, &bumped, n, evaluations) {
                column = Some((f_bumped - fx) / actual);
                break;
            }
        }

        jacobian.set_column(j, &column?);
    }

    Some(jacobian)
}

fn all_finite(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite())
}
