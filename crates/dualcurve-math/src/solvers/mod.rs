//! Root-finding for square nonlinear systems.
//!
//! [`solve_system`] finds `x` with `F(x) = 0` for `F: ℝⁿ → ℝⁿ` without
//! analytic derivatives. It is the engine behind curve stripping, where `x`
//! holds trial discount factors and `F` the repricing residuals.
//!
//! # Algorithm
//!
//! 1. Forward-difference Jacobian around the current point
//! 2. Newton step from an LU solve; a Levenberg-Marquardt step when the
//!    Jacobian is singular
//! 3. Backtracking line search on `½‖F‖²`; points where `F` cannot be
//!    evaluated count as infeasible and shorten the step
//! 4. Stop when `max |Fᵢ| <= residual_tolerance` or the Newton step
//!    satisfies `‖δ‖ <= step_tolerance · (‖x‖ + step_tolerance)`

mod newton_system;

pub use newton_system::solve_system;

use serde::{Deserialize, Serialize};

/// Default maximum number of Newton iterations.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Default tolerance on the largest absolute residual.
pub const DEFAULT_RESIDUAL_TOLERANCE: f64 = 1e-10;

/// Default relative tolerance on the Newton step.
pub const DEFAULT_STEP_TOLERANCE: f64 = 1e-13;

/// Default relative bump for the finite-difference Jacobian.
pub const DEFAULT_JACOBIAN_STEP: f64 = 1e-7;

/// Configuration for the nonlinear system solver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Maximum number of Newton iterations.
    pub max_iterations: u32,
    /// Converged once every residual is within this absolute bound.
    pub residual_tolerance: f64,
    /// Converged once the step is this small relative to the solution.
    pub step_tolerance: f64,
    /// Relative bump used for the finite-difference Jacobian.
    pub jacobian_step: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            residual_tolerance: DEFAULT_RESIDUAL_TOLERANCE,
            step_tolerance: DEFAULT_STEP_TOLERANCE,
            jacobian_step: DEFAULT_JACOBIAN_STEP,
        }
    }
}

impl SolverConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the residual tolerance.
    #[must_use]
    pub fn with_residual_tolerance(mut self, tolerance: f64) -> Self {
        self.residual_tolerance = tolerance;
        self
    }

    /// Sets the step tolerance.
    #[must_use]
    pub fn with_step_tolerance(mut self, tolerance: f64) -> Self {
        self.step_tolerance = tolerance;
        self
    }

    /// Sets the finite-difference bump.
    #[must_use]
    pub fn with_jacobian_step(mut self, step: f64) -> Self {
        self.jacobian_step = step;
        self
    }
}

/// Result of a converged system solve.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemSolverResult {
    /// The root found.
    pub solution: Vec<f64>,
    /// Residual vector at the root.
    pub residuals: Vec<f64>,
    /// Number of Newton iterations used.
    pub iterations: u32,
    /// Number of calls to the objective function.
    pub evaluations: u32,
}

impl SystemSolverResult {
    /// Largest absolute residual at the root.
    #[must_use]
    pub fn max_residual(&self) -> f64 {
        max_abs(&self.residuals)
    }
}

pub(crate) fn max_abs(values: &[f64]) -> f64 {
    values.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solver_config() {
        let config = SolverConfig::default()
            .with_residual_tolerance(1e-8)
            .with_step_tolerance(1e-12)
            .with_jacobian_step(1e-6)
            .with_max_iterations(50);

        assert!((config.residual_tolerance - 1e-8).abs() < f64::EPSILON);
        assert!((config.step_tolerance - 1e-12).abs() < f64::EPSILON);
        assert!((config.jacobian_step - 1e-6).abs() < f64::EPSILON);
        assert_eq!(config.max_iterations, 50);
    }

    #[test]
    fn test_solver_config_defaults() {
        let config = SolverConfig::new();
        assert_eq!(config.max_iterations, DEFAULT_MAX_ITERATIONS);
        assert_eq!(config.residual_tolerance, DEFAULT_RESIDUAL_TOLERANCE);
        assert_eq!(config.step_tolerance, DEFAULT_STEP_TOLERANCE);
        assert_eq!(config.jacobian_step, DEFAULT_JACOBIAN_STEP);
    }

    #[test]
    fn test_solver_config_partial_deserialize() {
        let config: SolverConfig = serde_json::from_str(r#"{"max_iterations": 25}"#).unwrap();
        assert_eq!(config.max_iterations, 25);
        assert_eq!(config.residual_tolerance, DEFAULT_RESIDUAL_TOLERANCE);
    }

    #[test]
    fn test_max_residual() {
        let result = SystemSolverResult {
            solution: vec![1.0, 2.0],
            residuals: vec![1e-12, -3e-11],
            iterations: 3,
            evaluations: 10,
        };
        assert_eq!(result.max_residual(), 3e-11);
    }
}
