//! Stripper configuration.

use serde::{Deserialize, Serialize};

use dualcurve_math::solvers::SolverConfig;

/// Default tolerance for the repricing report, in residual units
/// (currency for present values, price points for futures).
pub const DEFAULT_REPRICING_TOLERANCE: f64 = 1e-4;

/// Configuration shared by [`CurveStripper`](crate::bootstrap::CurveStripper)
/// and [`JointCurveStripper`](crate::bootstrap::JointCurveStripper).
///
/// # Example
///
/// ```rust
/// use dualcurve_curves::calibration::StripperConfig;
///
/// let config = StripperConfig::default()
///     .with_max_iterations(50)
///     .with_repricing_tolerance(1e-6);
/// assert_eq!(config.solver.max_iterations, 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StripperConfig {
    /// Root finder settings.
    pub solver: SolverConfig,
    /// Largest absolute residual a repriced input may show and still pass.
    pub repricing_tolerance: f64,
}

impl Default for StripperConfig {
    fn default() -> Self {
        Self {
            solver: SolverConfig::default(),
            repricing_tolerance: DEFAULT_REPRICING_TOLERANCE,
        }
    }
}

impl StripperConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root finder configuration.
    #[must_use]
    pub fn with_solver(mut self, solver: SolverConfig) -> Self {
        self.solver = solver;
        self
    }

    /// Sets the solver's maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.solver.max_iterations = max_iterations;
        self
    }

    /// Sets the solver's residual tolerance.
    #[must_use]
    pub fn with_residual_tolerance(mut self, tolerance: f64) -> Self {
        self.solver.residual_tolerance = tolerance;
        self
    }

    /// Sets the repricing report tolerance.
    #[must_use]
    pub fn with_repricing_tolerance(mut self, tolerance: f64) -> Self {
        self.repricing_tolerance = tolerance;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dualcurve_math::solvers::DEFAULT_MAX_ITERATIONS;

    #[test]
    fn test_defaults() {
        let config = StripperConfig::new();
        assert_eq!(config.solver.max_iterations, DEFAULT_MAX_ITERATIONS);
        assert_eq!(config.repricing_tolerance, DEFAULT_REPRICING_TOLERANCE);
    }

    #[test]
    fn test_partial_deserialize() {
        let config: StripperConfig =
            serde_json::from_str(r#"{"solver": {"max_iterations": 30}}"#).unwrap();
        assert_eq!(config.solver.max_iterations, 30);
        assert_eq!(config.repricing_tolerance, DEFAULT_REPRICING_TOLERANCE);

        let config: StripperConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, StripperConfig::default());
    }
}
