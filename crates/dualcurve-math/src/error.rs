//! Error types for mathematical operations.

use thiserror::Error;

/// A specialized Result type for mathematical operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur during mathematical operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// Iterative solver failed to converge.
    #[error("Convergence failed after {iterations} iterations (residual: {residual:.2e}): {reason}")]
    ConvergenceFailed {
        /// Number of iterations attempted.
        iterations: u32,
        /// Largest absolute residual at the last accepted point.
        residual: f64,
        /// Why the solver stopped.
        reason: String,
    },

    /// Matrix is singular (not invertible).
    #[error("Singular matrix: cannot invert")]
    SingularMatrix,

    /// The system has a different number of equations than unknowns.
    #[error("Dimension mismatch: {unknowns} unknowns but {equations} equations")]
    DimensionMismatch {
        /// Number of unknowns.
        unknowns: usize,
        /// Number of equations.
        equations: usize,
    },

    /// Insufficient data points for operation.
    #[error("Insufficient data: need at least {required}, got {actual}")]
    InsufficientData {
        /// Minimum required points.
        required: usize,
        /// Actual number of points.
        actual: usize,
    },

    /// The objective function could not be evaluated at the starting point.
    #[error("Function evaluation failed: {reason}")]
    EvaluationFailed {
        /// Message from the objective function.
        reason: String,
    },

    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl MathError {
    /// Creates a convergence failed error.
    #[must_use]
    pub fn convergence_failed(iterations: u32, residual: f64, reason: impl Into<String>) -> Self {
        Self::ConvergenceFailed {
            iterations,
            residual,
            reason: reason.into(),
        }
    }

    /// Creates an evaluation failed error.
    #[must_use]
    pub fn evaluation_failed(reason: impl Into<String>) -> Self {
        Self::EvaluationFailed {
            reason: reason.into(),
        }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates an insufficient data error.
    #[must_use]
    pub fn insufficient_data(required: usize, actual: usize) -> Self {
        Self::InsufficientData { required, actual }
    }
}
