//! Error types for curve construction, valuation and stripping.

use dualcurve_core::{CoreError, Date};
use dualcurve_math::MathError;
use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// Malformed input, detected before any valuation or solve.
    #[error("Invalid input: {reason}")]
    Validation {
        /// Description of what is wrong with the input.
        reason: String,
    },

    /// A curve was queried before its base date.
    #[error("Cannot get a discount factor for {date}, before the base date {base_date}")]
    Domain {
        /// The requested date.
        date: Date,
        /// The curve's base date.
        base_date: Date,
    },

    /// The stripper's root finder did not converge.
    #[error(
        "Calibration failed after {iterations} iterations (residual: {residual:.2e}): {message}"
    )]
    Calibration {
        /// Number of iterations attempted.
        iterations: u32,
        /// Largest absolute residual when the solver stopped.
        residual: f64,
        /// Description of the failure.
        message: String,
    },

    /// Date or schedule construction failed.
    #[error(transparent)]
    Date(#[from] CoreError),
}

impl CurveError {
    /// Creates a validation error.
    #[must_use]
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation {
            reason: reason.into(),
        }
    }

    /// Creates a domain error for a query before the base date.
    #[must_use]
    pub fn domain(date: Date, base_date: Date) -> Self {
        Self::Domain { date, base_date }
    }

    /// Creates a calibration failure error.
    #[must_use]
    pub fn calibration(iterations: u32, residual: f64, message: impl Into<String>) -> Self {
        Self::Calibration {
            iterations,
            residual,
            message: message.into(),
        }
    }

    /// Returns true for errors raised by input validation.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

impl From<MathError> for CurveError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::ConvergenceFailed {
                iterations,
                residual,
                reason,
            } => Self::calibration(iterations, residual, reason),
            MathError::DimensionMismatch { .. } | MathError::InvalidInput { .. } => {
                Self::validation(err.to_string())
            }
            other => Self::calibration(0, f64::NAN, other.to_string()),
        }
    }
}
