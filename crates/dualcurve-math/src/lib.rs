//! # dualcurve Math
//!
//! Numerical building blocks for the dualcurve curve stripper.
//!
//! This crate provides:
//!
//! - **Interpolation**: log-linear interpolation of discount factors
//! - **Linear Algebra**: LU and damped least-squares solves on `nalgebra` matrices
//! - **Solvers**: a derivative-free Newton method for square nonlinear systems
//!
//! ## Example
//!
//! ```rust
//! use dualcurve_math::solvers::{solve_system, SolverConfig};
//!
//! // x^2 + y^2 = 4, x = y
//! let f = |x: &[f64]| -> Result<Vec<f64>, String> {
//!     Ok(vec![x[0] * x[0] + x[1] * x[1] - 4.0, x[0] - x[1]])
//! };
//!
//! let result = solve_system(f, &[1.0, 1.0], &SolverConfig::default()).unwrap();
//! assert!((result.solution[0] - 2f64.sqrt()).abs() < 1e-10);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod interpolation;
pub mod linear_algebra;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::interpolation::{Interpolator, LogLinearInterpolator};
    pub use crate::solvers::{solve_system, SolverConfig, SystemSolverResult};
}

pub use error::{MathError, MathResult};
