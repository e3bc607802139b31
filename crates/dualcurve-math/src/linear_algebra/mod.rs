//! Linear algebra utilities.
//!
//! Dense solves used by the Newton iteration in [`crate::solvers`].

use crate::error::{MathError, MathResult};
use nalgebra::{DMatrix, DVector};

/// Solves a square linear system `Ax = b` using LU decomposition with
/// partial pivoting.
///
/// # Errors
///
/// Returns `MathError::DimensionMismatch` if `A` is not square or does not
/// match `b`, and `MathError::SingularMatrix` if `A` cannot be inverted or
/// the solution is not finite.
pub fn solve_linear_system(a: &DMatrix<f64>, b: &DVector<f64>) -> MathResult<DVector<f64>> {
    let n = a.nrows();
    if n != a.ncols() || n != b.len() {
        return Err(MathError::DimensionMismatch {
            unknowns: a.ncols(),
            equations: b.len().max(n),
        });
    }

    let x = a.clone().lu().solve(b).ok_or(MathError::SingularMatrix)?;
    if x.iter().all(|v| v.is_finite()) {
        Ok(x)
    } else {
        Err(MathError::SingularMatrix)
    }
}

/// Solves the damped normal equations `(JᵀJ + λ·diag(JᵀJ)) δ = -JᵀF`.
///
/// This is the Levenberg-Marquardt step: for small `lambda` it approaches the
/// Gauss-Newton step, for large `lambda` a short step along the steepest
/// descent direction of `½‖F‖²`.
///
/// # Errors
///
/// Returns `MathError::SingularMatrix` if the damped system cannot be solved.
pub fn solve_damped_least_squares(
    jacobian: &DMatrix<f64>,
    residuals: &DVector<f64>,
    lambda: f64,
) -> MathResult<DVector<f64>> {
    let jt = jacobian.transpose();
    let mut normal = &jt * jacobian;
    let gradient = &jt * residuals;

    for i in 0..normal.nrows() {
        // Floor the scaling so columns with no sensitivity still get damped
        let scale = normal[(i, i)].max(f64::EPSILON);
        normal[(i, i)] += lambda * scale;
    }

    let rhs = -gradient;
    match normal.clone().cholesky() {
        Some(chol) => Ok(chol.solve(&rhs)),
        None => solve_linear_system(&normal, &rhs),
    }
}
