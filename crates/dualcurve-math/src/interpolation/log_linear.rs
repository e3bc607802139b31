//! Log-linear interpolation.
//!
//! Interpolates the logarithm of values. Applied to discount factors this
//! keeps them positive and makes the continuously compounded forward rate
//! constant between knots.

use crate::error::{MathError, MathResult};
use crate::interpolation::Interpolator;

/// Log-linear interpolation between data points.
///
/// The interpolation formula is:
/// ```text
/// y(x) = exp(linear_interpolate(x, ln(y)))
/// ```
///
/// With extrapolation enabled, points beyond either end continue the
/// straight line of the nearest segment in log space. For discount factors
/// past the last knot this holds the final forward rate constant.
///
/// # Example
///
/// ```rust
/// use dualcurve_math::interpolation::{Interpolator, LogLinearInterpolator};
///
/// let times = vec![0.0, 1.0, 2.0];
/// let discount_factors = vec![1.0, 0.97, 0.94];
///
/// let interp = LogLinearInterpolator::new(times, discount_factors)
///     .unwrap()
///     .with_extrapolation();
/// let df = interp.interpolate(3.0).unwrap();
/// assert!((df - 0.94 * 0.94 / 0.97).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct LogLinearInterpolator {
    xs: Vec<f64>,
    ys: Vec<f64>,
    /// Precomputed ln(y) values
    log_ys: Vec<f64>,
    allow_extrapolation: bool,
}

impl LogLinearInterpolator {
    /// Creates a new log-linear interpolator.
    ///
    /// # Arguments
    ///
    /// * `xs` - X coordinates (strictly increasing)
    /// * `ys` - Y coordinates (finite and positive)
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 2 points, the lengths differ,
    /// the xs are not strictly increasing or any y is not a positive number.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        if xs.len() < 2 {
            return Err(MathError::insufficient_data(2, xs.len()));
        }
        if xs.len() != ys.len() {
            return Err(MathError::invalid_input(format!(
                "xs and ys must have same length: {} vs {}",
                xs.len(),
                ys.len()
            )));
        }

        if xs.windows(2).any(|w| w[1].partial_cmp(&w[0]) != Some(std::cmp::Ordering::Greater)) {
            return Err(MathError::invalid_input(
                "x values must be strictly increasing",
            ));
        }

        let mut log_ys = Vec::with_capacity(ys.len());
        for (i, &y) in ys.iter().enumerate() {
            if !(y.is_finite() && y > 0.0) {
                return Err(MathError::invalid_input(format!(
                    "y[{i}] = {y} is not positive; log-linear requires positive values"
                )));
            }
            log_ys.push(y.ln());
        }

        Ok(Self {
            xs,
            ys,
            log_ys,
            allow_extrapolation: false,
        })
    }

    /// Enables extrapolation beyond the data range.
    #[must_use]
    pub fn with_extrapolation(mut self) -> Self {
        self.allow_extrapolation = true;
        self
    }

    /// Finds the segment index i with xs[i] <= x < xs[i+1], clamped to the
    /// first and last segments.
    fn find_segment(&self, x: f64) -> usize {
        let upper = self.xs.partition_point(|&probe| probe <= x);
        upper.saturating_sub(1).min(self.xs.len() - 2)
    }

    fn check_range(&self, x: f64) -> MathResult<()> {
        if x.is_nan() {
            return Err(MathError::invalid_input("cannot interpolate at NaN"));
        }
        if !self.allow_extrapolation && !self.in_range(x) {
            return Err(MathError::invalid_input(format!(
                "{x} is outside [{}, {}] and extrapolation is disabled",
                self.min_x(),
                self.max_x()
            )));
        }
        Ok(())
    }

    /// Returns the interpolated ln(y) at x.
    pub fn log_value(&self, x: f64) -> MathResult<f64> {
        self.check_range(x)?;
        let i = self.find_segment(x);
        let t = (x - self.xs[i]) / (self.xs[i + 1] - self.xs[i]);
        Ok(self.log_ys[i] + t * (self.log_ys[i + 1] - self.log_ys[i]))
    }

    /// Returns d ln(y) / dx at x, constant within each segment.
    ///
    /// At a knot the slope of the segment to the right is used.
    pub fn log_slope(&self, x: f64) -> MathResult<f64> {
        self.check_range(x)?;
        let i = self.find_segment(x);
        Ok((self.log_ys[i + 1] - self.log_ys[i]) / (self.xs[i + 1] - self.xs[i]))
    }

    /// Returns the knot x values.
    #[must_use]
    pub fn x_values(&self) -> &[f64] {
        &self.xs
    }

    /// Returns the original y values.
    #[must_use]
    pub fn y_values(&self) -> &[f64] {
        &self.ys
    }
}

impl Interpolator for LogLinearInterpolator {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        Ok(self.log_value(x)?.exp())
    }

    fn derivative(&self, x: f64) -> MathResult<f64> {
        // dy/dx = y(x) * d(ln y)/dx
        Ok(self.interpolate(x)? * self.log_slope(x)?)
    }

    fn allows_extrapolation(&self) -> bool {
        self.allow_extrapolation
    }

    fn min_x(&self) -> f64 {
        self.xs[0]
    }

    fn max_x(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }
}
