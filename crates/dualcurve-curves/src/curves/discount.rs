//! Discount factor curve.

use serde::{Deserialize, Serialize};

use dualcurve_core::daycounts::{Act365Fixed, DayCount};
use dualcurve_core::Date;
use dualcurve_math::interpolation::{Interpolator, LogLinearInterpolator};

use crate::error::{CurveError, CurveResult};

/// A zero-coupon discount curve defined by discount factors at node dates.
///
/// The discount factor is exactly 1 on the base date. Between the base date
/// and the nodes the curve is linear in `ln DF` against ACT/365F year
/// fractions from the base date, so continuously compounded forward rates
/// are piecewise constant. Past the last node the final segment is extended.
///
/// Curves are immutable; stripping again produces a new curve.
///
/// # Example
///
/// ```rust
/// use dualcurve_core::daycounts::Act360;
/// use dualcurve_core::Date;
/// use dualcurve_curves::DiscountCurve;
///
/// let base = Date::from_ymd(2018, 7, 9).unwrap();
/// let three_months = Date::from_ymd(2018, 10, 9).unwrap();
/// let one_year = Date::from_ymd(2019, 7, 9).unwrap();
///
/// let curve = DiscountCurve::new(base, vec![three_months, one_year], vec![0.98, 0.90]).unwrap();
///
/// assert_eq!(curve.df(base).unwrap(), 1.0);
/// assert_eq!(curve.df(one_year).unwrap(), 0.90);
///
/// let forward = curve.forward(three_months, one_year, &Act360).unwrap();
/// assert!(forward > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct DiscountCurve {
    base_date: Date,
    dates: Vec<Date>,
    dfs: Vec<f64>,
    /// Knots `(0, 1)` followed by `(t_i, df_i)`.
    interpolator: LogLinearInterpolator,
}

impl DiscountCurve {
    /// Creates a curve from node dates and their discount factors.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::Validation` if the lengths differ, there are no
    /// nodes after `base_date`, the dates are not strictly increasing, a node
    /// is before `base_date`, or a discount factor is not finite and positive.
    ///
    /// A node on `base_date` itself must carry a discount factor of exactly
    /// 1.0; it then takes the place of the implicit `(base_date, 1.0)` knot.
    pub fn new(base_date: Date, dates: Vec<Date>, dfs: Vec<f64>) -> CurveResult<Self> {
        if dates.len() != dfs.len() {
            return Err(CurveError::validation(format!(
                "curve cannot be created: {} dates but {} discount factors",
                dates.len(),
                dfs.len()
            )));
        }
        if dates.is_empty() {
            return Err(CurveError::validation("curve needs at least one node"));
        }
        if dates[0] < base_date {
            return Err(CurveError::validation(format!(
                "curve node {} is before the base date {base_date}",
                dates[0]
            )));
        }
        let has_base_node = dates[0] == base_date;
        if has_base_node && dfs[0] != 1.0 {
            return Err(CurveError::validation(format!(
                "discount factor {} on the base date {base_date} must be 1",
                dfs[0]
            )));
        }
        if has_base_node && dates.len() == 1 {
            return Err(CurveError::validation(
                "curve needs at least one node after the base date",
            ));
        }
        if let Some(pair) = dates.windows(2).find(|w| w[1] <= w[0]) {
            return Err(CurveError::validation(format!(
                "curve dates are not in order: {} then {}",
                pair[0], pair[1]
            )));
        }
        if let Some((date, df)) = dates
            .iter()
            .zip(&dfs)
            .find(|(_, df)| !(df.is_finite() && **df > 0.0))
        {
            return Err(CurveError::validation(format!(
                "discount factor {df} at {date} is not a positive number"
            )));
        }

        let mut times = Vec::with_capacity(dates.len() + 1);
        let mut values = Vec::with_capacity(dfs.len() + 1);
        if !has_base_node {
            times.push(0.0);
            values.push(1.0);
        }
        times.extend(dates.iter().map(|d| year_fraction(base_date, *d)));
        values.extend_from_slice(&dfs);

        let interpolator = LogLinearInterpolator::new(times, values)
            .map_err(|e| CurveError::validation(e.to_string()))?
            .with_extrapolation();

        Ok(Self {
            base_date,
            dates,
            dfs,
            interpolator,
        })
    }

    /// Returns the date on which the discount factor is 1.
    #[must_use]
    pub fn base_date(&self) -> Date {
        self.base_date
    }

    /// Returns the node dates in increasing order.
    #[must_use]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Returns the node discount factors, aligned with [`dates`](Self::dates).
    #[must_use]
    pub fn discount_factors(&self) -> &[f64] {
        &self.dfs
    }

    /// Returns `(date, df)` pairs.
    pub fn nodes(&self) -> impl Iterator<Item = (Date, f64)> + '_ {
        self.dates.iter().copied().zip(self.dfs.iter().copied())
    }

    /// Returns the last node date.
    #[must_use]
    pub fn last_date(&self) -> Date {
        // Never empty after construction
        self.dates.last().copied().unwrap_or(self.base_date)
    }

    /// Returns the discount factor for `date`.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::Domain` if `date` is before the base date.
    pub fn df(&self, date: Date) -> CurveResult<f64> {
        if date < self.base_date {
            return Err(CurveError::domain(date, self.base_date));
        }
        if date == self.base_date {
            return Ok(1.0);
        }
        if let Ok(index) = self.dates.binary_search(&date) {
            return Ok(self.dfs[index]);
        }

        self.interpolator
            .interpolate(year_fraction(self.base_date, date))
            .map_err(|e| CurveError::validation(e.to_string()))
    }

    /// Returns the simple forward rate between two dates.
    ///
    /// ```text
    /// F = (DF(start) / DF(end) - 1) / yf(start, end)
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `CurveError::Domain` if either date is before the base date and
    /// `CurveError::Validation` if the year fraction is zero.
    pub fn forward(&self, start: Date, end: Date, day_count: &dyn DayCount) -> CurveResult<f64> {
        let yf = day_count.year_fraction_f64(start, end);
        if yf == 0.0 {
            return Err(CurveError::validation(format!(
                "zero {} year fraction between {start} and {end}",
                day_count.name()
            )));
        }
        Ok((self.df(start)? / self.df(end)? - 1.0) / yf)
    }

    /// Returns the continuously compounded zero rate to `date` (ACT/365F).
    ///
    /// On the base date this is the instantaneous forward rate there.
    pub fn zero_rate(&self, date: Date) -> CurveResult<f64> {
        if date == self.base_date {
            return self.instantaneous_forward(date);
        }
        let t = year_fraction(self.base_date, date);
        Ok(-self.df(date)?.ln() / t)
    }

    /// Returns the instantaneous forward rate at `date`.
    ///
    /// At a node this is the rate of the segment starting there.
    pub fn instantaneous_forward(&self, date: Date) -> CurveResult<f64> {
        if date < self.base_date {
            return Err(CurveError::domain(date, self.base_date));
        }
        let slope = self
            .interpolator
            .log_slope(year_fraction(self.base_date, date))
            .map_err(|e| CurveError::validation(e.to_string()))?;
        Ok(-slope)
    }

    /// Returns a serializable copy of the curve's nodes.
    #[must_use]
    pub fn snapshot(&self) -> CurveSnapshot {
        CurveSnapshot {
            base_date: self.base_date,
            nodes: self
                .nodes()
                .map(|(date, discount_factor)| CurveNode {
                    date,
                    discount_factor,
                })
                .collect(),
        }
    }
}

/// A node of a [`CurveSnapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveNode {
    /// Node date.
    pub date: Date,
    /// Discount factor at the node.
    pub discount_factor: f64,
}

/// Serializable form of a [`DiscountCurve`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveSnapshot {
    /// Base date of the curve.
    pub base_date: Date,
    /// Nodes in increasing date order.
    pub nodes: Vec<CurveNode>,
}

impl TryFrom<CurveSnapshot> for DiscountCurve {
    type Error = CurveError;

    fn try_from(snapshot: CurveSnapshot) -> CurveResult<Self> {
        let (dates, dfs) = snapshot
            .nodes
            .into_iter()
            .map(|node| (node.date, node.discount_factor))
            .unzip();
        DiscountCurve::new(snapshot.base_date, dates, dfs)
    }
}

fn year_fraction(base_date: Date, date: Date) -> f64 {
    Act365Fixed.year_fraction_f64(base_date, date)
}
