//! Eurodollar futures.

use std::fmt;

use dualcurve_core::calendars::add_months_mod_foll;
use dualcurve_core::daycounts::Act360;
use dualcurve_core::Date;

use crate::curves::DiscountCurve;
use crate::error::{CurveError, CurveResult};

/// A three-month Eurodollar futures contract.
///
/// The underlying deposit starts on the third Wednesday of the contract
/// month (the IMM date) and ends three months later, Modified Following.
/// The last trading day, two business days earlier, plays no part in pricing.
///
/// Futures are quoted as `100 · (1 - F)` where `F` is the ACT/360 simple
/// forward rate over the deposit period. No convexity adjustment is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EurodollarFuture {
    year: i32,
    month: u32,
    start_date: Date,
    end_date: Date,
}

impl EurodollarFuture {
    /// Creates the contract expiring in `month` of `year`.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::Date` for an invalid year or month.
    pub fn new(year: i32, month: u32) -> CurveResult<Self> {
        let start_date = Date::third_wednesday(year, month)?;
        let end_date = add_months_mod_foll(start_date, 3)?;
        Ok(Self {
            year,
            month,
            start_date,
            end_date,
        })
    }

    /// Returns the IMM start date of the underlying deposit.
    #[must_use]
    pub fn start_date(&self) -> Date {
        self.start_date
    }

    /// Returns the end date of the underlying deposit.
    #[must_use]
    pub fn end_date(&self) -> Date {
        self.end_date
    }

    /// Returns the node date this contract pins on the projection curve.
    #[must_use]
    pub fn anchor_date(&self) -> Date {
        self.start_date
    }

    /// Returns the forward rate implied by `projection` over the deposit period.
    pub fn implied_rate(&self, projection: &DiscountCurve) -> CurveResult<f64> {
        projection.forward(self.start_date, self.end_date, &Act360)
    }

    /// Returns the fair futures price on `projection`.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::Domain` if the contract starts before the curve's
    /// base date.
    pub fn model_price(&self, projection: &DiscountCurve) -> CurveResult<f64> {
        Ok(100.0 * (1.0 - self.implied_rate(projection)?))
    }
}

impl fmt::Display for EurodollarFuture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const MONTHS: [&str; 12] = [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ];
        let name = MONTHS
            .get(self.month as usize - 1)
            .copied()
            .unwrap_or("???");
        write!(f, "ED {name}{}", self.year)
    }
}

/// Converts a futures price to its implied rate.
#[must_use]
pub fn futures_price_to_rate(price: f64) -> f64 {
    (100.0 - price) / 100.0
}

/// Checks a quoted futures price.
///
/// # Errors
///
/// Returns `CurveError::Validation` if the price is not finite.
pub(crate) fn validate_price(future: &EurodollarFuture, price: f64) -> CurveResult<()> {
    if price.is_finite() {
        Ok(())
    } else {
        Err(CurveError::validation(format!("{future} has price {price}")))
    }
}
