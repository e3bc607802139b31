//! Cash flows shared by the swap instruments.

use dualcurve_core::daycounts::{Act360, DayCount, Thirty360};
use dualcurve_core::schedule::Period;
use dualcurve_core::Date;

use crate::curves::DiscountCurve;
use crate::error::CurveResult;

/// A fixed coupon paid at the end of an accrual period (30/360).
#[derive(Debug, Clone, Copy)]
pub(crate) struct FixedFlow {
    pub(crate) amount: f64,
    pub(crate) payment_date: Date,
}

impl FixedFlow {
    pub(crate) fn new(notional: f64, fixed_rate: f64, (start, end): Period) -> Self {
        Self {
            amount: notional * fixed_rate * Thirty360.year_fraction_f64(start, end),
            payment_date: end,
        }
    }

    pub(crate) fn value(&self, discounting: &DiscountCurve) -> CurveResult<f64> {
        Ok(self.amount * discounting.df(self.payment_date)?)
    }
}

/// A floating coupon fixing off the projection curve (ACT/360).
#[derive(Debug, Clone, Copy)]
pub(crate) struct FloatingFlow {
    notional: f64,
    start: Date,
    end: Date,
    year_fraction: f64,
}

impl FloatingFlow {
    pub(crate) fn new(notional: f64, (start, end): Period) -> Self {
        Self {
            notional,
            start,
            end,
            year_fraction: Act360.year_fraction_f64(start, end),
        }
    }

    pub(crate) fn end_date(&self) -> Date {
        self.end
    }

    pub(crate) fn value(
        &self,
        projection: &DiscountCurve,
        discounting: &DiscountCurve,
    ) -> CurveResult<f64> {
        let forward = projection.forward(self.start, self.end, &Act360)?;
        Ok(self.notional * forward * self.year_fraction * discounting.df(self.end)?)
    }
}

/// An overnight-indexed coupon plus spread, both projected and discounted
/// on the discounting curve (ACT/360).
#[derive(Debug, Clone, Copy)]
pub(crate) struct OisFlow {
    multiple: f64,
    spread: f64,
    start: Date,
    end: Date,
}

impl OisFlow {
    pub(crate) fn new(notional: f64, spread: f64, (start, end): Period) -> Self {
        Self {
            multiple: notional * Act360.year_fraction_f64(start, end),
            spread,
            start,
            end,
        }
    }

    pub(crate) fn value(&self, discounting: &DiscountCurve) -> CurveResult<f64> {
        let forward = discounting.forward(self.start, self.end, &Act360)?;
        Ok(self.multiple * (forward + self.spread) * discounting.df(self.end)?)
    }
}
