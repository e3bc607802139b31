//! Libor deposit.

use dualcurve_core::calendars::add_months_mod_foll;
use dualcurve_core::daycounts::{Act360, DayCount};
use dualcurve_core::Date;

use super::{months, CurveInstrument, InstrumentType};
use crate::curves::DiscountCurve;
use crate::error::CurveResult;

/// A Libor deposit.
///
/// The lender pays the notional on the start date and receives it back with
/// simple ACT/360 interest on the end date. Both flows are discounted on the
/// projection curve, so a deposit pins the projection curve at its end date.
///
/// # Pricing Formula
///
/// ```text
/// PV = -N · DF(start) + N · (1 + r · τ) · DF(end)
/// ```
///
/// # Example
///
/// ```rust
/// use dualcurve_core::Date;
/// use dualcurve_curves::instruments::LiborDeposit;
///
/// let spot = Date::from_ymd(2018, 7, 18).unwrap();
/// let deposit = LiborDeposit::new(1e6, spot, 3, 0.015).unwrap();
/// assert_eq!(deposit.end_date(), Date::from_ymd(2018, 10, 18).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiborDeposit {
    start_date: Date,
    end_date: Date,
    rate: f64,
    flow_on_start: f64,
    flow_on_end: f64,
}

impl LiborDeposit {
    /// Creates a deposit starting on `start_date` and maturing `tenor_months`
    /// later (Modified Following).
    ///
    /// # Errors
    ///
    /// Returns `CurveError::Validation` for a zero tenor and
    /// `CurveError::Date` if the end date cannot be computed.
    pub fn new(notional: f64, start_date: Date, tenor_months: u32, rate: f64) -> CurveResult<Self> {
        let end_date = add_months_mod_foll(start_date, months(tenor_months, "deposit")?)?;
        let year_fraction = Act360.year_fraction_f64(start_date, end_date);

        Ok(Self {
            start_date,
            end_date,
            rate,
            flow_on_start: -notional,
            flow_on_end: notional * (1.0 + rate * year_fraction),
        })
    }

    /// Returns the start date.
    #[must_use]
    pub fn start_date(&self) -> Date {
        self.start_date
    }

    /// Returns the maturity date.
    #[must_use]
    pub fn end_date(&self) -> Date {
        self.end_date
    }

    /// Returns the deposit rate.
    #[must_use]
    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl CurveInstrument for LiborDeposit {
    fn anchor_date(&self) -> Date {
        self.end_date
    }

    fn present_value(
        &self,
        projection: &DiscountCurve,
        _discounting: &DiscountCurve,
    ) -> CurveResult<f64> {
        Ok(self.flow_on_start * projection.df(self.start_date)?
            + self.flow_on_end * projection.df(self.end_date)?)
    }

    fn instrument_type(&self) -> InstrumentType {
        InstrumentType::Deposit
    }
}
