//! Fixed-for-floating interest rate swap.

use dualcurve_core::schedule::date_schedule;
use dualcurve_core::Date;

use super::flows::{FixedFlow, FloatingFlow};
use super::{months, CurveInstrument, InstrumentType};
use crate::curves::DiscountCurve;
use crate::error::{CurveError, CurveResult};

/// Fixed leg payment frequency in months.
const FIXED_PERIOD_MONTHS: u32 = 6;

/// Floating leg payment frequency in months.
const FLOATING_PERIOD_MONTHS: u32 = 3;

/// A standard USD interest rate swap.
///
/// The fixed leg pays semi-annually on 30/360; the floating leg pays the
/// three-month rate quarterly on ACT/360. A positive notional pays fixed,
/// a negative notional receives fixed.
///
/// Floating coupons are projected from the projection curve. Every coupon
/// is discounted on the discounting curve.
///
/// # Example
///
/// ```rust
/// use dualcurve_core::Date;
/// use dualcurve_curves::instruments::{CurveInstrument, InterestRateSwap};
///
/// let spot = Date::from_ymd(2018, 7, 18).unwrap();
/// let swap = InterestRateSwap::new(1e6, spot, 12, 0.025).unwrap();
/// assert_eq!(swap.anchor_date(), Date::from_ymd(2019, 7, 18).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct InterestRateSwap {
    start_date: Date,
    fixed_rate: f64,
    fixed_flows: Vec<FixedFlow>,
    floating_flows: Vec<FloatingFlow>,
    end_date: Date,
}

impl InterestRateSwap {
    /// Creates a swap starting on `swap_start_date` with a tenor of
    /// `tenor_months`.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::Validation` for a zero tenor and
    /// `CurveError::Date` when either leg's schedule cannot be built (a
    /// weekend start or a tenor that is not a whole number of fixed periods).
    pub fn new(
        notional: f64,
        swap_start_date: Date,
        tenor_months: u32,
        fixed_rate: f64,
    ) -> CurveResult<Self> {
        months(tenor_months, "swap")?;

        let fixed_flows = date_schedule(swap_start_date, FIXED_PERIOD_MONTHS, tenor_months)?
            .into_iter()
            .map(|period| FixedFlow::new(-notional, fixed_rate, period))
            .collect();
        let floating_flows: Vec<_> =
            date_schedule(swap_start_date, FLOATING_PERIOD_MONTHS, tenor_months)?
                .into_iter()
                .map(|period| FloatingFlow::new(notional, period))
                .collect();

        let end_date = floating_flows
            .last()
            .map(FloatingFlow::end_date)
            .ok_or_else(|| CurveError::validation("swap has no floating periods"))?;

        Ok(Self {
            start_date: swap_start_date,
            fixed_rate,
            fixed_flows,
            floating_flows,
            end_date,
        })
    }

    /// Returns the effective date.
    #[must_use]
    pub fn start_date(&self) -> Date {
        self.start_date
    }

    /// Returns the end date of the last floating period.
    #[must_use]
    pub fn end_date(&self) -> Date {
        self.end_date
    }

    /// Returns the fixed rate.
    #[must_use]
    pub fn fixed_rate(&self) -> f64 {
        self.fixed_rate
    }

    /// Returns the fixed leg payment dates.
    #[must_use]
    pub fn fixed_payment_dates(&self) -> Vec<Date> {
        self.fixed_flows.iter().map(|flow| flow.payment_date).collect()
    }

    /// Returns the value of the fixed leg, signed from the swap holder's side.
    pub fn fixed_leg_value(&self, discounting: &DiscountCurve) -> CurveResult<f64> {
        self.fixed_flows
            .iter()
            .map(|flow| flow.value(discounting))
            .sum()
    }

    /// Returns the value of the floating leg, signed from the swap holder's side.
    pub fn floating_leg_value(
        &self,
        projection: &DiscountCurve,
        discounting: &DiscountCurve,
    ) -> CurveResult<f64> {
        self.floating_flows
            .iter()
            .map(|flow| flow.value(projection, discounting))
            .sum()
    }
}

impl CurveInstrument for InterestRateSwap {
    fn anchor_date(&self) -> Date {
        self.end_date
    }

    fn present_value(
        &self,
        projection: &DiscountCurve,
        discounting: &DiscountCurve,
    ) -> CurveResult<f64> {
        Ok(self.fixed_leg_value(discounting)? + self.floating_leg_value(projection, discounting)?)
    }

    fn instrument_type(&self) -> InstrumentType {
        InstrumentType::Swap
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use dualcurve_core::daycounts::{Act360, DayCount, Thirty360};

    fn ymd(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn test_curves() -> (DiscountCurve, DiscountCurve) {
        let base = ymd(2018, 7, 13);
        let libor_dates = vec![ymd(2018, 10, 15), ymd(2019, 1, 15), ymd(2019, 7, 15)];
        let libor = DiscountCurve::new(base, libor_dates.clone(), vec![0.9950, 0.9880, 0.9750]).unwrap();
        let mut ois_dates = vec![ymd(2018, 7, 15)];
        ois_dates.extend(libor_dates);
        let ois = DiscountCurve::new(base, ois_dates, vec![0.9999, 0.9945, 0.9900, 0.9800]).unwrap();
        (libor, ois)
    }

    #[test]
    fn test_floating_leg_telescopes_on_one_curve() {
        let notional = 1e6;
        let start = ymd(2018, 10, 1);
        let swap = InterestRateSwap::new(notional, start, 60, 0.0).unwrap();
        let end = swap.end_date();
        assert_eq!(*swap.fixed_payment_dates().last().unwrap(), end);

        let (libor, ois) = test_curves();
        for curve in [&libor, &ois] {
            let expected = notional * (curve.df(start).unwrap() - curve.df(end).unwrap());
            let actual = swap.present_value(curve, curve).unwrap();
            assert_abs_diff_eq!(actual, expected, epsilon = 1e-8);
        }
    }

    #[test]
    fn test_fixed_leg_annuity() {
        let notional = 1e6;
        let fixed_rate = 0.05;
        let swap = InterestRateSwap::new(-notional, ymd(2018, 7, 31), 12, fixed_rate).unwrap();
        let (libor, ois) = test_curves();
        // Flat projection curve: every floating coupon is zero
        let zero_curve = DiscountCurve::new(ymd(2018, 7, 13), vec![ymd(2019, 7, 13)], vec![1.0]).unwrap();

        for discounting in [&libor, &ois] {
            let expected = notional
                * fixed_rate
                * 0.5
                * (discounting.df(ymd(2019, 1, 31)).unwrap() + discounting.df(ymd(2019, 7, 31)).unwrap());
            let actual = swap.present_value(&zero_curve, discounting).unwrap();
            assert_abs_diff_eq!(actual, expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_basic_value() {
        let notional = 1e6;
        let start = ymd(2018, 7, 13);
        let fixed_rate = 0.02;
        let swap = InterestRateSwap::new(notional, start, 6, fixed_rate).unwrap();
        let (libor, ois) = test_curves();

        let d1 = ymd(2018, 10, 15);
        let d2 = ymd(2019, 1, 14);
        let fixed_leg_value =
            notional * fixed_rate * Thirty360.year_fraction_f64(start, d2) * ois.df(d2).unwrap();
        let forward1 = libor.forward(start, d1, &Act360).unwrap();
        let forward2 = libor.forward(d1, d2, &Act360).unwrap();
        let floating_leg_value = notional
            * (forward1 * Act360.year_fraction_f64(start, d1) * ois.df(d1).unwrap()
                + forward2 * Act360.year_fraction_f64(d1, d2) * ois.df(d2).unwrap());
        let swap_value = floating_leg_value - fixed_leg_value;

        assert_eq!(swap.end_date(), d2);
        assert_abs_diff_eq!(swap.present_value(&libor, &ois).unwrap(), swap_value, epsilon = 1e-9);

        // Receive fixed on ten times the notional at twice the rate
        let swap2 = InterestRateSwap::new(-10.0 * notional, start, 6, 2.0 * fixed_rate).unwrap();
        let swap_value2 = -10.0 * (swap_value - fixed_leg_value);
        assert_abs_diff_eq!(swap2.present_value(&libor, &ois).unwrap(), swap_value2, epsilon = 1e-8);
    }

    #[test]
    fn test_schedule_errors() {
        let start = ymd(2018, 7, 13);
        assert!(matches!(
            InterestRateSwap::new(1e6, start, 0, 0.02),
            Err(CurveError::Validation { .. })
        ));
        assert!(matches!(
            InterestRateSwap::new(1e6, start, 9, 0.02),
            Err(CurveError::Date(_))
        ));
        assert!(matches!(
            InterestRateSwap::new(1e6, ymd(2018, 7, 14), 12, 0.02),
            Err(CurveError::Date(_))
        ));
    }
}
