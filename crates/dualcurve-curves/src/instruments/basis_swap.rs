//! OIS / Libor basis swap.

use dualcurve_core::schedule::date_schedule;
use dualcurve_core::Date;

use super::flows::{FloatingFlow, OisFlow};
use super::{months, CurveInstrument, InstrumentType};
use crate::curves::DiscountCurve;
use crate::error::{CurveError, CurveResult};

/// Both legs pay quarterly.
const PERIOD_MONTHS: u32 = 3;

/// A basis swap exchanging three-month Libor for OIS plus a spread.
///
/// The holder receives the Libor leg and pays the OIS leg plus `spread`.
/// Per quarterly ACT/360 period the net flow is
///
/// ```text
/// N · τ · (L - O - spread) · DF_ois(end)
/// ```
///
/// where `L` is the simple forward on the projection curve and `O` the
/// simple forward on the discounting (OIS) curve. Because `O` and the
/// discounting both come from the discounting curve, basis swaps are the
/// instruments that pin it.
#[derive(Debug, Clone)]
pub struct OisBasisSwap {
    start_date: Date,
    spread: f64,
    libor_flows: Vec<FloatingFlow>,
    ois_flows: Vec<OisFlow>,
    end_date: Date,
}

impl OisBasisSwap {
    /// Creates a basis swap starting on `start_date` with a tenor of
    /// `tenor_months` (a whole number of quarters).
    ///
    /// # Errors
    ///
    /// Returns `CurveError::Validation` for a zero tenor and
    /// `CurveError::Date` when the schedule cannot be built.
    pub fn new(notional: f64, start_date: Date, tenor_months: u32, spread: f64) -> CurveResult<Self> {
        months(tenor_months, "basis swap")?;
        let periods = date_schedule(start_date, PERIOD_MONTHS, tenor_months)?;

        let end_date = periods
            .last()
            .map(|(_, end)| *end)
            .ok_or_else(|| CurveError::validation("basis swap has no periods"))?;

        Ok(Self {
            start_date,
            spread,
            libor_flows: periods
                .iter()
                .map(|&period| FloatingFlow::new(notional, period))
                .collect(),
            ois_flows: periods
                .iter()
                .map(|&period| OisFlow::new(notional, spread, period))
                .collect(),
            end_date,
        })
    }

    /// Returns the effective date.
    #[must_use]
    pub fn start_date(&self) -> Date {
        self.start_date
    }

    /// Returns the end date of the last period.
    #[must_use]
    pub fn end_date(&self) -> Date {
        self.end_date
    }

    /// Returns the spread paid over OIS.
    #[must_use]
    pub fn spread(&self) -> f64 {
        self.spread
    }
}

impl CurveInstrument for OisBasisSwap {
    fn anchor_date(&self) -> Date {
        self.end_date
    }

    fn present_value(
        &self,
        projection: &DiscountCurve,
        discounting: &DiscountCurve,
    ) -> CurveResult<f64> {
        let mut value = 0.0;
        for (libor, ois) in self.libor_flows.iter().zip(&self.ois_flows) {
            value += libor.value(projection, discounting)? - ois.value(discounting)?;
        }
        Ok(value)
    }

    fn instrument_type(&self) -> InstrumentType {
        InstrumentType::BasisSwap
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use dualcurve_core::daycounts::{Act360, DayCount};

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
    fn test_zero_value_for_same_curve() {
        let swap = OisBasisSwap::new(1e7, ymd(2018, 7, 31), 36, 0.0).unwrap();
        let (libor, ois) = test_curves();

        assert_abs_diff_eq!(swap.present_value(&libor, &libor).unwrap(), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(swap.present_value(&ois, &ois).unwrap(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_single_period() {
        let notional = 1e8;
        let start = ymd(2018, 7, 16);
        let spread = 0.0020;
        let swap = OisBasisSwap::new(notional, start, 3, spread).unwrap();
        let (libor, ois) = test_curves();

        let end = ymd(2018, 10, 16);
        assert_eq!(swap.end_date(), end);
        assert_eq!(swap.anchor_date(), end);

        let libor_forward = libor.forward(start, end, &Act360).unwrap();
        let ois_forward = ois.forward(start, end, &Act360).unwrap();
        let yf = Act360.year_fraction_f64(start, end);
        let expected = notional * (libor_forward - ois_forward - spread) * yf * ois.df(end).unwrap();

        assert_abs_diff_eq!(swap.present_value(&libor, &ois).unwrap(), expected, epsilon = 1e-7);
    }

    #[test]
    fn test_spread_lowers_value() {
        let (libor, ois) = test_curves();
        let start = ymd(2018, 7, 31);
        let flat = OisBasisSwap::new(1e6, start, 12, 0.0).unwrap();
        let wide = OisBasisSwap::new(1e6, start, 12, 0.001).unwrap();
        assert!(wide.present_value(&libor, &ois).unwrap() < flat.present_value(&libor, &ois).unwrap());
        assert_eq!(wide.spread(), 0.001);
    }

    #[test]
    fn test_invalid_tenor() {
        let start = ymd(2018, 7, 31);
        assert!(matches!(OisBasisSwap::new(1e6, start, 0, 0.0), Err(CurveError::Validation { .. })));
        assert!(matches!(OisBasisSwap::new(1e6, start, 4, 0.0), Err(CurveError::Date(_))));
    }
}
