//! Curve instruments.
//!
//! Each instrument that has a present value implements [`CurveInstrument`],
//! valued against a projection curve (forward rates) and a discounting curve.
//! Futures are quoted by price instead and expose
//! [`EurodollarFuture::model_price`].
//!
//! # Available Instruments
//!
//! - [`LiborDeposit`]: pins the projection curve at its maturity
//! - [`EurodollarFuture`]: pins the projection curve at its IMM start date
//! - [`InterestRateSwap`]: semi-annual 30/360 fixed against quarterly Libor
//! - [`OisBasisSwap`]: quarterly Libor against OIS plus a spread; pins the
//!   discounting curve

mod basis_swap;
mod deposit;
mod flows;
mod future;
mod swap;

pub use basis_swap::OisBasisSwap;
pub use deposit::LiborDeposit;
pub use future::{futures_price_to_rate, EurodollarFuture};
pub use swap::InterestRateSwap;

pub(crate) use future::validate_price;

use dualcurve_core::Date;

use crate::curves::DiscountCurve;
use crate::error::{CurveError, CurveResult};

/// Instrument type for labels and reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum InstrumentType {
    /// Libor deposit
    Deposit,
    /// Eurodollar future
    Future,
    /// Fixed-for-floating swap
    Swap,
    /// OIS / Libor basis swap
    BasisSwap,
}

impl std::fmt::Display for InstrumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Deposit => write!(f, "Deposit"),
            Self::Future => write!(f, "Future"),
            Self::Swap => write!(f, "Swap"),
            Self::BasisSwap => write!(f, "BasisSwap"),
        }
    }
}

/// Trait for instruments valued off a projection and a discounting curve.
///
/// # Implementing
///
/// ```rust,ignore
/// impl CurveInstrument for MyInstrument {
///     fn anchor_date(&self) -> Date { self.maturity }
///     fn present_value(&self, projection: &DiscountCurve, discounting: &DiscountCurve) -> CurveResult<f64> {
///         /* ... */
///     }
///     fn instrument_type(&self) -> InstrumentType { InstrumentType::Swap }
/// }
/// ```
pub trait CurveInstrument: Send + Sync {
    /// The date of the curve node this instrument determines.
    fn anchor_date(&self) -> Date;

    /// Present value using `projection` for forward rates and `discounting`
    /// for discount factors.
    ///
    /// A single-curve setup passes the same curve twice.
    fn present_value(
        &self,
        projection: &DiscountCurve,
        discounting: &DiscountCurve,
    ) -> CurveResult<f64>;

    /// Returns the instrument type.
    fn instrument_type(&self) -> InstrumentType;

    /// Returns a short description for logs and reports.
    fn description(&self) -> String {
        format!("{} {}", self.instrument_type(), self.anchor_date())
    }
}

/// Converts a positive tenor to the signed month count used by date arithmetic.
pub(crate) fn months(tenor_months: u32, what: &str) -> CurveResult<i32> {
    if tenor_months == 0 {
        return Err(CurveError::validation(format!("{what} tenor must be positive")));
    }
    i32::try_from(tenor_months)
        .map_err(|_| CurveError::validation(format!("{what} tenor of {tenor_months} months is too long")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instrument_type_display() {
        assert_eq!(InstrumentType::Deposit.to_string(), "Deposit");
        assert_eq!(InstrumentType::BasisSwap.to_string(), "BasisSwap");
        assert!(InstrumentType::Deposit < InstrumentType::BasisSwap);
    }

    #[test]
    fn test_months() {
        assert_eq!(months(60, "swap").unwrap(), 60);
        assert!(months(0, "swap").is_err());
        assert!(months(u32::MAX, "swap").is_err());
    }
}
