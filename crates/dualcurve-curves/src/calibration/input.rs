//! Calibration inputs: instruments paired with the equation they impose.

use std::fmt;

use dualcurve_core::Date;

use crate::curves::DiscountCurve;
use crate::error::CurveResult;
use crate::instruments::{
    validate_price, CurveInstrument, EurodollarFuture, InstrumentType, InterestRateSwap,
    LiborDeposit, OisBasisSwap,
};

/// The curve whose node an input determines in a joint strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveRole {
    /// The projection (Libor) curve.
    Projection,
    /// The discounting (OIS) curve.
    Discounting,
}

impl fmt::Display for CurveRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Projection => write!(f, "projection"),
            Self::Discounting => write!(f, "discounting"),
        }
    }
}

/// One calibration equation.
///
/// Each input contributes one node (its [`anchor_date`](Self::anchor_date))
/// and one scalar residual that is zero when the curves reprice it:
///
/// | Variant | Residual | Node on |
/// |---------|----------|---------|
/// | `Deposit` | present value | projection |
/// | `Future` | model price − market price | projection |
/// | `ParSwap` | present value | projection |
/// | `BasisSwap` | present value | discounting |
#[derive(Debug, Clone)]
pub enum CalibrationInput {
    /// A Libor deposit at its quoted rate.
    Deposit(LiborDeposit),
    /// A Eurodollar future and its observed price.
    Future {
        /// The contract.
        future: EurodollarFuture,
        /// Observed futures price, e.g. 98.40.
        market_price: f64,
    },
    /// A swap at its par rate.
    ParSwap(InterestRateSwap),
    /// A basis swap at its par spread.
    BasisSwap(OisBasisSwap),
}

impl CalibrationInput {
    /// Pairs a future with its market price.
    #[must_use]
    pub fn future(future: EurodollarFuture, market_price: f64) -> Self {
        Self::Future {
            future,
            market_price,
        }
    }

    /// Returns the node date this input determines.
    #[must_use]
    pub fn anchor_date(&self) -> Date {
        match self {
            Self::Deposit(deposit) => deposit.anchor_date(),
            Self::Future { future, .. } => future.anchor_date(),
            Self::ParSwap(swap) => swap.anchor_date(),
            Self::BasisSwap(swap) => swap.anchor_date(),
        }
    }

    /// Returns the curve this input pins in a joint strip.
    #[must_use]
    pub fn role(&self) -> CurveRole {
        match self {
            Self::BasisSwap(_) => CurveRole::Discounting,
            _ => CurveRole::Projection,
        }
    }

    /// Returns the instrument type.
    #[must_use]
    pub fn instrument_type(&self) -> InstrumentType {
        match self {
            Self::Deposit(_) => InstrumentType::Deposit,
            Self::Future { .. } => InstrumentType::Future,
            Self::ParSwap(_) => InstrumentType::Swap,
            Self::BasisSwap(_) => InstrumentType::BasisSwap,
        }
    }

    /// Returns a label such as `Swap 2023-07-18` or `ED Dec2019 @ 98.400`.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Future {
                future,
                market_price,
            } => format!("{future} @ {market_price:.3}"),
            _ => format!("{} {}", self.instrument_type(), self.anchor_date()),
        }
    }

    /// Returns the residual on the given curves; zero when repriced.
    ///
    /// Futures ignore `discounting`; a deposit discounts on `projection`.
    pub fn residual(
        &self,
        projection: &DiscountCurve,
        discounting: &DiscountCurve,
    ) -> CurveResult<f64> {
        match self {
            Self::Deposit(deposit) => deposit.present_value(projection, discounting),
            Self::Future {
                future,
                market_price,
            } => Ok(future.model_price(projection)? - market_price),
            Self::ParSwap(swap) => swap.present_value(projection, discounting),
            Self::BasisSwap(swap) => swap.present_value(projection, discounting),
        }
    }

    /// Checks the input before it enters a solve.
    pub(crate) fn validate(&self) -> CurveResult<()> {
        match self {
            Self::Future {
                future,
                market_price,
            } => validate_price(future, *market_price),
            _ => Ok(()),
        }
    }
}

impl From<LiborDeposit> for CalibrationInput {
    fn from(deposit: LiborDeposit) -> Self {
        Self::Deposit(deposit)
    }
}

impl From<(EurodollarFuture, f64)> for CalibrationInput {
    fn from((future, market_price): (EurodollarFuture, f64)) -> Self {
        Self::future(future, market_price)
    }
}

impl From<InterestRateSwap> for CalibrationInput {
    fn from(swap: InterestRateSwap) -> Self {
        Self::ParSwap(swap)
    }
}

impl From<OisBasisSwap> for CalibrationInput {
    fn from(swap: OisBasisSwap) -> Self {
        Self::BasisSwap(swap)
    }
}
