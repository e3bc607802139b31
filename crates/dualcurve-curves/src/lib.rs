//! # dualcurve Curves
//!
//! Discount curves and the strippers that build them from market instruments.
//!
//! This crate provides:
//!
//! - **Curves**: [`DiscountCurve`], log-linear in discount factors with
//!   piecewise constant forward rates
//! - **Instruments**: Libor deposits, Eurodollar futures, interest rate swaps
//!   and OIS basis swaps
//! - **Calibration**: [`CalibrationInput`], one equation per instrument
//! - **Bootstrap**: [`CurveStripper`] for a single curve and
//!   [`JointCurveStripper`] for a projection curve and a discounting curve
//!   solved together
//! - **Repricing**: an audit report of how well the stripped curves reprice
//!   their inputs
//!
//! ## Quick Start
//!
//! ```rust
//! use dualcurve_core::Date;
//! use dualcurve_curves::prelude::*;
//!
//! let base = Date::from_ymd(2018, 7, 16).unwrap();
//! let spot = Date::from_ymd(2018, 7, 18).unwrap();
//!
//! let inputs: Vec<CalibrationInput> = vec![
//!     LiborDeposit::new(1e6, spot, 3, 0.015).unwrap().into(),
//!     InterestRateSwap::new(1e6, spot, 12, 0.025).unwrap().into(),
//!     OisBasisSwap::new(1e6, spot, 3, 0.0005).unwrap().into(),
//!     OisBasisSwap::new(1e6, spot, 12, 0.0010).unwrap().into(),
//! ];
//!
//! let curves = JointCurveStripper::default().strip_joint(base, &inputs).unwrap();
//! let df = curves.discounting.df(Date::from_ymd(2019, 1, 18).unwrap()).unwrap();
//! assert!(df < 1.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]

pub mod bootstrap;
pub mod calibration;
pub mod curves;
pub mod error;
pub mod instruments;
pub mod repricing;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bootstrap::{CurvePair, CurveStripper, JointCurveStripper};
    pub use crate::calibration::{CalibrationInput, CurveRole, StripperConfig};
    pub use crate::curves::{CurveSnapshot, DiscountCurve};
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::instruments::{
        CurveInstrument, EurodollarFuture, InstrumentType, InterestRateSwap, LiborDeposit,
        OisBasisSwap,
    };
    pub use crate::repricing::{RepricingCheck, RepricingReport, StripResult};
}

pub use bootstrap::{CurvePair, CurveStripper, JointCurveStripper};
pub use calibration::{CalibrationInput, StripperConfig};
pub use curves::DiscountCurve;
pub use error::{CurveError, CurveResult};
