//! Calibration inputs and stripper configuration.
//!
//! A [`CalibrationInput`] turns an instrument into one equation in the
//! stripper's nonlinear system: a residual that is zero when the curves
//! reprice the instrument, and the node date it determines.
//!
//! # Example
//!
//! ```rust
//! use dualcurve_core::Date;
//! use dualcurve_curves::calibration::{CalibrationInput, CurveRole};
//! use dualcurve_curves::instruments::{EurodollarFuture, LiborDeposit};
//!
//! let spot = Date::from_ymd(2018, 7, 18).unwrap();
//! let inputs = vec![
//!     CalibrationInput::from(LiborDeposit::new(1e6, spot, 3, 0.015).unwrap()),
//!     CalibrationInput::future(EurodollarFuture::new(2019, 12).unwrap(), 98.40),
//! ];
//! assert!(inputs.iter().all(|i| i.role() == CurveRole::Projection));
//! ```

mod config;
mod input;

pub use config::{StripperConfig, DEFAULT_REPRICING_TOLERANCE};
pub use input::{CalibrationInput, CurveRole};
