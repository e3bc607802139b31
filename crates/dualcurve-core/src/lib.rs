//! # dualcurve Core
//!
//! Calendar and day count building blocks for the dualcurve curve stripper.
//!
//! This crate provides:
//!
//! - **Types**: [`Date`], a `chrono::NaiveDate` newtype with month arithmetic
//! - **Calendars**: weekend-only business days and business day conventions
//! - **Schedules**: accrual period generation for swap legs
//! - **Day Count Conventions**: ACT/360, ACT/365 Fixed and 30/360
//!
//! ## Example
//!
//! ```rust
//! use dualcurve_core::prelude::*;
//!
//! let start = Date::from_ymd(2018, 7, 13).unwrap();
//! let periods = date_schedule(start, 6, 12).unwrap();
//!
//! assert_eq!(periods.len(), 2);
//! assert_eq!(periods[0].1, Date::from_ymd(2019, 1, 14).unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::similar_names)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod calendars;
pub mod daycounts;
pub mod error;
pub mod schedule;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calendars::{
        add_business_days, add_months_mod_foll, BusinessDayConvention, Calendar, WeekendCalendar,
    };
    pub use crate::daycounts::{Act360, Act365Fixed, DayCount, DayCountConvention, Thirty360};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::schedule::{date_schedule, Period};
    pub use crate::types::Date;
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::Date;
