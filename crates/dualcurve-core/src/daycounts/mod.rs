//! Day count conventions.
//!
//! Day count conventions determine how the year fraction between two dates
//! is computed. Conventions are stateless unit structs: construct them where
//! needed and pass them explicitly.
//!
//! # Supported Conventions
//!
//! - [`Act360`]: Actual/360, money market deposits, futures and floating legs
//! - [`Act365Fixed`]: Actual/365 Fixed, the curve's internal time axis
//! - [`Thirty360`]: 30/360 Bond Basis, fixed swap legs
//!
//! # Usage
//!
//! ```rust
//! use dualcurve_core::daycounts::{DayCount, Thirty360};
//! use dualcurve_core::types::Date;
//!
//! let dc = Thirty360;
//! let start = Date::from_ymd(2018, 7, 31).unwrap();
//! let end = Date::from_ymd(2019, 1, 31).unwrap();
//!
//! assert_eq!(dc.day_count(start, end), 180);
//! assert_eq!(dc.year_fraction_f64(start, end), 0.5);
//! ```

mod act360;
mod act365;
mod thirty360;

pub use act360::Act360;
pub use act365::Act365Fixed;
pub use thirty360::Thirty360;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::Date;

/// Trait for day count conventions.
///
/// Implementations must be thread-safe (`Send + Sync`) so curves and
/// instruments holding them can be shared across threads.
pub trait DayCount: Send + Sync {
    /// Returns the name of the day count convention (e.g. "ACT/360").
    fn name(&self) -> &'static str;

    /// Calculates the year fraction between two dates.
    ///
    /// Negative if `end` is before `start`.
    fn year_fraction(&self, start: Date, end: Date) -> Decimal;

    /// Calculates the day count between two dates according to the convention.
    fn day_count(&self, start: Date, end: Date) -> i64;

    /// Year fraction as `f64`, for use in floating point pricing code.
    fn year_fraction_f64(&self, start: Date, end: Date) -> f64 {
        self.year_fraction(start, end).to_f64().unwrap_or(0.0)
    }
}

/// Runtime selection of a day count convention.
///
/// # Example
///
/// ```rust
/// use dualcurve_core::daycounts::{DayCount, DayCountConvention};
/// use dualcurve_core::types::Date;
///
/// let convention: DayCountConvention = "ACT/360".parse().unwrap();
/// let dc = convention.to_day_count();
///
/// let start = Date::from_ymd(2019, 6, 19).unwrap();
/// let end = Date::from_ymd(2019, 9, 19).unwrap();
/// assert_eq!(dc.day_count(start, end), 92);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayCountConvention {
    /// Actual/360.
    Act360,

    /// Actual/365 Fixed.
    Act365Fixed,

    /// 30/360 Bond Basis.
    Thirty360,
}

impl DayCountConvention {
    /// Creates a boxed day count implementation.
    #[must_use]
    pub fn to_day_count(&self) -> Box<dyn DayCount> {
        match self {
            DayCountConvention::Act360 => Box::new(Act360),
            DayCountConvention::Act365Fixed => Box::new(Act365Fixed),
            DayCountConvention::Thirty360 => Box::new(Thirty360),
        }
    }

    /// Returns the market name of the convention.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            DayCountConvention::Act360 => "ACT/360",
            DayCountConvention::Act365Fixed => "ACT/365F",
            DayCountConvention::Thirty360 => "30/360",
        }
    }

    /// Returns all available day count conventions.
    #[must_use]
    pub fn all() -> &'static [DayCountConvention] {
        &[
            DayCountConvention::Act360,
            DayCountConvention::Act365Fixed,
            DayCountConvention::Thirty360,
        ]
    }
}

impl std::fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for DayCountConvention {
    type Err = DayCountParseError;

    /// Parses a day count convention from a string.
    ///
    /// Accepts market names ("ACT/360", "30/360"), enum-style names
    /// ("Act360", "Thirty360") and common aliases ("BOND", "ACTUAL/365").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_uppercase();
        let normalized = normalized.trim();

        match normalized {
            "ACT/360" | "ACTUAL/360" | "ACT360" => Ok(DayCountConvention::Act360),

            "ACT/365" | "ACT/365F" | "ACT/365 FIXED" | "ACTUAL/365" | "ACTUAL/365 FIXED"
            | "ACT365FIXED" | "ACT365" => Ok(DayCountConvention::Act365Fixed),

            "30/360" | "30/360 BOND" | "BOND" | "BOND BASIS" | "THIRTY360" | "30360" => {
                Ok(DayCountConvention::Thirty360)
            }

            _ => Err(DayCountParseError(s.to_string())),
        }
    }
}

/// Error type for parsing day count conventions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCountParseError(pub String);

impl std::fmt::Display for DayCountParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown day count convention: '{}'", self.0)
    }
}

impl std::error::Error for DayCountParseError {}
