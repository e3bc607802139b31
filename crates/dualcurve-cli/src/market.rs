//! Market data files.
//!
//! A market data file names the base date, optional stripper overrides and
//! the calibration instruments:
//!
//! ```toml
//! base_date = "2018-07-27"
//!
//! [solver]
//! repricing_tolerance = 1e-6
//!
//! [[instruments]]
//! type = "deposit"
//! tenor_months = 3
//! rate = 0.017
//!
//! [[instruments]]
//! type = "future"
//! year = 2018
//! month = 9
//! price = 98.10
//! ```
//!
//! Instruments without a `start` date start at spot, two business days after
//! the base date. `notional` defaults to 100.

use std::path::Path;

use serde::{Deserialize, Serialize};

use dualcurve_core::calendars::add_business_days;
use dualcurve_core::Date;
use dualcurve_curves::prelude::*;

use crate::error::{CliError, CliResult};

/// Business days between the base date and spot.
pub const SPOT_LAG_DAYS: i32 = 2;

const DEFAULT_NOTIONAL: f64 = 100.0;

fn default_notional() -> f64 {
    DEFAULT_NOTIONAL
}

/// One quoted instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InstrumentQuote {
    /// Libor deposit quoted as a simple rate.
    Deposit {
        #[serde(default = "default_notional")]
        notional: f64,
        #[serde(default)]
        start: Option<Date>,
        tenor_months: u32,
        rate: f64,
    },
    /// Eurodollar future quoted as a price.
    Future { year: i32, month: u32, price: f64 },
    /// Par swap quoted as its fixed rate.
    Swap {
        #[serde(default = "default_notional")]
        notional: f64,
        #[serde(default)]
        start: Option<Date>,
        tenor_months: u32,
        rate: f64,
    },
    /// OIS basis swap quoted as the spread over OIS.
    BasisSwap {
        #[serde(default = "default_notional")]
        notional: f64,
        #[serde(default)]
        start: Option<Date>,
        tenor_months: u32,
        spread: f64,
    },
}

impl InstrumentQuote {
    /// Builds the calibration input, starting at `spot` unless the quote
    /// carries its own start date.
    pub fn to_input(&self, spot: Date) -> CurveResult<CalibrationInput> {
        let input = match *self {
            Self::Deposit {
                notional,
                start,
                tenor_months,
                rate,
            } => LiborDeposit::new(notional, start.unwrap_or(spot), tenor_months, rate)?.into(),
            Self::Future { year, month, price } => {
                CalibrationInput::future(EurodollarFuture::new(year, month)?, price)
            }
            Self::Swap {
                notional,
                start,
                tenor_months,
                rate,
            } => InterestRateSwap::new(notional, start.unwrap_or(spot), tenor_months, rate)?.into(),
            Self::BasisSwap {
                notional,
                start,
                tenor_months,
                spread,
            } => OisBasisSwap::new(notional, start.unwrap_or(spot), tenor_months, spread)?.into(),
        };
        Ok(input)
    }

    /// Whether this quote needs a separate discounting curve.
    pub fn is_basis_swap(&self) -> bool {
        matches!(self, Self::BasisSwap { .. })
    }
}

/// Contents of a market data file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketData {
    /// Valuation date of the curves.
    pub base_date: Date,

    /// Stripper overrides.
    #[serde(default)]
    pub solver: StripperConfig,

    /// Quoted instruments, in any order.
    pub instruments: Vec<InstrumentQuote>,
}

impl MarketData {
    /// Reads a `.toml` or `.json` market data file.
    pub fn load(path: &Path) -> CliResult<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        if extension != "toml" && extension != "json" {
            return Err(CliError::UnsupportedFormat(path.display().to_string()));
        }

        let text = std::fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        if extension == "toml" {
            Self::from_toml(&text)
        } else {
            Ok(serde_json::from_str(&text)?)
        }
    }

    /// Parses TOML market data.
    pub fn from_toml(text: &str) -> CliResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Spot date: two business days after the base date.
    pub fn spot_date(&self) -> CliResult<Date> {
        Ok(add_business_days(self.base_date, SPOT_LAG_DAYS)?)
    }

    /// Whether any quote needs the joint stripper.
    pub fn has_basis_swaps(&self) -> bool {
        self.instruments.iter().any(InstrumentQuote::is_basis_swap)
    }

    /// Builds calibration inputs for every quote.
    pub fn inputs(&self) -> CliResult<Vec<CalibrationInput>> {
        let spot = self.spot_date()?;
        let inputs = self
            .instruments
            .iter()
            .map(|quote| quote.to_input(spot))
            .collect::<CurveResult<Vec<_>>>()?;
        Ok(inputs)
    }
}
