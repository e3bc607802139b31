//! Error types for dates, calendars and schedules.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised by the date and schedule utilities.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Error in date calculations or invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// A date that must be a business day is not.
    #[error("{date} is not a business day")]
    NotBusinessDay {
        /// The offending date, formatted as YYYY-MM-DD.
        date: String,
    },

    /// Schedule parameters are inconsistent.
    #[error("Invalid schedule: {reason}")]
    InvalidSchedule {
        /// Description of the problem.
        reason: String,
    },

    /// Invalid argument to a date utility.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl CoreError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates a not-a-business-day error.
    #[must_use]
    pub fn not_business_day(date: impl std::fmt::Display) -> Self {
        Self::NotBusinessDay {
            date: date.to_string(),
        }
    }

    /// Creates an invalid schedule error.
    #[must_use]
    pub fn invalid_schedule(reason: impl Into<String>) -> Self {
        Self::InvalidSchedule {
            reason: reason.into(),
        }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::not_business_day("2018-07-14");
        assert_eq!(err.to_string(), "2018-07-14 is not a business day");

        let err = CoreError::invalid_schedule("tenor 7 is not a multiple of 3");
        assert!(err.to_string().contains("multiple of 3"));
    }
}
