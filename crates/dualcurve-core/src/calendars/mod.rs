//! Business day calendars and conventions.
//!
//! This module provides:
//! - The [`Calendar`] trait and a weekend-only calendar
//! - Business day adjustment conventions
//! - Business-day and month arithmetic used by instrument schedules

mod conventions;

pub use conventions::BusinessDayConvention;

use crate::error::{CoreError, CoreResult};
use crate::types::Date;

/// Trait for business day calendars.
///
/// Calendars determine which days are business days vs holidays
/// for a specific market or jurisdiction.
pub trait Calendar: Send + Sync {
    /// Returns the name of the calendar.
    fn name(&self) -> &'static str;

    /// Returns true if the date is a business day.
    fn is_business_day(&self, date: Date) -> bool;

    /// Adjusts a date according to the given business day convention.
    fn adjust(&self, date: Date, convention: BusinessDayConvention) -> Date {
        conventions::adjust(date, convention, self)
    }

    /// Advances a business day by a non-negative number of business days.
    ///
    /// # Errors
    ///
    /// Fails if `date` is not a business day or `days` is negative.
    fn add_business_days(&self, date: Date, days: i32) -> CoreResult<Date> {
        if !self.is_business_day(date) {
            return Err(CoreError::not_business_day(date));
        }
        if days < 0 {
            return Err(CoreError::invalid_input(format!(
                "cannot add a negative number of business days ({days})"
            )));
        }

        let mut result = date;
        let mut remaining = days;
        while remaining > 0 {
            result = result.add_days(1);
            if self.is_business_day(result) {
                remaining -= 1;
            }
        }

        Ok(result)
    }

    /// Adds calendar months, then adjusts the result with `convention`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the result is out of range.
    fn add_months(
        &self,
        date: Date,
        months: i32,
        convention: BusinessDayConvention,
    ) -> CoreResult<Date> {
        Ok(self.adjust(date.add_months(months)?, convention))
    }
}

/// A weekend-only calendar (no public holidays).
///
/// Saturdays and Sundays are the only non-business days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeekendCalendar;

impl Calendar for WeekendCalendar {
    fn name(&self) -> &'static str {
        "Weekend Only"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !date.is_weekend()
    }
}

/// Adds business days on the weekend-only calendar.
///
/// # Errors
///
/// Fails if `start` falls on a weekend or `days` is negative.
pub fn add_business_days(start: Date, days: i32) -> CoreResult<Date> {
    WeekendCalendar.add_business_days(start, days)
}

/// Adds calendar months and adjusts the result with Modified Following
/// on the weekend-only calendar.
///
/// # Errors
///
/// Returns `CoreError::InvalidDate` if the result is out of range.
pub fn add_months_mod_foll(start: Date, months: i32) -> CoreResult<Date> {
    WeekendCalendar.add_months(start, months, BusinessDayConvention::ModifiedFollowing)
}
