//! Accrual period schedules for swap legs.

use crate::calendars::{add_months_mod_foll, Calendar, WeekendCalendar};
use crate::error::{CoreError, CoreResult};
use crate::types::Date;

/// An accrual period as `(start, end)`.
///
/// The end of each period is the start of the next one.
pub type Period = (Date, Date);

/// Period lengths accepted by [`date_schedule`]: monthly, quarterly,
/// semi-annual and annual.
pub const SUPPORTED_PERIODS: [u32; 4] = [1, 3, 6, 12];

/// Builds a schedule of consecutive accrual periods.
///
/// Every boundary is computed from `start` directly as
/// `add_months_mod_foll(start, k * period_months)`, so adjusted dates do
/// not drift from one period to the next.
///
/// # Arguments
///
/// * `start` - Start of the first period; must be a business day
/// * `period_months` - Length of each period in months (1, 3, 6 or 12)
/// * `tenor_months` - Total length in months; a multiple of `period_months`
///
/// # Errors
///
/// Returns `CoreError::NotBusinessDay` if `start` falls on a weekend and
/// `CoreError::InvalidSchedule` for an unsupported period or a tenor that is
/// not a whole number of periods.
///
/// # Example
///
/// ```rust
/// use dualcurve_core::schedule::date_schedule;
/// use dualcurve_core::types::Date;
///
/// let start = Date::from_ymd(2018, 7, 27).unwrap();
/// let periods = date_schedule(start, 3, 6).unwrap();
///
/// assert_eq!(periods.len(), 2);
/// assert_eq!(periods[0], (start, Date::from_ymd(2018, 10, 29).unwrap()));
/// assert_eq!(periods[1].0, periods[0].1);
/// ```
pub fn date_schedule(start: Date, period_months: u32, tenor_months: u32) -> CoreResult<Vec<Period>> {
    if !WeekendCalendar.is_business_day(start) {
        return Err(CoreError::not_business_day(start));
    }
    if !SUPPORTED_PERIODS.contains(&period_months) {
        return Err(CoreError::invalid_schedule(format!(
            "period of {period_months} months is not monthly, quarterly, semi-annual or annual"
        )));
    }
    if tenor_months % period_months != 0 {
        return Err(CoreError::invalid_schedule(format!(
            "tenor of {tenor_months} months is not a multiple of the {period_months} month period"
        )));
    }

    let count = tenor_months / period_months;
    let mut boundaries = Vec::with_capacity(count as usize + 1);
    for k in 0..=count {
        let months = i32::try_from(k * period_months)
            .map_err(|_| CoreError::invalid_schedule(format!("tenor of {tenor_months} months is too long")))?;
        boundaries.push(add_months_mod_foll(start, months)?);
    }

    Ok(boundaries.windows(2).map(|w| (w[0], w[1])).collect())
}
