//! 30/360 Bond Basis day count convention.

use rust_decimal::Decimal;

use super::DayCount;
use crate::types::Date;

/// 30/360 Bond Basis day count convention.
///
/// Used for the fixed legs of USD swaps.
///
/// # Rules
///
/// 1. D1 is capped at 30
/// 2. If D1 is then 30, D2 is capped at 30
///
/// There is no special treatment of the end of February.
///
/// # Formula
///
/// $$\text{Days} = 360 \times (Y_2 - Y_1) + 30 \times (M_2 - M_1) + (D_2 - D_1)$$
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thirty360;

impl DayCount for Thirty360 {
    fn name(&self) -> &'static str {
        "30/360"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        Decimal::from(self.day_count(start, end)) / Decimal::from(360)
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        let y1 = start.year() as i64;
        let y2 = end.year() as i64;
        let m1 = start.month() as i64;
        let m2 = end.month() as i64;
        let d1 = (start.day() as i64).min(30);
        let mut d2 = end.day() as i64;

        if d1 == 30 {
            d2 = d2.min(30);
        }

        360 * (y2 - y1) + 30 * (m2 - m1) + (d2 - d1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn ymd(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_whole_periods() {
        let dc = Thirty360;
        assert_eq!(dc.year_fraction(ymd(2018, 7, 31), ymd(2019, 1, 31)), dec!(0.5));
        assert_eq!(dc.year_fraction(ymd(2019, 1, 31), ymd(2019, 7, 31)), dec!(0.5));
        assert_eq!(dc.year_fraction(ymd(2018, 7, 13), ymd(2019, 7, 13)), Decimal::ONE);
    }

    #[test]
    fn test_day_31_rules() {
        let dc = Thirty360;
        // D1 = 31 becomes 30, so D2 = 31 becomes 30
        assert_eq!(dc.day_count(ymd(2018, 8, 31), ymd(2018, 10, 31)), 60);
        // D1 < 30 leaves D2 = 31 alone
        assert_eq!(dc.day_count(ymd(2018, 8, 29), ymd(2018, 10, 31)), 62);
        // D1 = 30 caps D2
        assert_eq!(dc.day_count(ymd(2018, 9, 30), ymd(2018, 10, 31)), 30);
    }

    #[test]
    fn test_no_february_adjustment() {
        let dc = Thirty360;
        // Feb 28 is not treated as a month end
        assert_eq!(dc.day_count(ymd(2019, 2, 28), ymd(2019, 3, 31)), 33);
        assert_eq!(dc.day_count(ymd(2018, 12, 31), ymd(2019, 2, 28)), 58);
    }

    #[test]
    fn test_swap_fixed_period() {
        let dc = Thirty360;
        // 13 Jul 2018 to 14 Jan 2019 (adjusted roll date)
        assert_eq!(dc.day_count(ymd(2018, 7, 13), ymd(2019, 1, 14)), 181);
        assert_eq!(dc.year_fraction(ymd(2018, 7, 13), ymd(2019, 1, 14)), dec!(181) / dec!(360));
    }
}
