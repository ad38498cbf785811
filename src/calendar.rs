//! Calendar arithmetic shared by the projection and installment paths
//!
//! Month stepping clamps the day-of-month to the last valid day of the
//! target month, so Jan 31 + 1 month lands on Feb 28 (or Feb 29 in a leap year).

use chrono::{Datelike, NaiveDate};

use crate::error::{EngineError, EngineResult};

/// Gregorian leap year rule
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in a given month/year
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 30,
    }
}

/// Advance a date by `months` calendar months, clamping the day to the month's max.
///
/// Fails only when the result falls outside the range chrono can represent.
pub fn advance_months(date: NaiveDate, months: u32) -> EngineResult<NaiveDate> {
    let out_of_range = || EngineError::DateOutOfRange { date, months };

    let total_months = i64::from(date.year()) * 12 + i64::from(date.month0()) + i64::from(months);
    let new_year = i32::try_from(total_months.div_euclid(12)).map_err(|_| out_of_range())?;
    let new_month = (total_months.rem_euclid(12) + 1) as u32;

    let day = date.day().min(days_in_month(new_year, new_month));
    NaiveDate::from_ymd_opt(new_year, new_month, day).ok_or_else(out_of_range)
}

/// Whole days from `start` to `end`, floored at 1.
///
/// Tax tables have no "day zero" bracket, so same-day (or earlier) dates count as day 1.
pub fn elapsed_days(start: NaiveDate, end: NaiveDate) -> u32 {
    let days = (end - start).num_days().max(1);
    u32::try_from(days).unwrap_or(u32::MAX)
}
