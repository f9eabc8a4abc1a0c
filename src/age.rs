//! age.rs
//!
//! Calendar arithmetic for a birth date measured against a reference "today":
//!     years / months / days elapsed, totals, and the next birthday.
//!
//! Chrono does not provide a built-in year/month/day diff (unlike Python’s
//! relativedelta), so we implement the calendar-aware borrowing rules manually.
//!
//! This logic correctly handles:
//!   • month underflow (borrowing from years)
//!   • day underflow (borrowing from previous month)
//!   • leap years
//!   • varying month lengths
//!   • birthdays on days the target month does not have (Feb 29, the 31st)

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::error::AnalysisError;

/// Elapsed time between a birth date and a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgeBreakdown {
    pub years: i32,
    /// 0..=11
    pub months: i32,
    /// 0..=30
    pub days: i32,
    pub total_days: i64,
    pub total_weeks: i64,
    pub total_months: i64,
}

/// Builds a date, reducing `day` to the last day of the month when it overflows.
///
/// `month` must be in `1..=12` and `day` at least 1; callers validate that.
/// Returns `None` only when `year` is outside chrono's supported range.
pub fn clamped_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    let day = day.min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Breaks the time from `birth` to `today` into years, months and days.
pub fn age_breakdown(birth: NaiveDate, today: NaiveDate) -> Result<AgeBreakdown, AnalysisError> {
    if birth > today {
        return Err(AnalysisError::FutureDate { birth, today });
    }

    let mut years = today.year() - birth.year();
    let mut months = today.month() as i32 - birth.month() as i32;
    let mut days = today.day() as i32 - birth.day() as i32;

    // Fix day underflow. A second borrow is only needed when the month
    // before `today` is shorter than `birth.day` (e.g. Jan 31 -> Mar 1).
    let (mut borrow_year, mut borrow_month) = (today.year(), today.month());
    while days < 0 {
        months -= 1;

        // Step back to the month preceding the last one borrowed from.
        (borrow_year, borrow_month) = if borrow_month == 1 {
            (borrow_year - 1, 12)
        } else {
            (borrow_year, borrow_month - 1)
        };

        // Add days from that month (28–31 depending on month & leap year)
        days += days_in_month(borrow_year, borrow_month) as i32;
    }

    // Fix month underflow
    if months < 0 {
        years -= 1;
        months += 12;
    }

    let total_days = (today - birth).num_days();

    Ok(AgeBreakdown {
        years,
        months,
        days,
        total_days,
        total_weeks: total_days.div_euclid(7),
        total_months: i64::from(years) * 12 + i64::from(months),
    })
}

/// Next occurrence of the birth month/day on or after `today`.
///
/// A birthday falling on `today` is returned as-is rather than pushed a year out.
pub fn next_birthday(birth: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let candidate = clamped_date(today.year(), birth.month(), birth.day())?;
    if candidate < today {
        return clamped_date(today.year() + 1, birth.month(), birth.day());
    }
    Some(candidate)
}

/// Whole days from `today` until `date` (negative if `date` is in the past).
pub fn days_until(date: NaiveDate, today: NaiveDate) -> i64 {
    (date - today).num_days()
}

/// Returns number of days in a given year/month (handles leap years)
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30, // should never occur but keeps function total
    }
}

/// Leap-year rule (Gregorian):
///   - divisible by 4 → leap year
///   - except divisible by 100 → not leap year
///   - except divisible by 400 → leap year
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
        assert!(is_leap_year(-400));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2100, 2), 28);
        assert_eq!(days_in_month(2023, 4), 30);
        assert_eq!(days_in_month(2023, 12), 31);
    }

    #[test]
    fn test_clamped_date_reduces_overflowing_day() {
        assert_eq!(clamped_date(2023, 2, 31), Some(ymd(2023, 2, 28)));
        assert_eq!(clamped_date(2024, 2, 30), Some(ymd(2024, 2, 29)));
        assert_eq!(clamped_date(2023, 4, 31), Some(ymd(2023, 4, 30)));
        assert_eq!(clamped_date(2023, 7, 14), Some(ymd(2023, 7, 14)));
    }

    #[test]
    fn test_clamped_date_day_always_last_day_when_over() {
        for year in [1900, 1999, 2000, 2023, 2024] {
            for month in 1..=12 {
                let dim = days_in_month(year, month);
                let date = clamped_date(year, month, dim + 5).unwrap();
                assert_eq!(date.day(), dim);
            }
        }
    }

    #[test]
    fn test_breakdown_simple() {
        let age = age_breakdown(ymd(1990, 6, 15), ymd(2024, 6, 15)).unwrap();
        assert_eq!((age.years, age.months, age.days), (34, 0, 0));
        assert_eq!(age.total_months, 408);
    }

    #[test]
    fn test_breakdown_borrows_actual_previous_month_length() {
        // February 2023 is too short to absorb the underflow, so January is borrowed too
        let age = age_breakdown(ymd(2023, 1, 31), ymd(2023, 3, 1)).unwrap();
        assert_eq!((age.years, age.months, age.days), (0, 0, 29));
        assert_eq!(age.total_days, 29);

        // leap February still falls short by one
        let age = age_breakdown(ymd(2024, 1, 31), ymd(2024, 3, 1)).unwrap();
        assert_eq!((age.years, age.months, age.days), (0, 0, 30));
        assert_eq!(age.total_days, 30);
    }

    #[test]
    fn test_breakdown_borrows_across_year_boundary() {
        let age = age_breakdown(ymd(2000, 12, 20), ymd(2024, 1, 5)).unwrap();
        // Dec 2023 has 31 days: 5 - 20 + 31 = 16
        assert_eq!((age.years, age.months, age.days), (23, 0, 16));
    }

    #[test]
    fn test_breakdown_leap_day_birth() {
        let age = age_breakdown(ymd(2000, 2, 29), ymd(2001, 3, 1)).unwrap();
        assert_eq!((age.years, age.months, age.days), (1, 0, 0));
        // 2000-02-29 → 2001-02-28 is 365 days, plus one
        assert_eq!(age.total_days, 366);
        assert_eq!(age.total_weeks, 52);
    }

    #[test]
    fn test_breakdown_same_day() {
        let age = age_breakdown(ymd(2024, 5, 5), ymd(2024, 5, 5)).unwrap();
        assert_eq!(
            age,
            AgeBreakdown {
                years: 0,
                months: 0,
                days: 0,
                total_days: 0,
                total_weeks: 0,
                total_months: 0,
            }
        );
    }

    #[test]
    fn test_breakdown_rejects_future_birth() {
        let err = age_breakdown(ymd(2099, 1, 1), ymd(2024, 1, 1)).unwrap_err();
        assert!(matches!(err, AnalysisError::FutureDate { .. }));
    }

    #[test]
    fn test_breakdown_components_stay_in_range() {
        let today = ymd(2024, 3, 1);
        let mut birth = ymd(1995, 1, 1);
        while birth <= today {
            let age = age_breakdown(birth, today).unwrap();
            assert!(age.years >= 0);
            assert!((0..=11).contains(&age.months), "{birth}: {age:?}");
            assert!((0..=30).contains(&age.days), "{birth}: {age:?}");
            assert_eq!(i64::from(age.years) * 12 + i64::from(age.months), age.total_months);
            assert_eq!(age.total_days, (today - birth).num_days());
            assert_eq!(age.total_weeks, age.total_days / 7);
            birth = birth.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_next_birthday_today_counts() {
        assert_eq!(
            next_birthday(ymd(1990, 6, 15), ymd(2024, 6, 15)),
            Some(ymd(2024, 6, 15))
        );
    }

    #[test]
    fn test_next_birthday_rolls_to_next_year() {
        assert_eq!(
            next_birthday(ymd(1990, 6, 15), ymd(2024, 7, 1)),
            Some(ymd(2025, 6, 15))
        );
    }

    #[test]
    fn test_next_birthday_later_this_year() {
        assert_eq!(
            next_birthday(ymd(1990, 12, 1), ymd(2024, 7, 1)),
            Some(ymd(2024, 12, 1))
        );
    }

    #[test]
    fn test_next_birthday_leap_day_clamps() {
        assert_eq!(
            next_birthday(ymd(2000, 2, 29), ymd(2025, 1, 1)),
            Some(ymd(2025, 2, 28))
        );
        assert_eq!(
            next_birthday(ymd(2000, 2, 29), ymd(2027, 3, 1)),
            Some(ymd(2028, 2, 29))
        );
    }

    #[test]
    fn test_days_until() {
        assert_eq!(days_until(ymd(2025, 1, 1), ymd(2024, 12, 25)), 7);
        assert_eq!(days_until(ymd(2024, 12, 25), ymd(2024, 12, 25)), 0);
    }
}
