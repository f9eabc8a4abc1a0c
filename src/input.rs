//! Turns the three text fields a user typed into a birth date.
//!
//! Fields may use Western, Arabic-Indic or extended Arabic-Indic digits. The
//! day is only checked against 1..=31 and then clamped to the month's length,
//! so "31 February" quietly becomes the last day of February.

use chrono::{Datelike, NaiveDate};
use log::debug;

use crate::age::clamped_date;
use crate::arabic::to_western_digits;
use crate::error::{Field, InputError};

/// Accepted birth-year window, relative to the reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputLimits {
    pub min_year: i32,
    /// Latest accepted year is `today.year() + years_ahead`.
    pub years_ahead: i32,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            min_year: 1900,
            years_ahead: 1,
        }
    }
}

impl InputLimits {
    pub fn max_year(&self, today: NaiveDate) -> i32 {
        today.year().saturating_add(self.years_ahead)
    }
}

/// Parses one field after digit normalization.
pub fn parse_field(text: &str, field: Field) -> Result<i64, InputError> {
    let normalized = to_western_digits(text.trim());
    if normalized.is_empty() {
        return Err(InputError::Missing(field));
    }
    normalized
        .parse::<i64>()
        .map_err(|_| InputError::NotANumber(field, text.trim().to_string()))
}

/// Validates the user's year, month and day text and builds the birth date.
///
/// Checks run in a fixed order: all fields present, all numeric, then
/// month, day and year ranges, and finally that the date is not after `today`.
pub fn parse_birth_input(
    year: &str,
    month: &str,
    day: &str,
    today: NaiveDate,
    limits: &InputLimits,
) -> Result<NaiveDate, InputError> {
    for (text, field) in [(day, Field::Day), (month, Field::Month), (year, Field::Year)] {
        if to_western_digits(text.trim()).is_empty() {
            return Err(InputError::Missing(field));
        }
    }

    let day = parse_field(day, Field::Day)?;
    let month = parse_field(month, Field::Month)?;
    let year = parse_field(year, Field::Year)?;

    if !(1..=12).contains(&month) {
        return Err(InputError::MonthOutOfRange(month));
    }
    if !(1..=31).contains(&day) {
        return Err(InputError::DayOutOfRange(day));
    }
    let max = limits.max_year(today);
    if year < i64::from(limits.min_year) || year > i64::from(max) {
        return Err(InputError::YearOutOfRange {
            year,
            min: limits.min_year,
            max,
        });
    }

    // Ranges above make these conversions lossless.
    let birth =
        clamped_date(year as i32, month as u32, day as u32).ok_or(InputError::InvalidDate)?;
    if birth.day() as i64 != day {
        debug!("clamped day {day} to {birth}");
    }

    if birth > today {
        return Err(InputError::Future(birth));
    }
    Ok(birth)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn parse(y: &str, m: &str, d: &str) -> Result<NaiveDate, InputError> {
        parse_birth_input(y, m, d, today(), &InputLimits::default())
    }

    #[test]
    fn test_accepts_western_and_arabic_digits() {
        let expected = NaiveDate::from_ymd_opt(1995, 5, 15).unwrap();
        assert_eq!(parse("1995", "5", "15"), Ok(expected));
        assert_eq!(parse(" ١٩٩٥ ", "٥", "١٥"), Ok(expected));
        assert_eq!(parse("۱۹۹۵", "۵", "۱۵"), Ok(expected));
    }

    #[test]
    fn test_missing_field() {
        assert_eq!(parse("1995", "", "15"), Err(InputError::Missing(Field::Month)));
        assert_eq!(parse("  ", "5", "15"), Err(InputError::Missing(Field::Year)));
    }

    #[test]
    fn test_not_a_number() {
        assert_eq!(
            parse("1995", "5", "1x"),
            Err(InputError::NotANumber(Field::Day, "1x".into()))
        );
    }

    #[test]
    fn test_range_checks_in_order() {
        assert_eq!(parse("1800", "13", "40"), Err(InputError::MonthOutOfRange(13)));
        assert_eq!(parse("1800", "12", "0"), Err(InputError::DayOutOfRange(0)));
        assert_eq!(
            parse("1800", "12", "1"),
            Err(InputError::YearOutOfRange {
                year: 1800,
                min: 1900,
                max: 2025
            })
        );
    }

    #[test]
    fn test_day_31_clamps_silently() {
        assert_eq!(
            parse("2023", "2", "31"),
            Ok(NaiveDate::from_ymd_opt(2023, 2, 28).unwrap())
        );
        assert_eq!(
            parse("2000", "2", "31"),
            Ok(NaiveDate::from_ymd_opt(2000, 2, 29).unwrap())
        );
    }

    #[test]
    fn test_future_rejected_even_inside_year_window() {
        assert_eq!(
            parse("2025", "1", "1"),
            Err(InputError::Future(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()))
        );
        assert!(parse("2024", "6", "15").is_ok());
    }

    #[test]
    fn test_custom_limits() {
        let limits = InputLimits {
            min_year: 1800,
            years_ahead: 0,
        };
        assert!(parse_birth_input("1850", "1", "1", today(), &limits).is_ok());
        assert_eq!(limits.max_year(today()), 2024);
    }
}
