//! Error types for birth-date analysis.
//!
//! The analyzer itself has a single failure mode (a birth date after the
//! reference date). Input parsing and the binary's I/O add the rest. English
//! `Display` output goes to logs; the Arabic text shown to users comes from
//! [`InputError::message_ar`].

use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

use crate::arabic::to_arabic_digits;

/// Result type alias for agezodiac operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Raised by the analyzer when it is asked to measure a date that has not happened yet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("birth date {birth} is after the reference date {today}")]
    FutureDate { birth: NaiveDate, today: NaiveDate },

    /// Only reachable near chrono's year limits.
    #[error("date out of supported range")]
    OutOfRange,
}

/// Rejected user input, before anything reaches the analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("missing {0}")]
    Missing(Field),

    #[error("{0} is not a whole number: {1:?}")]
    NotANumber(Field, String),

    #[error("month {0} outside 1..=12")]
    MonthOutOfRange(i64),

    #[error("day {0} outside 1..=31")]
    DayOutOfRange(i64),

    #[error("year {year} outside {min}..={max}")]
    YearOutOfRange { year: i64, min: i32, max: i32 },

    #[error("not a valid calendar date")]
    InvalidDate,

    #[error("birth date {0} is in the future")]
    Future(NaiveDate),
}

/// Which entry field an [`InputError`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Year,
    Month,
    Day,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Field::Year => "year",
            Field::Month => "month",
            Field::Day => "day",
        })
    }
}

impl InputError {
    /// The message shown to the user.
    pub fn message_ar(&self) -> String {
        match self {
            InputError::Missing(_) => "الرجاء إدخال اليوم والشهر والسنة بالكامل.".into(),
            InputError::NotANumber(..) => "يجب أن تكون القيم المدخلة أرقامًا صحيحة.".into(),
            InputError::MonthOutOfRange(_) => "الشهر يجب أن يكون بين ١ و١٢.".into(),
            InputError::DayOutOfRange(_) => "اليوم خارج النطاق المسموح.".into(),
            InputError::YearOutOfRange { min, max, .. } => format!(
                "يرجى إدخال سنة من {} وحتى {}.",
                to_arabic_digits(min),
                to_arabic_digits(max)
            ),
            InputError::InvalidDate => {
                "التاريخ غير صالح. تحقق من عدد أيام الشهر الذي اخترته.".into()
            }
            InputError::Future(_) => "تاريخ الميلاد لا يمكن أن يكون في المستقبل.".into(),
        }
    }
}

/// Top-level error type for library operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error("invalid configuration in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
