//! Arabic rendering helpers.
//!
//! Digit translation is a fixed character table, not a locale lookup, so the
//! output is identical on every platform.

use std::fmt::Display;

use chrono::{Datelike, NaiveDate};

use crate::age::AgeBreakdown;

/// Right-to-left mark, placed after numbers so the unit word stays on the correct side.
pub const RLM: char = '\u{200f}';

/// Arabic comma, the thousands separator.
pub const ARABIC_COMMA: char = '،';

/// `ARABIC_INDIC_DIGITS[n]` renders the ASCII digit `n`.
const ARABIC_INDIC_DIGITS: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];

/// Extended (Persian/Urdu) forms, accepted on input only.
const EXTENDED_ARABIC_INDIC_DIGITS: [char; 10] =
    ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

/// Monday first, matching `Weekday::num_days_from_monday`.
pub const WEEKDAYS: [&str; 7] = [
    "الاثنين",
    "الثلاثاء",
    "الأربعاء",
    "الخميس",
    "الجمعة",
    "السبت",
    "الأحد",
];

pub const MONTHS: [&str; 12] = [
    "يناير",
    "فبراير",
    "مارس",
    "أبريل",
    "مايو",
    "يونيو",
    "يوليو",
    "أغسطس",
    "سبتمبر",
    "أكتوبر",
    "نوفمبر",
    "ديسمبر",
];

/// Renders `value` and swaps every ASCII digit for its Arabic-Indic form.
pub fn to_arabic_digits(value: impl Display) -> String {
    value
        .to_string()
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(d) if c.is_ascii_digit() => ARABIC_INDIC_DIGITS[d as usize],
            _ => c,
        })
        .collect()
}

/// Maps Arabic-Indic and extended Arabic-Indic digits back to ASCII. Other
/// characters pass through unchanged.
pub fn to_western_digits(text: &str) -> String {
    text.chars()
        .map(|c| {
            ARABIC_INDIC_DIGITS
                .iter()
                .position(|&d| d == c)
                .or_else(|| EXTENDED_ARABIC_INDIC_DIGITS.iter().position(|&d| d == c))
                .and_then(|n| char::from_digit(n as u32, 10))
                .unwrap_or(c)
        })
        .collect()
}

/// Groups thousands with the Arabic comma and renders Arabic-Indic digits,
/// e.g. `12345` → `١٢،٣٤٥`.
pub fn format_number(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() * 2);
    if value < 0 {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(ARABIC_COMMA);
        }
        grouped.push(c);
    }
    to_arabic_digits(grouped)
}

pub fn weekday_name(date: NaiveDate) -> &'static str {
    WEEKDAYS[date.weekday().num_days_from_monday() as usize]
}

pub fn month_name(month: u32) -> &'static str {
    MONTHS[(month as usize).saturating_sub(1) % 12]
}

/// Long Arabic date, e.g. `الجمعة، ١٥ يونيو ١٩٩٠م`.
pub fn format_date_ar(date: NaiveDate) -> String {
    format!(
        "{}، {} {} {}م",
        weekday_name(date),
        to_arabic_digits(date.day()),
        month_name(date.month()),
        to_arabic_digits(date.year())
    )
}

/// Non-zero components among years, months and days, in that order, each
/// followed by its unit. An all-zero age renders as `"0"`.
pub fn describe_age(age: &AgeBreakdown) -> String {
    let parts: Vec<String> = [
        (age.years, "سنة"),
        (age.months, "شهر"),
        (age.days, "يوم"),
    ]
    .iter()
    .filter(|(n, _)| *n != 0)
    .map(|(n, unit)| format!("{}{RLM} {unit}", format_number(i64::from(*n))))
    .collect();

    if parts.is_empty() {
        "0".to_string()
    } else {
        parts.join("، ")
    }
}
