//! Full analysis of one birth date, rendered as the ordered Arabic result rows.

use std::fs;
use std::path::Path;

use chrono::{Datelike, NaiveDate};
use log::{debug, info};
use serde::Serialize;

use crate::age::{AgeBreakdown, age_breakdown, days_until, next_birthday};
use crate::arabic::{RLM, describe_age, format_date_ar, format_number, weekday_name};
use crate::error::{AnalysisError, Error, Result};
use crate::zodiac::{ChineseSign, WesternSign, chinese_zodiac, western_zodiac};

/// Row keys with their Arabic titles, in display and export order.
pub const ROWS: [(&str, &str); 10] = [
    ("age_details", "تفاصيل العمر"),
    ("age_months", "إجمالي الأشهر"),
    ("age_days", "إجمالي الأيام"),
    ("age_weeks", "إجمالي الأسابيع"),
    ("birth_date", "تاريخ الميلاد"),
    ("birth_day_name", "يوم الميلاد"),
    ("zodiac", "البرج الغربي"),
    ("zodiac_traits", "وصف البرج"),
    ("chinese", "البرج الصيني"),
    ("next_birthday", "عيد الميلاد القادم"),
];

/// Rendered text for each row of [`ROWS`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultLines {
    pub age_details: String,
    pub age_months: String,
    pub age_days: String,
    pub age_weeks: String,
    pub birth_date: String,
    pub birth_day_name: String,
    pub zodiac: String,
    pub zodiac_traits: String,
    pub chinese: String,
    pub next_birthday: String,
}

impl ResultLines {
    fn get(&self, key: &str) -> &str {
        match key {
            "age_details" => &self.age_details,
            "age_months" => &self.age_months,
            "age_days" => &self.age_days,
            "age_weeks" => &self.age_weeks,
            "birth_date" => &self.birth_date,
            "birth_day_name" => &self.birth_day_name,
            "zodiac" => &self.zodiac,
            "zodiac_traits" => &self.zodiac_traits,
            "chinese" => &self.chinese,
            "next_birthday" => &self.next_birthday,
            _ => "",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Report {
    pub birth_date: NaiveDate,
    pub today: NaiveDate,
    pub age: AgeBreakdown,
    pub next_birthday: NaiveDate,
    pub days_until_birthday: i64,
    pub western: &'static WesternSign,
    pub chinese: &'static ChineseSign,
    pub lines: ResultLines,
}

impl Report {
    pub fn build(birth: NaiveDate, today: NaiveDate) -> std::result::Result<Self, AnalysisError> {
        let age = age_breakdown(birth, today)?;
        let next = next_birthday(birth, today).ok_or(AnalysisError::OutOfRange)?;
        let days_until_birthday = days_until(next, today);
        let western = western_zodiac(birth);
        let chinese = chinese_zodiac(birth.year());

        debug!(
            "analyzed {birth}: {age:?}, next birthday {next} in {days_until_birthday} days, {} / {}",
            western.key, chinese.key
        );

        let lines = ResultLines {
            age_details: describe_age(&age),
            age_months: format!("{}{RLM} شهر", format_number(age.total_months)),
            age_days: format!("{}{RLM} يوم منذ الولادة", format_number(age.total_days)),
            age_weeks: format!("{}{RLM} أسبوع", format_number(age.total_weeks)),
            birth_date: format_date_ar(birth),
            birth_day_name: format!("كان يوم {}", weekday_name(birth)),
            zodiac: format!(
                "{} — العنصر: {}، الكوكب الحاكم: {}",
                western.name, western.element, western.planet
            ),
            zodiac_traits: western.traits.to_string(),
            chinese: format!("برجك الصيني: {} — {}", chinese.name, chinese.traits),
            next_birthday: next_birthday_text(&age, next, days_until_birthday),
        };

        Ok(Self {
            birth_date: birth,
            today,
            age,
            next_birthday: next,
            days_until_birthday,
            western,
            chinese,
            lines,
        })
    }

    /// Non-empty rows as `(key, text)` in [`ROWS`] order.
    pub fn lines(&self) -> Vec<(&'static str, &str)> {
        ROWS.iter()
            .map(|(key, _)| (*key, self.lines.get(key)))
            .filter(|(_, text)| !text.is_empty())
            .collect()
    }

    /// Row texts joined by newlines, as written by [`Report::export`].
    pub fn to_text(&self) -> String {
        self.lines()
            .into_iter()
            .map(|(_, text)| text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Titled rows padded with dots to a common width, for terminal output.
    pub fn to_table(&self) -> String {
        let rows: Vec<(&str, &str)> = ROWS
            .iter()
            .map(|(key, title)| (*title, self.lines.get(key)))
            .filter(|(_, text)| !text.is_empty())
            .collect();

        let align_width = rows
            .iter()
            .map(|(k, v)| k.chars().count() + 2 + v.chars().count())
            .max()
            .unwrap_or(0)
            .max(MIN_TABLE_WIDTH);

        rows.iter()
            .map(|(k, v)| {
                let (key, dots, value) = build_row(k, v, align_width);
                format!("{key}{dots}{value}")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes [`Report::to_text`] to `path` as UTF-8.
    pub fn export(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_text()).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!("saved results to {}", path.display());
        Ok(())
    }
}

const MIN_TABLE_WIDTH: usize = 40;

/// Splits a row into key, dot padding and value so the values line up.
fn build_row(key: &str, value: &str, align_width: usize) -> (String, String, String) {
    let key_part = format!("{key}: ");
    let base_len = key_part.chars().count() + value.chars().count();
    let available = align_width.saturating_sub(base_len);

    let dots = match available {
        0 => "".to_string(),
        1 => " ".to_string(),
        2 => ". ".to_string(),
        n => format!("{} ", ".".repeat(n - 1)),
    };

    (key_part, dots, value.to_string())
}

fn next_birthday_text(age: &AgeBreakdown, next: NaiveDate, days_until: i64) -> String {
    if days_until == 0 {
        return format!(
            "اليوم هو عيد ميلادك! 🎉 تكمل {} سنة",
            format_number(i64::from(age.years))
        );
    }
    let upcoming_age = i64::from(age.years) + 1;
    let approx_weeks = (days_until / 7).max(1);
    format!(
        "عيدك القادم: {} — متبقٍ {} يوم (حوالي {} أسبوع). ستبلغ {} سنة.",
        format_date_ar(next),
        format_number(days_until),
        format_number(approx_weeks),
        format_number(upcoming_age)
    )
}
