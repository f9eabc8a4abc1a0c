//! # agezodiac
//!
//! Birth-date analysis with Arabic output: age in years/months/days, totals,
//! next birthday, and Western and Chinese zodiac signs.
//!
//! - **age**: calendar arithmetic (clamping, age breakdown, next birthday)
//! - **zodiac**: constant sign catalogs and lookups
//! - **arabic**: digit translation and Arabic number/date rendering
//! - **input**: parsing of user-typed year/month/day fields
//! - **report**: the full set of result rows, JSON and text export
//! - **config**: optional TOML settings

pub mod age;
pub mod arabic;
pub mod config;
pub mod error;
pub mod input;
pub mod report;
pub mod zodiac;

pub use age::{AgeBreakdown, age_breakdown, clamped_date, next_birthday};
pub use error::{AnalysisError, Error, InputError, Result};
pub use report::Report;
pub use zodiac::{chinese_zodiac, western_zodiac};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
