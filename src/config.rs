//! Optional TOML configuration.
//!
//! ```toml
//! [input]
//! min_year = 1900
//! years_ahead = 1
//!
//! [output]
//! format = "json"
//! export_file_name = "result.txt"
//! ```
//!
//! Every key is optional; a missing file means all defaults.

use std::path::Path;

use chrono::NaiveDate;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::input::InputLimits;

/// Environment variable the binary reads the config path from.
pub const CONFIG_ENV: &str = "AGEZODIAC_CONFIG";

pub const DEFAULT_EXPORT_FILE_NAME: &str = "نتيجة_العمر_والبرج.txt";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub input: InputSection,
    #[serde(default)]
    pub output: OutputSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct InputSection {
    pub min_year: i32,
    pub years_ahead: i32,
}

impl Default for InputSection {
    fn default() -> Self {
        let limits = InputLimits::default();
        Self {
            min_year: limits.min_year,
            years_ahead: limits.years_ahead,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct OutputSection {
    pub format: OutputFormat,
    pub export_file_name: String,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            export_file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Config {
    pub fn limits(&self) -> InputLimits {
        InputLimits {
            min_year: self.input.min_year,
            years_ahead: self.input.years_ahead,
        }
    }

    /// Rejects a year window that can never accept anything.
    pub fn validate(&self, path: &Path, today: NaiveDate) -> Result<()> {
        let max = self.limits().max_year(today);
        if self.input.min_year > max {
            return Err(Error::Config {
                path: path.to_path_buf(),
                message: format!(
                    "min_year {} is after the latest accepted year {max}",
                    self.input.min_year
                ),
            });
        }
        if self.output.export_file_name.trim().is_empty() {
            return Err(Error::Config {
                path: path.to_path_buf(),
                message: "export_file_name must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

pub fn read_config(path: &Path) -> Result<Config> {
    let contents = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&contents).map_err(|e| Error::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Loads and validates the config at `path`, or returns defaults when there is
/// no path or the file does not exist.
pub fn load_config(path: Option<&Path>, today: NaiveDate) -> Result<Config> {
    let Some(path) = path else {
        debug!("no config file given, using defaults");
        return Ok(Config::default());
    };
    if !path.exists() {
        info!("config {} not found, using defaults", path.display());
        return Ok(Config::default());
    }
    let config = read_config(path)?;
    config.validate(path, today)?;
    debug!("loaded config from {}: {config:?}", path.display());
    Ok(config)
}
