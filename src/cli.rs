use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

use agezodiac::VERSION;
use agezodiac::config::CONFIG_ENV;

/// Age and zodiac calculator with Arabic output
#[derive(Parser, Debug)]
#[command(name = "agezodiac")]
#[command(version = VERSION, about, long_about = None)]
pub struct Cli {
    /// Birth year (Western or Arabic-Indic digits)
    #[arg(value_name = "YEAR", required_unless_present = "today_input")]
    pub year: Option<String>,

    /// Birth month, 1-12
    #[arg(value_name = "MONTH", required_unless_present = "today_input")]
    pub month: Option<String>,

    /// Birth day, 1-31 (clamped to the month's length)
    #[arg(value_name = "DAY", required_unless_present = "today_input")]
    pub day: Option<String>,

    /// Use the reference date as the birth date
    #[arg(long, conflicts_with_all = ["year", "month", "day"])]
    pub today_input: bool,

    /// Reference date instead of the local date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub today: Option<NaiveDate>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Save the result lines to a text file (default name from config)
    #[arg(short = 'o', long, value_name = "PATH", num_args = 0..=1)]
    pub save: Option<Option<PathBuf>>,

    /// Path to the config file
    #[arg(short, long, env = CONFIG_ENV, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_positional_date() {
        let cli = Cli::try_parse_from(["agezodiac", "١٩٩٥", "5", "15", "--json"]).unwrap();
        assert_eq!(cli.year.as_deref(), Some("١٩٩٥"));
        assert!(cli.json);
        assert!(cli.save.is_none());
    }

    #[test]
    fn test_today_input_needs_no_positionals() {
        let cli = Cli::try_parse_from(["agezodiac", "--today-input", "--today", "2024-06-15"])
            .unwrap();
        assert!(cli.today_input);
        assert_eq!(cli.today, NaiveDate::from_ymd_opt(2024, 6, 15));
    }

    #[test]
    fn test_missing_positionals_rejected() {
        assert!(Cli::try_parse_from(["agezodiac", "1995"]).is_err());
    }

    #[test]
    fn test_save_with_and_without_path() {
        let cli = Cli::try_parse_from(["agezodiac", "1995", "5", "15", "-o"]).unwrap();
        assert_eq!(cli.save, Some(None));
        let cli = Cli::try_parse_from(["agezodiac", "1995", "5", "15", "-o", "out.txt"]).unwrap();
        assert_eq!(cli.save, Some(Some(PathBuf::from("out.txt"))));
    }
}
