mod cli;

use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use log::{LevelFilter, debug, warn};

use agezodiac::Report;
use agezodiac::config::{OutputFormat, load_config};
use agezodiac::input::parse_birth_input;
use cli::Cli;

/// Exit status for rejected input, distinct from runtime failures.
const EXIT_INVALID_INPUT: u8 = 2;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(&cli);

    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
    let config = load_config(cli.config.as_deref(), today)?;

    let (year, month, day) = if cli.today_input {
        (
            today.format("%Y").to_string(),
            today.format("%m").to_string(),
            today.format("%d").to_string(),
        )
    } else {
        (
            cli.year.clone().unwrap_or_default(),
            cli.month.clone().unwrap_or_default(),
            cli.day.clone().unwrap_or_default(),
        )
    };

    let birth = match parse_birth_input(&year, &month, &day, today, &config.limits()) {
        Ok(birth) => birth,
        Err(err) => {
            warn!("rejected input {year:?}/{month:?}/{day:?}: {err}");
            eprintln!("خطأ: {}", err.message_ar());
            return Ok(ExitCode::from(EXIT_INVALID_INPUT));
        }
    };

    let report = Report::build(birth, today).context("Failed to analyze birth date")?;

    let format = if cli.json {
        OutputFormat::Json
    } else {
        config.output.format
    };
    debug!("output format {format:?}");

    if !cli.quiet {
        match format {
            OutputFormat::Json => println!("{}", report.to_json()?),
            OutputFormat::Text => {
                println!("{}", report.to_table());
                println!();
                println!("تم الحساب بنجاح. استمتع بتفاصيلك المميزة!");
            }
        }
    }

    if let Some(save) = cli.save {
        let path = save.unwrap_or_else(|| config.output.export_file_name.clone().into());
        report
            .export(&path)
            .with_context(|| format!("Failed to save results to {}", path.display()))?;
        if !cli.quiet {
            println!("تم حفظ النتائج بنجاح.");
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn init_logging(cli: &Cli) {
    let default = if cli.verbose {
        LevelFilter::Debug
    } else if cli.quiet {
        LevelFilter::Error
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(default)
        .parse_default_env()
        .init();
}
