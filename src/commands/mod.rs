mod backup_cmd;
mod config_cmd;
mod diaper;
mod feed;
mod history;
mod weight;

pub use backup_cmd::BackupCommand;
pub use config_cmd::ConfigCommand;
pub use diaper::DiaperCommand;
pub use feed::FeedCommand;
pub use history::HistoryCommand;
pub use weight::WeightCommand;

use chrono::{Local, NaiveDate, NaiveTime};
use clap::ValueEnum;

use babylog::DayKey;

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Parses a `--date` argument (D.M.YYYY or YYYY-MM-DD), defaulting to today.
pub fn parse_day(date: &Option<String>) -> Result<DayKey, String> {
    match date {
        None => Ok(DayKey::today()),
        Some(s) => s
            .parse::<DayKey>()
            .or_else(|_| NaiveDate::parse_from_str(s, "%Y-%m-%d").map(DayKey::new))
            .map_err(|_| format!("Invalid date format '{}'. Use D.M.YYYY or YYYY-MM-DD.", s)),
    }
}

/// Parses a time of day and normalizes it to `HH:MM`.
pub fn parse_time(time: &str) -> Result<String, String> {
    NaiveTime::parse_from_str(time.trim(), "%H:%M")
        .map(|t| t.format("%H:%M").to_string())
        .map_err(|_| format!("Invalid time '{}'. Use HH:MM.", time))
}

/// Current local time as `HH:MM`.
pub fn now_time() -> String {
    Local::now().format("%H:%M").to_string()
}
