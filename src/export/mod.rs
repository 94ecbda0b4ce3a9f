//! Export formats for the tracking data.
//!
//! - [`backup`]: full JSON document, restorable with `Tracker::restore_data`
//! - [`table`]: one CSV row per feeding-log entry

pub mod backup;
pub mod table;

use chrono::NaiveDate;

/// File name used for exports made on `date`, e.g.
/// `breastfeeding_data_2024-03-05.csv`.
pub fn export_file_name(date: NaiveDate, extension: &str) -> String {
    format!("breastfeeding_data_{}.{}", date.format("%Y-%m-%d"), extension)
}
