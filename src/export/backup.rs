//! Backup interchange: the persisted document as pretty-printed JSON.

use crate::models::TrackingData;

/// Serializes all data for a backup file.
pub fn to_backup_json(data: &TrackingData) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(data)
}

/// Parses backup text into an untyped payload for `Tracker::restore_data`,
/// which performs the validation.
pub fn parse_backup(text: &str) -> Result<serde_json::Value, serde_json::Error> {
    serde_json::from_str(text)
}
