use serde::{Deserialize, Serialize};

use super::log_entry::LogEntry;
use super::weight::WeightMeasurement;

/// Everything recorded on one calendar day. Both logs are append-only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayData {
    /// Feeding sessions and diaper changes, in the order they were entered
    #[serde(rename = "dojenje")]
    pub feeding_log: Vec<LogEntry>,
    #[serde(rename = "vaga")]
    pub weight_log: Vec<WeightMeasurement>,
}

impl DayData {
    pub fn feeding_count(&self) -> usize {
        self.feeding_log
            .iter()
            .filter(|entry| matches!(entry, LogEntry::Feeding(_)))
            .count()
    }

    pub fn diaper_count(&self) -> usize {
        self.feeding_log.iter().filter(|entry| entry.is_diaper()).count()
    }

    pub fn event_count(&self) -> usize {
        self.feeding_log.len() + self.weight_log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.event_count() == 0
    }
}
