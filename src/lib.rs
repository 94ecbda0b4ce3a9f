//! Babylog
//!
//! Local tracker for breastfeeding sessions, diaper changes and weight
//! measurements. The [`storage::Tracker`] owns the data; [`export`] turns it
//! into backup and CSV files.

pub mod config;
pub mod db;
pub mod export;
pub mod models;
pub mod storage;

pub use config::{Config, ConfigError, ConfigSource, ConfigValue};
pub use models::{
    Comment, DayData, DayKey, DiaperEvent, DiaperKind, FeedingSession, LogEntry, Side,
    TrackingData, WeightMeasurement,
};
pub use storage::{ChangeEvent, StorageError, Subscription, Tracker, ValidationError};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
