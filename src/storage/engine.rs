//! The persistence engine.
//!
//! Holds the whole tracking dataset as one document. Every append is a
//! read-modify-write of that document, serialized through a write lock so
//! concurrent appends cannot drop each other's events.

use std::path::PathBuf;
use tokio::sync::{Mutex, OnceCell};

use super::legacy::LegacyStore;
use super::migrate::MigrationOutcome;
use super::notify::{ChangeEvent, ChangeNotifier, Subscription};
use super::validate::validate_backup;
use super::StorageError;
use crate::config::Config;
use crate::db::{init_db, DocumentStore};
use crate::models::{DayData, DayKey, LogEntry, TrackingData, WeightMeasurement};

/// Owner of all tracking data.
///
/// Construct one at startup and share it by reference. The database is opened
/// lazily on first use; concurrent first callers share one initialization.
pub struct Tracker {
    database_path: PathBuf,
    legacy: Option<LegacyStore>,
    store: OnceCell<DocumentStore>,
    notifier: ChangeNotifier,
    write_lock: Mutex<()>,
}

impl Tracker {
    pub fn new(database_path: impl Into<PathBuf>, legacy: Option<LegacyStore>) -> Self {
        Self {
            database_path: database_path.into(),
            legacy,
            store: OnceCell::new(),
            notifier: ChangeNotifier::new(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.database_path.value.clone(),
            Some(LegacyStore::new(config.legacy_dir.value.clone())),
        )
    }

    pub fn database_path(&self) -> &PathBuf {
        &self.database_path
    }

    /// Opens the store, migrating legacy data on the first call.
    ///
    /// Safe to call repeatedly. A failed attempt is not cached.
    pub async fn init(&self) -> Result<&DocumentStore, StorageError> {
        self.store.get_or_try_init(|| self.connect()).await
    }

    async fn connect(&self) -> Result<DocumentStore, StorageError> {
        let pool = init_db(&self.database_path).await?;
        let store = DocumentStore::new(pool);

        if let Some(legacy) = &self.legacy {
            match self.migrate_legacy(&store, legacy).await {
                Ok(MigrationOutcome::NothingToMigrate) => {}
                Ok(MigrationOutcome::Migrated { days }) => {
                    tracing::info!(
                        "Migrated {} day(s) of legacy data from {}",
                        days,
                        legacy.dir().display()
                    );
                }
                Ok(MigrationOutcome::AlreadyMigrated) => {
                    tracing::info!(
                        "Removed legacy data from {}: already in the database",
                        legacy.dir().display()
                    );
                }
                Ok(MigrationOutcome::SkippedExistingData) => {
                    tracing::warn!(
                        "Legacy data in {} left in place: database already has data",
                        legacy.dir().display()
                    );
                }
                Err(e) => {
                    tracing::warn!("Legacy data migration failed, will retry next start: {}", e);
                }
            }
        }

        Ok(store)
    }

    /// Registers for change notifications.
    pub fn subscribe(&self) -> Subscription {
        self.notifier.subscribe()
    }

    /// Returns all data. Never fails: read errors are logged and yield an
    /// empty dataset.
    pub async fn get_data(&self) -> TrackingData {
        match self.load().await {
            Ok(data) => data,
            Err(e) => {
                tracing::error!("Failed to read tracking data: {}", e);
                TrackingData::default()
            }
        }
    }

    /// Returns one day's data, or `None` if nothing was recorded that day.
    pub async fn get_day_data(&self, day: &DayKey) -> Option<DayData> {
        self.get_data().await.get(day).cloned()
    }

    /// Replaces the stored dataset.
    pub async fn save_data(&self, data: &TrackingData) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;
        let store = self.init().await?;
        self.write(store, data, ChangeEvent::Saved).await
    }

    /// Appends a feeding session or diaper change to a day's feeding log.
    pub async fn add_feeding_event(
        &self,
        day: DayKey,
        entry: impl Into<LogEntry>,
    ) -> Result<(), StorageError> {
        let entry = entry.into();
        tracing::debug!("Appending feeding log entry on {}", day);
        self.append(day, |data| data.feeding_log.push(entry)).await
    }

    /// Appends a weight measurement to a day's weight log.
    pub async fn add_weight_measurement(
        &self,
        day: DayKey,
        measurement: WeightMeasurement,
    ) -> Result<(), StorageError> {
        tracing::debug!("Appending weight measurement on {}", day);
        self.append(day, |data| data.weight_log.push(measurement))
            .await
    }

    /// Replaces all data with a backup payload.
    ///
    /// The payload is validated first; an invalid payload leaves stored data
    /// untouched.
    pub async fn restore_data(&self, payload: serde_json::Value) -> Result<(), StorageError> {
        let data = validate_backup(payload)?;

        let _guard = self.write_lock.lock().await;
        let store = self.init().await?;
        self.write(store, &data, ChangeEvent::Restored).await?;

        tracing::info!("Restored {} day(s) from backup", data.len());
        Ok(())
    }

    /// Closes the database if it was opened.
    pub async fn close(&self) {
        if let Some(store) = self.store.get() {
            store.close().await;
        }
    }

    async fn load(&self) -> Result<TrackingData, StorageError> {
        let store = self.init().await?;
        Ok(store.load_tracking().await?.unwrap_or_default())
    }

    async fn append<F>(&self, day: DayKey, update: F) -> Result<(), StorageError>
    where
        F: FnOnce(&mut DayData),
    {
        let _guard = self.write_lock.lock().await;
        let store = self.init().await?;

        // Read errors must propagate here: appending to an empty stand-in
        // would overwrite the stored history.
        let mut data = store.load_tracking().await?.unwrap_or_default();
        update(data.day_mut(day));

        self.write(store, &data, ChangeEvent::Saved).await
    }

    /// Single save path: persist, then notify.
    pub(super) async fn write(
        &self,
        store: &DocumentStore,
        data: &TrackingData,
        event: ChangeEvent,
    ) -> Result<(), StorageError> {
        store.save_tracking(data).await?;
        self.notifier.notify(event);
        Ok(())
    }
}
