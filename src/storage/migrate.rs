//! One-time move of legacy data into the SQLite store.
//!
//! The legacy key is only removed after the new store accepted the data, so a
//! failed attempt leaves everything in place for the next start.

use super::engine::Tracker;
use super::legacy::{LegacyStore, LEGACY_KEY};
use super::notify::ChangeEvent;
use super::validate::validate_backup;
use super::StorageError;
use crate::db::DocumentStore;

/// Result of a migration attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationOutcome {
    /// The legacy store holds no tracking data
    NothingToMigrate,
    /// Legacy data was copied and the legacy key removed
    Migrated { days: usize },
    /// The current store already holds exactly the legacy data, left over from
    /// an earlier run whose cleanup failed; only the legacy key was removed
    AlreadyMigrated,
    /// The current store already has other data; legacy data was left untouched
    SkippedExistingData,
}

impl Tracker {
    pub(crate) async fn migrate_legacy(
        &self,
        store: &DocumentStore,
        legacy: &LegacyStore,
    ) -> Result<MigrationOutcome, StorageError> {
        let Some(raw) = legacy.get_item(LEGACY_KEY)? else {
            return Ok(MigrationOutcome::NothingToMigrate);
        };

        let payload: serde_json::Value = serde_json::from_str(&raw)?;
        let data = validate_backup(payload)?;

        if let Some(existing) = store.load_tracking().await? {
            if existing == data {
                legacy.remove_item(LEGACY_KEY)?;
                return Ok(MigrationOutcome::AlreadyMigrated);
            }
            if !existing.is_empty() {
                return Ok(MigrationOutcome::SkippedExistingData);
            }
        }

        self.write(store, &data, ChangeEvent::Migrated).await?;
        legacy.remove_item(LEGACY_KEY)?;

        Ok(MigrationOutcome::Migrated { days: data.len() })
    }
}
