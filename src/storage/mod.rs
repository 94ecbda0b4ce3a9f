//! Persistence for the tracking data.
//!
//! [`Tracker`] is the single owner of the dataset. It stores the data in
//! SQLite (see [`crate::db`]) and, on first use, moves any data left in the
//! legacy key-value store ([`LegacyStore`]) into it.

mod engine;
mod error;
mod legacy;
mod migrate;
mod notify;
mod validate;

pub use engine::Tracker;
pub use error::{StorageError, ValidationError};
pub use legacy::{LegacyStore, LEGACY_KEY};
pub use migrate::MigrationOutcome;
pub use notify::{ChangeEvent, ChangeNotifier, Subscription};
pub use validate::validate_backup;
