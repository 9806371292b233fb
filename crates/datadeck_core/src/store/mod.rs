//! Snapshot persistence adapters.
//!
//! # Responsibility
//! - Define the string-keyed snapshot store contract consumed by the
//!   service layer.
//! - Keep storage backend details (SQLite schema, migrations) inside this
//!   boundary.
//!
//! # Invariants
//! - `save` is a full overwrite of the value under one key, never a partial
//!   or incremental write.
//! - `save_if_absent` is atomic with respect to other writers of the same
//!   backend: exactly one of two racing first writes wins.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory;
pub mod migrations;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteSnapshotStore;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug)]
pub enum StoreError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "store schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// String-keyed snapshot storage.
///
/// The service layer owns key derivation and the snapshot codec; stores
/// only move opaque strings.
pub trait SnapshotStore {
    /// Returns the value stored under `key`, if any.
    fn load(&mut self, key: &str) -> StoreResult<Option<String>>;

    /// Stores `value` under `key`, overwriting any previous value.
    fn save(&mut self, key: &str, value: &str) -> StoreResult<()>;

    /// Stores `value` under `key` only when the key is absent.
    ///
    /// Returns `true` when this call created the entry, `false` when an
    /// existing value was left untouched. This is the adapter's atomic
    /// create-if-absent primitive.
    fn save_if_absent(&mut self, key: &str, value: &str) -> StoreResult<bool>;
}

impl<S: SnapshotStore + ?Sized> SnapshotStore for &mut S {
    fn load(&mut self, key: &str) -> StoreResult<Option<String>> {
        (**self).load(key)
    }

    fn save(&mut self, key: &str, value: &str) -> StoreResult<()> {
        (**self).save(key, value)
    }

    fn save_if_absent(&mut self, key: &str, value: &str) -> StoreResult<bool> {
        (**self).save_if_absent(key, value)
    }
}
