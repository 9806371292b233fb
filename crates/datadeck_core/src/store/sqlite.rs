//! SQLite-backed snapshot store.
//!
//! # Responsibility
//! - Open file or in-memory SQLite databases for snapshot storage.
//! - Bootstrap connections (timeouts, migrations) before first use.
//!
//! # Invariants
//! - Returned stores have all migrations applied.
//! - `save_if_absent` relies on the `key` primary key for atomicity.

use super::migrations::apply_migrations;
use super::{SnapshotStore, StoreResult};
use log::{error, info};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::time::{Duration, Instant};

/// Snapshot store persisted in a single SQLite `snapshots` table.
pub struct SqliteSnapshotStore {
    conn: Connection,
}

impl SqliteSnapshotStore {
    /// Opens (or creates) a store database file and applies pending
    /// migrations.
    ///
    /// # Side effects
    /// - Emits `store_open` logging events with duration and status.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let started_at = Instant::now();
        info!("event=store_open module=store status=start mode=file");

        let conn = match Connection::open(path) {
            Ok(conn) => conn,
            Err(err) => {
                error!(
                    "event=store_open module=store status=error mode=file duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(err.into());
            }
        };

        match Self::bootstrap(conn) {
            Ok(store) => {
                info!(
                    "event=store_open module=store status=ok mode=file duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                Ok(store)
            }
            Err(err) => {
                error!(
                    "event=store_open module=store status=error mode=file duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }

    /// Opens an in-memory store; contents vanish when the value is dropped.
    pub fn open_in_memory() -> StoreResult<Self> {
        info!("event=store_open module=store status=start mode=memory");
        let conn = Connection::open_in_memory()?;
        let store = Self::bootstrap(conn)?;
        info!("event=store_open module=store status=ok mode=memory");
        Ok(store)
    }

    fn bootstrap(mut conn: Connection) -> StoreResult<Self> {
        conn.busy_timeout(Duration::from_secs(5))?;
        apply_migrations(&mut conn)?;
        Ok(Self { conn })
    }
}

impl SnapshotStore for SqliteSnapshotStore {
    fn load(&mut self, key: &str) -> StoreResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM snapshots WHERE key = ?1;", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    fn save(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO snapshots (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }

    fn save_if_absent(&mut self, key: &str, value: &str) -> StoreResult<bool> {
        let changed = self.conn.execute(
            "INSERT OR IGNORE INTO snapshots (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        Ok(changed == 1)
    }
}
