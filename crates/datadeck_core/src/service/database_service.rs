//! Database facade: apply actions, record history, persist snapshots.
//!
//! # Responsibility
//! - Own one `Database` and its backing snapshot store for a session.
//! - Provide the get-or-create-table and apply-action entry points used by
//!   UI/transport collaborators.
//!
//! # Invariants
//! - Every dispatch appends a change record before the mutation runs, so
//!   history covers attempted actions too, in dispatch order.
//! - Every successful mutation is followed by a full-snapshot save. There
//!   is no rollback: a failed save leaves memory ahead of the store until
//!   the next successful save.
//! - Snapshot keys are derived exclusively from the database id.

use crate::engine::{apply_action, ActionError, ActionOutcome};
use crate::model::action::DatabaseAction;
use crate::model::database::{ChangeRecord, Database, DatabaseId};
use crate::model::table::{ColumnDefinition, Table};
use crate::store::{SnapshotStore, StoreError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Facade-level failure: engine, storage, codec or contract violations.
#[derive(Debug)]
pub enum ServiceError {
    Action(ActionError),
    Store(StoreError),
    Codec(serde_json::Error),
    /// An existing table was requested under this name with a different
    /// column schema.
    SchemaMismatch {
        name: String,
    },
    /// A state the facade guarantees can't happen happened anyway.
    InternalInconsistency(&'static str),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Action(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::Codec(err) => write!(f, "snapshot codec failure: {err}"),
            Self::SchemaMismatch { name } => write!(
                f,
                "table `{name}` already exists with a different column schema"
            ),
            Self::InternalInconsistency(message) => {
                write!(f, "internal inconsistency: {message}")
            }
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Action(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::Codec(err) => Some(err),
            Self::SchemaMismatch { .. } => None,
            Self::InternalInconsistency(_) => None,
        }
    }
}

impl From<ActionError> for ServiceError {
    fn from(value: ActionError) -> Self {
        Self::Action(value)
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(value: serde_json::Error) -> Self {
        Self::Codec(value)
    }
}

/// Store key under which a database's snapshot lives.
pub fn snapshot_key(database_id: DatabaseId) -> String {
    format!("db.{database_id}")
}

/// Session-scoped owner of one database and its snapshot store.
///
/// Constructed explicitly and passed down; there is no process-wide
/// instance. All mutation goes through `&mut self`, which makes a dispatch
/// atomic with respect to any other use of the same service value.
pub struct DatabaseService<S: SnapshotStore> {
    database: Database,
    store: S,
}

impl<S: SnapshotStore> DatabaseService<S> {
    /// Loads the database stored under `db.<database_id>`, or creates an
    /// empty one and publishes its first snapshot.
    ///
    /// First-snapshot publication uses the store's create-if-absent
    /// primitive: when another writer got there first, its snapshot wins
    /// and is loaded instead.
    pub fn open(mut store: S, database_id: DatabaseId) -> ServiceResult<Self> {
        let key = snapshot_key(database_id);

        let database = match store.load(&key)? {
            Some(payload) => serde_json::from_str(&payload)?,
            None => {
                let database = Database::new(database_id);
                let payload = serde_json::to_string(&database)?;
                if store.save_if_absent(&key, &payload)? {
                    database
                } else {
                    let payload = store.load(&key)?.ok_or(ServiceError::InternalInconsistency(
                        "snapshot absent right after a create-if-absent conflict",
                    ))?;
                    serde_json::from_str(&payload)?
                }
            }
        };

        info!(
            "event=db_open module=service status=ok database_id={} tables={} history_len={}",
            database.id,
            database.tables.len(),
            database.change_history.len()
        );

        Ok(Self { database, store })
    }

    /// Read access for collaborators re-rendering after a mutation.
    pub fn database(&self) -> &Database {
        &self.database
    }

    /// Dispatches one action: record history, mutate, persist the snapshot.
    ///
    /// The change record is appended before validation, so failed attempts
    /// stay visible in history. A failed mutation aborts before the save;
    /// its record reaches the store with the next successful save.
    ///
    /// # Errors
    /// - [`ServiceError::Action`] when the engine rejects the action.
    /// - [`ServiceError::Store`] / [`ServiceError::Codec`] when snapshot
    ///   persistence fails after the in-memory mutation succeeded.
    pub fn apply_action(&mut self, action: DatabaseAction) -> ServiceResult<ActionOutcome> {
        let kind = action.kind();
        self.database.change_history.push(ChangeRecord {
            applied_at_epoch_ms: now_epoch_ms(),
            action: action.clone(),
        });

        let outcome = match apply_action(&mut self.database, &action) {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(
                    "event=action_apply module=service status=error database_id={} kind={kind} error={err}",
                    self.database.id
                );
                return Err(err.into());
            }
        };

        self.persist()?;
        info!(
            "event=action_apply module=service status=ok database_id={} kind={kind}",
            self.database.id
        );
        Ok(outcome)
    }

    /// Returns the table with this name, creating it when absent.
    ///
    /// # Contract
    /// - An existing table is returned unchanged only when the requested
    ///   schema equals the stored one; otherwise `SchemaMismatch`.
    /// - Called twice with identical arguments it returns the same table id
    ///   and creates exactly one table.
    pub fn get_or_create_table(
        &mut self,
        name: &str,
        column_definitions: &[ColumnDefinition],
    ) -> ServiceResult<&Table> {
        let existing_id = match self.database.find_table_by_name(name) {
            Some(table) => {
                if table.column_definitions != column_definitions {
                    return Err(ServiceError::SchemaMismatch {
                        name: name.to_string(),
                    });
                }
                Some(table.id)
            }
            None => None,
        };

        let table_id = match existing_id {
            Some(id) => id,
            None => match self.apply_action(DatabaseAction::AddTable {
                name: name.to_string(),
                column_definitions: column_definitions.to_vec(),
            })? {
                ActionOutcome::TableAdded(id) => id,
                _ => {
                    return Err(ServiceError::InternalInconsistency(
                        "add_table dispatch reported a non-table outcome",
                    ))
                }
            },
        };

        self.database
            .find_table(table_id)
            .ok_or(ServiceError::InternalInconsistency(
                "table absent right after add_table succeeded",
            ))
    }

    fn persist(&mut self) -> ServiceResult<()> {
        let key = snapshot_key(self.database.id);
        let payload = serde_json::to_string(&self.database)?;
        self.store.save(&key, &payload)?;
        Ok(())
    }
}

fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis() as i64)
}
