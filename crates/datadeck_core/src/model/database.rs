//! Database root container and change history.
//!
//! # Responsibility
//! - Own the ordered table set, the table id allocator and the append-only
//!   change history.
//! - Provide name/id lookups used by the engine and the facade.
//!
//! # Invariants
//! - `next_table_id` is strictly greater than every existing table id.
//! - Table ids are never reused; no table-removal operation exists.
//! - `tables` and `change_history` decode as empty when a stored snapshot
//!   predates those fields (the only schema-evolution mechanism).

use crate::model::action::DatabaseAction;
use crate::model::table::{Table, TableId};
use serde::{Deserialize, Serialize};

/// Identifier of a database; also the basis of its snapshot key.
pub type DatabaseId = u64;

/// One applied (or attempted) action together with its wall-clock time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRecord {
    pub action: DatabaseAction,
    /// Unix epoch milliseconds at dispatch time.
    pub applied_at_epoch_ms: i64,
}

/// Root container of named tables plus metadata and change history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Database {
    pub id: DatabaseId,
    #[serde(default)]
    pub tables: Vec<Table>,
    pub next_table_id: TableId,
    #[serde(default)]
    pub change_history: Vec<ChangeRecord>,
}

impl Database {
    /// Creates an empty database with the id allocator at its start value.
    pub fn new(id: DatabaseId) -> Self {
        Self {
            id,
            tables: Vec::new(),
            next_table_id: 1,
            change_history: Vec::new(),
        }
    }

    /// Returns the first table with the given name, in insertion order.
    pub fn find_table_by_name(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|table| table.name == name)
    }

    /// Returns the table with the given id.
    pub fn find_table(&self, id: TableId) -> Option<&Table> {
        self.tables.iter().find(|table| table.id == id)
    }

    pub(crate) fn find_table_mut(&mut self, id: TableId) -> Option<&mut Table> {
        self.tables.iter_mut().find(|table| table.id == id)
    }
}
