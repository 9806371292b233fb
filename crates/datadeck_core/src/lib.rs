//! Core domain logic for DataDeck: a schema-defined table store with an
//! action-based mutation log and snapshot persistence.
//! This crate is the single source of truth for business invariants.

pub mod engine;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use engine::{apply_action, ActionError, ActionOutcome, ActionResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::action::DatabaseAction;
pub use model::data_type::{CellValue, DataType};
pub use model::database::{ChangeRecord, Database, DatabaseId};
pub use model::table::{ColumnDefinition, Row, RowValidationError, Table, TableId};
pub use service::database_service::{
    snapshot_key, DatabaseService, ServiceError, ServiceResult,
};
pub use store::{MemoryStore, SnapshotStore, SqliteSnapshotStore, StoreError, StoreResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
