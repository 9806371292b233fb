//! Action application engine.
//!
//! # Responsibility
//! - Validate and apply one [`DatabaseAction`] to an in-memory database.
//! - Stay pure: no clock, no persistence, no logging. History recording and
//!   snapshotting belong to the service layer.
//!
//! # Invariants
//! - Validation order for cell writes is a contract: table, then row index,
//!   then column index, then cell type. The first applicable failure wins.
//! - A failed action leaves the targeted table unchanged.
//! - Embedded schema/row/value data is cloned on apply, so a caller-held
//!   action can never alias engine state.

use crate::model::action::DatabaseAction;
use crate::model::database::Database;
use crate::model::table::{RowValidationError, Table, TableId};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ActionResult<T> = Result<T, ActionError>;

/// Typed, recoverable failure of one action application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionError {
    TableNotFound(TableId),
    RowIndexOutOfRange { index: usize, len: usize },
    ColumnIndexOutOfRange { index: usize, len: usize },
    InvalidRow(RowValidationError),
}

impl Display for ActionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TableNotFound(id) => write!(f, "table not found: {id}"),
            Self::RowIndexOutOfRange { index, len } => {
                write!(f, "row index {index} out of range for {len} rows")
            }
            Self::ColumnIndexOutOfRange { index, len } => {
                write!(f, "column index {index} out of range for {len} columns")
            }
            Self::InvalidRow(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ActionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidRow(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RowValidationError> for ActionError {
    fn from(value: RowValidationError) -> Self {
        Self::InvalidRow(value)
    }
}

/// What a successful application produced or touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    TableAdded(TableId),
    RowAdded {
        table_id: TableId,
        row_index: usize,
    },
    RowRemoved {
        table_id: TableId,
        row_index: usize,
    },
    CellChanged {
        table_id: TableId,
        row_index: usize,
        column_index: usize,
    },
}

/// Validates and applies one action to the database.
///
/// Pure state transition; callers own timestamps and persistence.
///
/// # Errors
/// - [`ActionError::TableNotFound`] when the targeted table id is absent.
/// - [`ActionError::RowIndexOutOfRange`] / [`ActionError::ColumnIndexOutOfRange`]
///   for index violations, in that order.
/// - [`ActionError::InvalidRow`] when a row or cell fails schema validation.
pub fn apply_action(database: &mut Database, action: &DatabaseAction) -> ActionResult<ActionOutcome> {
    match action {
        DatabaseAction::AddTable {
            name,
            column_definitions,
        } => {
            // Name uniqueness is deliberately not checked here; the facade's
            // get-or-create path owns that concern.
            let id = database.next_table_id;
            database.tables.push(Table {
                id,
                name: name.clone(),
                column_definitions: column_definitions.clone(),
                rows: Vec::new(),
            });
            database.next_table_id += 1;
            Ok(ActionOutcome::TableAdded(id))
        }
        DatabaseAction::AddTableRow { table_id, row } => {
            let table = database
                .find_table_mut(*table_id)
                .ok_or(ActionError::TableNotFound(*table_id))?;
            table.validate_row(row)?;
            table.rows.push(row.clone());
            Ok(ActionOutcome::RowAdded {
                table_id: *table_id,
                row_index: table.rows.len() - 1,
            })
        }
        DatabaseAction::RemoveTableRow {
            table_id,
            row_index,
        } => {
            let table = database
                .find_table_mut(*table_id)
                .ok_or(ActionError::TableNotFound(*table_id))?;
            if *row_index >= table.rows.len() {
                return Err(ActionError::RowIndexOutOfRange {
                    index: *row_index,
                    len: table.rows.len(),
                });
            }
            table.rows.remove(*row_index);
            Ok(ActionOutcome::RowRemoved {
                table_id: *table_id,
                row_index: *row_index,
            })
        }
        DatabaseAction::ChangeTableCell {
            table_id,
            row_index,
            column_index,
            value,
        } => {
            let table = database
                .find_table_mut(*table_id)
                .ok_or(ActionError::TableNotFound(*table_id))?;
            if *row_index >= table.rows.len() {
                return Err(ActionError::RowIndexOutOfRange {
                    index: *row_index,
                    len: table.rows.len(),
                });
            }
            if *column_index >= table.column_definitions.len() {
                return Err(ActionError::ColumnIndexOutOfRange {
                    index: *column_index,
                    len: table.column_definitions.len(),
                });
            }
            table.validate_cell(*column_index, value)?;
            table.rows[*row_index][*column_index] = value.clone();
            Ok(ActionOutcome::CellChanged {
                table_id: *table_id,
                row_index: *row_index,
                column_index: *column_index,
            })
        }
    }
}
