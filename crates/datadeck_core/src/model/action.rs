//! Mutation action vocabulary.
//!
//! # Responsibility
//! - Describe every database mutation as an immutable value object.
//! - Fix the wire shape: a `kind` tag plus tag-specific fields.
//!
//! # Invariants
//! - The action set is closed; adding a kind is a compile-time-checked
//!   change everywhere actions are matched.
//! - Actions are applied exactly once and then retained only as history
//!   entries.

use crate::model::data_type::CellValue;
use crate::model::table::{ColumnDefinition, Row, TableId};
use serde::{Deserialize, Serialize};

/// One mutation to apply to a database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DatabaseAction {
    /// Creates a table with the next free id and no rows.
    AddTable {
        name: String,
        column_definitions: Vec<ColumnDefinition>,
    },
    /// Appends a row to the table with the given id.
    AddTableRow { table_id: TableId, row: Row },
    /// Removes the row at `row_index`; later rows shift down by one.
    RemoveTableRow { table_id: TableId, row_index: usize },
    /// Overwrites one cell in place.
    ChangeTableCell {
        table_id: TableId,
        row_index: usize,
        column_index: usize,
        value: CellValue,
    },
}

impl DatabaseAction {
    /// Stable tag name, matching the serialized `kind` field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AddTable { .. } => "add_table",
            Self::AddTableRow { .. } => "add_table_row",
            Self::RemoveTableRow { .. } => "remove_table_row",
            Self::ChangeTableCell { .. } => "change_table_cell",
        }
    }
}
