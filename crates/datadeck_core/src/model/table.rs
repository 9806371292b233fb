//! Table model: column schema, positional rows and row validation.
//!
//! # Responsibility
//! - Define the named, schema-fixed collection of rows.
//! - Build default rows and validate candidate rows/cells against the
//!   column schema.
//!
//! # Invariants
//! - `column_definitions` is fixed at table creation and never changes.
//! - Cell identity is positional; rows carry no identity of their own, so
//!   row indices shift when an earlier row is removed and must not be
//!   cached across removals.

use crate::model::data_type::{CellValue, DataType};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Identifier of a table within its owning database.
///
/// Allocated from `Database::next_table_id`, starting at 1, never reused.
pub type TableId = u64;

/// One positional slot in every row of a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    pub name: String,
    /// Serialized as `type` to match the snapshot schema naming.
    #[serde(rename = "type")]
    pub data_type: DataType,
}

impl ColumnDefinition {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}

/// Ordered cell values, positionally aligned to the owning table's columns.
pub type Row = Vec<CellValue>;

/// Validation failure for a candidate row or cell write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowValidationError {
    ColumnCountMismatch {
        expected: usize,
        actual: usize,
    },
    TypeMismatch {
        column_index: usize,
        expected: DataType,
        actual: DataType,
    },
}

impl Display for RowValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ColumnCountMismatch { expected, actual } => write!(
                f,
                "row has {actual} cells but the table defines {expected} columns"
            ),
            Self::TypeMismatch {
                column_index,
                expected,
                actual,
            } => write!(
                f,
                "cell at column {column_index} is {actual} but the column expects {expected}"
            ),
        }
    }
}

impl Error for RowValidationError {}

/// Named, schema-fixed collection of rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub id: TableId,
    /// Lookup key within the owning database (first match wins).
    pub name: String,
    pub column_definitions: Vec<ColumnDefinition>,
    pub rows: Vec<Row>,
}

impl Table {
    /// Builds a row with every cell set to its column's default value.
    pub fn default_row(&self) -> Row {
        self.column_definitions
            .iter()
            .map(|column| column.data_type.default_value())
            .collect()
    }

    /// Checks a candidate row against the column schema.
    ///
    /// Cell count is checked before cell kinds; the first offending cell
    /// (lowest column index) is reported.
    pub fn validate_row(&self, row: &Row) -> Result<(), RowValidationError> {
        if row.len() != self.column_definitions.len() {
            return Err(RowValidationError::ColumnCountMismatch {
                expected: self.column_definitions.len(),
                actual: row.len(),
            });
        }

        for (column_index, (column, cell)) in
            self.column_definitions.iter().zip(row.iter()).enumerate()
        {
            if cell.data_type() != column.data_type {
                return Err(RowValidationError::TypeMismatch {
                    column_index,
                    expected: column.data_type,
                    actual: cell.data_type(),
                });
            }
        }

        Ok(())
    }

    /// Checks one cell value against the column at `column_index`.
    ///
    /// The caller must have validated `column_index` against the schema
    /// length already; out-of-range indices are a caller bug here.
    pub fn validate_cell(
        &self,
        column_index: usize,
        value: &CellValue,
    ) -> Result<(), RowValidationError> {
        let expected = self.column_definitions[column_index].data_type;
        if value.data_type() != expected {
            return Err(RowValidationError::TypeMismatch {
                column_index,
                expected,
                actual: value.data_type(),
            });
        }
        Ok(())
    }
}
