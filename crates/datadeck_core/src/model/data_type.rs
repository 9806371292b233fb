//! Column data types and the cell value sum type.
//!
//! # Responsibility
//! - Enumerate the closed set of column value kinds.
//! - Pair every kind with a typed runtime value and its default.
//!
//! # Invariants
//! - `CellValue` variants map one-to-one onto `DataType` variants, so a
//!   cell's kind is always statically known and exhaustively matchable.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Supported column value kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    /// Flag column, defaults to `false`.
    Boolean,
    /// Free-form text column, defaults to the empty string.
    String,
}

impl DataType {
    /// Returns the default cell value for this data type.
    pub fn default_value(self) -> CellValue {
        match self {
            Self::Boolean => CellValue::Bool(false),
            Self::String => CellValue::Text(String::new()),
        }
    }
}

impl Display for DataType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Boolean => write!(f, "boolean"),
            Self::String => write!(f, "string"),
        }
    }
}

/// Runtime value of one table cell.
///
/// Kept parallel to [`DataType`] so the engine can validate a cell against
/// its column schema instead of storing untyped values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum CellValue {
    Bool(bool),
    Text(String),
}

impl CellValue {
    /// Reports which column data type this value satisfies.
    pub fn data_type(&self) -> DataType {
        match self {
            Self::Bool(_) => DataType::Boolean,
            Self::Text(_) => DataType::String,
        }
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}
