//! Domain model for schema-defined tabular data.
//!
//! # Responsibility
//! - Define the canonical data structures owned by the core: cell types,
//!   tables, the database root and the mutation action vocabulary.
//! - Keep row shape and cell type validation inside the model boundary.
//!
//! # Invariants
//! - Every row of a table has exactly as many cells as the table has
//!   columns, and each cell's kind matches its column's `DataType`.
//! - Table ids are allocated from `Database::next_table_id` and never reused.

pub mod action;
pub mod data_type;
pub mod database;
pub mod table;
