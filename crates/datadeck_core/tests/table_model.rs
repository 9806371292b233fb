use datadeck_core::{CellValue, ColumnDefinition, DataType, RowValidationError, Table};

fn todo_table() -> Table {
    Table {
        id: 1,
        name: "To-Dos".to_string(),
        column_definitions: vec![
            ColumnDefinition::new("description", DataType::String),
            ColumnDefinition::new("isDone", DataType::Boolean),
        ],
        rows: Vec::new(),
    }
}

#[test]
fn default_values_per_data_type() {
    assert_eq!(DataType::Boolean.default_value(), CellValue::Bool(false));
    assert_eq!(
        DataType::String.default_value(),
        CellValue::Text(String::new())
    );
}

#[test]
fn default_row_matches_schema() {
    let table = todo_table();
    let row = table.default_row();

    assert_eq!(row.len(), table.column_definitions.len());
    assert_eq!(row, vec![CellValue::Text(String::new()), CellValue::Bool(false)]);
}

#[test]
fn default_row_of_empty_schema_is_empty() {
    let table = Table {
        id: 1,
        name: "empty".to_string(),
        column_definitions: Vec::new(),
        rows: Vec::new(),
    };
    assert!(table.default_row().is_empty());
}

#[test]
fn validate_row_accepts_default_row() {
    let table = todo_table();
    table.validate_row(&table.default_row()).unwrap();
}

#[test]
fn validate_row_rejects_wrong_arity() {
    let table = todo_table();
    let err = table
        .validate_row(&vec![CellValue::Text("only one".to_string())])
        .unwrap_err();
    assert_eq!(
        err,
        RowValidationError::ColumnCountMismatch {
            expected: 2,
            actual: 1
        }
    );
}

#[test]
fn validate_row_reports_first_mismatched_column() {
    let table = todo_table();
    let err = table
        .validate_row(&vec![CellValue::Bool(true), CellValue::Text("x".to_string())])
        .unwrap_err();
    assert_eq!(
        err,
        RowValidationError::TypeMismatch {
            column_index: 0,
            expected: DataType::String,
            actual: DataType::Boolean,
        }
    );
}

#[test]
fn cell_value_reports_its_data_type() {
    assert_eq!(CellValue::from(true).data_type(), DataType::Boolean);
    assert_eq!(CellValue::from("hi").data_type(), DataType::String);
}
