use datadeck_core::{
    apply_action, ActionError, ActionOutcome, CellValue, ColumnDefinition, DataType, Database,
    DatabaseAction, RowValidationError,
};

fn todo_columns() -> Vec<ColumnDefinition> {
    vec![
        ColumnDefinition::new("description", DataType::String),
        ColumnDefinition::new("isDone", DataType::Boolean),
    ]
}

fn database_with_todo_table() -> Database {
    let mut database = Database::new(1);
    apply_action(
        &mut database,
        &DatabaseAction::AddTable {
            name: "To-Dos".to_string(),
            column_definitions: todo_columns(),
        },
    )
    .unwrap();
    database
}

fn row(description: &str, is_done: bool) -> Vec<CellValue> {
    vec![CellValue::from(description), CellValue::from(is_done)]
}

#[test]
fn add_table_assigns_sequential_ids() {
    let mut database = Database::new(1);

    let first = apply_action(
        &mut database,
        &DatabaseAction::AddTable {
            name: "To-Dos".to_string(),
            column_definitions: todo_columns(),
        },
    )
    .unwrap();
    let second = apply_action(
        &mut database,
        &DatabaseAction::AddTable {
            name: "Activities".to_string(),
            column_definitions: vec![ColumnDefinition::new("title", DataType::String)],
        },
    )
    .unwrap();

    assert_eq!(first, ActionOutcome::TableAdded(1));
    assert_eq!(second, ActionOutcome::TableAdded(2));
    assert_eq!(database.next_table_id, 3);
    assert!(database.find_table(1).unwrap().rows.is_empty());
}

#[test]
fn add_table_never_deduplicates_names() {
    let mut database = Database::new(1);
    let action = DatabaseAction::AddTable {
        name: "To-Dos".to_string(),
        column_definitions: todo_columns(),
    };

    apply_action(&mut database, &action).unwrap();
    apply_action(&mut database, &action).unwrap();

    assert_eq!(database.tables.len(), 2);
    assert_eq!(database.tables[0].name, database.tables[1].name);
    assert_ne!(database.tables[0].id, database.tables[1].id);
}

#[test]
fn add_table_row_appends_a_validated_row() {
    let mut database = database_with_todo_table();

    let outcome = apply_action(
        &mut database,
        &DatabaseAction::AddTableRow {
            table_id: 1,
            row: row("Buy milk", false),
        },
    )
    .unwrap();

    assert_eq!(
        outcome,
        ActionOutcome::RowAdded {
            table_id: 1,
            row_index: 0
        }
    );
    assert_eq!(database.find_table(1).unwrap().rows[0], row("Buy milk", false));
}

#[test]
fn add_table_row_to_missing_table_fails() {
    let mut database = Database::new(1);
    let err = apply_action(
        &mut database,
        &DatabaseAction::AddTableRow {
            table_id: 7,
            row: Vec::new(),
        },
    )
    .unwrap_err();
    assert_eq!(err, ActionError::TableNotFound(7));
}

#[test]
fn add_table_row_rejects_wrong_arity() {
    let mut database = database_with_todo_table();
    let err = apply_action(
        &mut database,
        &DatabaseAction::AddTableRow {
            table_id: 1,
            row: vec![CellValue::from("half a row")],
        },
    )
    .unwrap_err();

    assert_eq!(
        err,
        ActionError::InvalidRow(RowValidationError::ColumnCountMismatch {
            expected: 2,
            actual: 1
        })
    );
    assert!(database.find_table(1).unwrap().rows.is_empty());
}

#[test]
fn add_table_row_rejects_mismatched_cell_kind() {
    let mut database = database_with_todo_table();
    let err = apply_action(
        &mut database,
        &DatabaseAction::AddTableRow {
            table_id: 1,
            row: vec![CellValue::from("ok"), CellValue::from("not a bool")],
        },
    )
    .unwrap_err();

    assert_eq!(
        err,
        ActionError::InvalidRow(RowValidationError::TypeMismatch {
            column_index: 1,
            expected: DataType::Boolean,
            actual: DataType::String,
        })
    );
}

#[test]
fn remove_table_row_shifts_later_rows_down() {
    let mut database = database_with_todo_table();
    for description in ["a", "b", "c"] {
        apply_action(
            &mut database,
            &DatabaseAction::AddTableRow {
                table_id: 1,
                row: row(description, false),
            },
        )
        .unwrap();
    }

    let outcome = apply_action(
        &mut database,
        &DatabaseAction::RemoveTableRow {
            table_id: 1,
            row_index: 0,
        },
    )
    .unwrap();

    assert_eq!(
        outcome,
        ActionOutcome::RowRemoved {
            table_id: 1,
            row_index: 0
        }
    );
    let rows = &database.find_table(1).unwrap().rows;
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], row("b", false));
    assert_eq!(rows[1], row("c", false));
}

#[test]
fn remove_table_row_out_of_range_leaves_table_unchanged() {
    let mut database = database_with_todo_table();

    let err = apply_action(
        &mut database,
        &DatabaseAction::RemoveTableRow {
            table_id: 1,
            row_index: 0,
        },
    )
    .unwrap_err();
    assert_eq!(err, ActionError::RowIndexOutOfRange { index: 0, len: 0 });

    apply_action(
        &mut database,
        &DatabaseAction::AddTableRow {
            table_id: 1,
            row: row("only", true),
        },
    )
    .unwrap();

    let err = apply_action(
        &mut database,
        &DatabaseAction::RemoveTableRow {
            table_id: 1,
            row_index: 1,
        },
    )
    .unwrap_err();
    assert_eq!(err, ActionError::RowIndexOutOfRange { index: 1, len: 1 });
    assert_eq!(database.find_table(1).unwrap().rows.len(), 1);
}

#[test]
fn change_table_cell_overwrites_in_place() {
    let mut database = database_with_todo_table();
    apply_action(
        &mut database,
        &DatabaseAction::AddTableRow {
            table_id: 1,
            row: row("Buy milk", false),
        },
    )
    .unwrap();

    let outcome = apply_action(
        &mut database,
        &DatabaseAction::ChangeTableCell {
            table_id: 1,
            row_index: 0,
            column_index: 1,
            value: CellValue::Bool(true),
        },
    )
    .unwrap();

    assert_eq!(
        outcome,
        ActionOutcome::CellChanged {
            table_id: 1,
            row_index: 0,
            column_index: 1
        }
    );
    assert_eq!(database.find_table(1).unwrap().rows[0], row("Buy milk", true));
}

#[test]
fn change_table_cell_checks_row_before_column() {
    // 1x1 table; both indices are invalid but the row check must win.
    let mut database = Database::new(1);
    apply_action(
        &mut database,
        &DatabaseAction::AddTable {
            name: "Single".to_string(),
            column_definitions: vec![ColumnDefinition::new("only", DataType::String)],
        },
    )
    .unwrap();
    apply_action(
        &mut database,
        &DatabaseAction::AddTableRow {
            table_id: 1,
            row: vec![CellValue::from("cell")],
        },
    )
    .unwrap();

    let err = apply_action(
        &mut database,
        &DatabaseAction::ChangeTableCell {
            table_id: 1,
            row_index: 5,
            column_index: 5,
            value: CellValue::from("x"),
        },
    )
    .unwrap_err();
    assert_eq!(err, ActionError::RowIndexOutOfRange { index: 5, len: 1 });

    let err = apply_action(
        &mut database,
        &DatabaseAction::ChangeTableCell {
            table_id: 1,
            row_index: 0,
            column_index: 5,
            value: CellValue::from("x"),
        },
    )
    .unwrap_err();
    assert_eq!(err, ActionError::ColumnIndexOutOfRange { index: 5, len: 1 });

    let err = apply_action(
        &mut database,
        &DatabaseAction::ChangeTableCell {
            table_id: 1,
            row_index: 0,
            column_index: 0,
            value: CellValue::Bool(true),
        },
    )
    .unwrap_err();
    assert_eq!(
        err,
        ActionError::InvalidRow(RowValidationError::TypeMismatch {
            column_index: 0,
            expected: DataType::String,
            actual: DataType::Boolean,
        })
    );
}

#[test]
fn change_table_cell_on_missing_table_fails_first() {
    let mut database = Database::new(1);
    let err = apply_action(
        &mut database,
        &DatabaseAction::ChangeTableCell {
            table_id: 9,
            row_index: 5,
            column_index: 5,
            value: CellValue::Bool(true),
        },
    )
    .unwrap_err();
    assert_eq!(err, ActionError::TableNotFound(9));
}
