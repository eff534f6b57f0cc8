//! Row mapping from the `todo` table to [`Todo`]

use crate::{
    error::{Result as TodoResult, TodoError},
    models::Todo,
};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

/// Read an optional text column, treating NULL as the empty string
fn text_column(row: &SqliteRow, column: &str) -> TodoResult<String> {
    row.try_get::<Option<String>, _>(column)
        .map(Option::unwrap_or_default)
        .map_err(|e| TodoError::database(format!("Failed to read column {column}: {e}")))
}

/// Map a database row to a Todo struct
///
/// # Errors
///
/// Returns an error if a column is missing or has an incompatible type
pub fn map_todo_row(row: &SqliteRow) -> TodoResult<Todo> {
    let id: i64 = row
        .try_get("id")
        .map_err(|e| TodoError::database(format!("Failed to read column id: {e}")))?;

    Ok(Todo {
        id,
        todo: text_column(row, "todo")?,
        priority: text_column(row, "priority")?,
        status: text_column(row, "status")?,
        category: text_column(row, "category")?,
        due_date: text_column(row, "due_date")?,
    })
}
