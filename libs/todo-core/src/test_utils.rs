//! Test utilities and mock data for the todo service

use crate::{
    database::query_builders::{insert_values, INSERT_TODO},
    error::{Result, TodoError},
    models::{Category, NewTodo, Priority, Status},
};
use chrono::NaiveDate;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};
use std::path::Path;

/// DDL of the `todo` table
pub const TODO_SCHEMA: &str = "CREATE TABLE IF NOT EXISTS todo (
    id INTEGER PRIMARY KEY,
    todo TEXT,
    priority TEXT,
    status TEXT,
    category TEXT,
    due_date TEXT
)";

/// Create a test database with mock data
///
/// The file is created if needed, the `todo` table is created, and the
/// todos from [`create_mock_todos`] are inserted.
///
/// # Errors
/// Returns `TodoError::Database` if the database cannot be created
pub async fn create_test_database<P: AsRef<Path>>(db_path: P) -> Result<()> {
    let pool = open_creating(db_path.as_ref()).await?;
    create_schema(&pool).await?;
    insert_mock_data(&pool).await?;
    pool.close().await;
    Ok(())
}

/// Create a database holding an empty `todo` table
///
/// # Errors
/// Returns `TodoError::Database` if the database cannot be created
pub async fn create_empty_database<P: AsRef<Path>>(db_path: P) -> Result<()> {
    let pool = open_creating(db_path.as_ref()).await?;
    create_schema(&pool).await?;
    pool.close().await;
    Ok(())
}

async fn open_creating(db_path: &Path) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true);
    SqlitePool::connect_with(options)
        .await
        .map_err(|e| TodoError::database(format!("Failed to create test database: {e}")))
}

async fn create_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(TODO_SCHEMA)
        .execute(pool)
        .await
        .map_err(|e| TodoError::database(format!("Failed to create schema: {e}")))?;
    Ok(())
}

async fn insert_mock_data(pool: &SqlitePool) -> Result<()> {
    for todo in create_mock_todos() {
        let [text, priority, status, category, due_date] = insert_values(&todo);
        sqlx::query(INSERT_TODO)
            .bind(todo.id)
            .bind(text)
            .bind(priority)
            .bind(status)
            .bind(category)
            .bind(due_date)
            .execute(pool)
            .await
            .map_err(|e| TodoError::database(format!("Failed to insert mock todo: {e}")))?;
    }
    Ok(())
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Mock todos covering every priority, status and category
#[must_use]
pub fn create_mock_todos() -> Vec<NewTodo> {
    vec![
        NewTodo {
            id: 1,
            todo: "Learn HTML".to_string(),
            priority: Some(Priority::High),
            status: Some(Status::ToDo),
            category: Some(Category::Learning),
            due_date: date(2021, 2, 22),
        },
        NewTodo {
            id: 2,
            todo: "Learn JS".to_string(),
            priority: Some(Priority::Medium),
            status: Some(Status::Done),
            category: Some(Category::Learning),
            due_date: date(2021, 4, 2),
        },
        NewTodo {
            id: 3,
            todo: "Clean the garden".to_string(),
            priority: Some(Priority::Low),
            status: Some(Status::ToDo),
            category: Some(Category::Home),
            due_date: date(2021, 2, 22),
        },
        NewTodo {
            id: 4,
            todo: "Fix the bug".to_string(),
            priority: Some(Priority::High),
            status: Some(Status::InProgress),
            category: Some(Category::Work),
            due_date: date(2021, 1, 12),
        },
        NewTodo {
            id: 5,
            todo: "Buy a Car".to_string(),
            priority: Some(Priority::Medium),
            status: Some(Status::InProgress),
            category: Some(Category::Home),
            due_date: date(2021, 9, 22),
        },
        NewTodo {
            id: 6,
            todo: "Play volleyball".to_string(),
            priority: Some(Priority::High),
            status: Some(Status::Done),
            category: Some(Category::Home),
            due_date: date(2021, 12, 12),
        },
    ]
}
