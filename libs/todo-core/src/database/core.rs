use crate::{
    config::DatabaseConfig,
    database::{
        mappers::map_todo_row,
        query_builders::{
            insert_values, update_values, SelectQuery, DELETE_TODO, INSERT_TODO, SELECT_BY_ID,
            UPDATE_TODO,
        },
    },
    error::{Result as TodoResult, TodoError},
    models::{NewTodo, Todo, TodoChanges, TodoFilter},
};
use chrono::NaiveDate;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, error, info, instrument};

/// SQLx-backed access to the `todo` table
///
/// Cloning is cheap; clones share the same pool.
#[derive(Debug, Clone)]
pub struct TodoDatabase {
    pool: SqlitePool,
    config: DatabaseConfig,
}

impl TodoDatabase {
    /// Open an existing database file with the default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or cannot be opened
    #[instrument]
    pub async fn new(database_path: &Path) -> TodoResult<Self> {
        Self::new_with_config(database_path, DatabaseConfig::default()).await
    }

    /// Open an existing database file with a custom configuration
    ///
    /// The file is never created; a missing file is a connection error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or cannot be opened
    #[instrument]
    pub async fn new_with_config(
        database_path: &Path,
        config: DatabaseConfig,
    ) -> TodoResult<Self> {
        info!("Connecting to SQLite database at: {}", database_path.display());

        let options = SqliteConnectOptions::new()
            .filename(database_path)
            .create_if_missing(false);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .connect_with(options)
            .await
            .map_err(|e| TodoError::database(format!("Failed to connect to database: {e}")))?;

        info!(
            "Database connection established with {} max connections",
            config.max_connections
        );

        Ok(Self { pool, config })
    }

    /// Open a database from a connection string such as `sqlite::memory:`
    ///
    /// # Errors
    ///
    /// Returns an error if the connection string is invalid or the connection fails
    #[instrument]
    pub async fn from_connection_string(database_url: &str) -> TodoResult<Self> {
        let config = DatabaseConfig::default();
        info!("Connecting to SQLite database: {}", database_url);

        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| TodoError::database(format!("Invalid connection string: {e}")))?;

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .connect_with(options)
            .await
            .map_err(|e| TodoError::database(format!("Failed to connect to database: {e}")))?;

        Ok(Self { pool, config })
    }

    /// Get the underlying connection pool
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Configuration the pool was built with
    #[must_use]
    pub fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// Check if the database is connected
    #[instrument(skip(self))]
    pub async fn is_connected(&self) -> bool {
        match sqlx::query("SELECT 1").fetch_one(&self.pool).await {
            Ok(_) => {
                debug!("Database connection is healthy");
                true
            }
            Err(e) => {
                error!("Database connection check failed: {}", e);
                false
            }
        }
    }

    /// Check that the `todo` table exists and is readable
    ///
    /// # Errors
    ///
    /// Returns an error if the table is missing or the query fails
    #[instrument(skip(self))]
    pub async fn verify_schema(&self) -> TodoResult<()> {
        sqlx::query("SELECT id, todo, priority, status, category, due_date FROM todo LIMIT 1")
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| TodoError::database(format!("Schema check failed: {e}")))?;

        debug!("Schema check passed");
        Ok(())
    }

    /// Close the pool, waiting for the connection to be released
    #[instrument(skip(self))]
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database connection closed");
    }

    /// List todos matching a validated filter, ordered by id
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    #[instrument(skip(self))]
    pub async fn list_todos(&self, filter: &TodoFilter) -> TodoResult<Vec<Todo>> {
        let combination = filter.combination();
        debug!(?combination, "Listing todos");
        self.fetch_all(SelectQuery::for_filter(filter)).await
    }

    /// Todos whose due date is exactly `date`, ordered by id
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    #[instrument(skip(self))]
    pub async fn list_todos_due_on(&self, date: NaiveDate) -> TodoResult<Vec<Todo>> {
        self.fetch_all(SelectQuery::due_on(date)).await
    }

    async fn fetch_all(&self, query: SelectQuery) -> TodoResult<Vec<Todo>> {
        let mut statement = sqlx::query(&query.sql);
        for value in &query.binds {
            statement = statement.bind(value);
        }

        let rows = statement
            .fetch_all(&self.pool)
            .await
            .map_err(|e| TodoError::database(format!("Failed to fetch todos: {e}")))?;

        let todos = rows.iter().map(map_todo_row).collect::<TodoResult<Vec<_>>>()?;
        debug!("Fetched {} todos", todos.len());
        Ok(todos)
    }

    /// Get a single todo by id
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    #[instrument(skip(self))]
    pub async fn get_todo(&self, id: i64) -> TodoResult<Option<Todo>> {
        let row = sqlx::query(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| TodoError::database(format!("Failed to fetch todo: {e}")))?;

        row.as_ref().map(map_todo_row).transpose()
    }

    /// Insert a validated todo
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails, including when the id is already taken
    #[instrument(skip(self, todo), fields(id = todo.id))]
    pub async fn create_todo(&self, todo: &NewTodo) -> TodoResult<()> {
        let [text, priority, status, category, due_date] = insert_values(todo);

        sqlx::query(INSERT_TODO)
            .bind(todo.id)
            .bind(text)
            .bind(priority)
            .bind(status)
            .bind(category)
            .bind(due_date)
            .execute(&self.pool)
            .await
            .map_err(|e| TodoError::database(format!("Failed to create todo: {e}")))?;

        info!("Created todo {}", todo.id);
        Ok(())
    }

    /// Merge `changes` over the stored row and write every column back
    ///
    /// Returns the row as written, or `None` when no row has this id; nothing
    /// is written in that case.
    ///
    /// # Errors
    ///
    /// Returns a database error if either statement fails
    #[instrument(skip(self))]
    pub async fn update_todo(&self, id: i64, changes: &TodoChanges) -> TodoResult<Option<Todo>> {
        let Some(current) = self.get_todo(id).await? else {
            debug!("No todo {} to update", id);
            return Ok(None);
        };

        let merged = changes.apply(current);
        let [text, priority, status, category, due_date] = update_values(&merged);

        sqlx::query(UPDATE_TODO)
            .bind(text)
            .bind(priority)
            .bind(status)
            .bind(category)
            .bind(due_date)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| TodoError::database(format!("Failed to update todo: {e}")))?;

        info!("Updated todo {}", id);
        Ok(Some(merged))
    }

    /// Delete a todo; returns the number of rows removed (0 or 1)
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails
    #[instrument(skip(self))]
    pub async fn delete_todo(&self, id: i64) -> TodoResult<u64> {
        let result = sqlx::query(DELETE_TODO)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| TodoError::database(format!("Failed to delete todo: {e}")))?;

        let removed = result.rows_affected();
        info!("Deleted todo {} ({} rows)", id, removed);
        Ok(removed)
    }
}
