//! Todo Core - storage, validation and data models for the todo service
//!
//! This library owns everything below the HTTP layer: the `todo` table, the
//! rules that decide which client input is acceptable, and the filter logic
//! behind the list endpoint.
//!
//! # Quick Start
//!
//! ```no_run
//! use todo_core::{TodoDatabase, TodoError, TodoQueryBuilder, Status};
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), TodoError> {
//! let db = TodoDatabase::new(Path::new("todoApplication.db")).await?;
//! db.verify_schema().await?;
//!
//! let filter = TodoQueryBuilder::new().status(Status::ToDo).build();
//! let todos = db.list_todos(&filter).await?;
//! println!("Found {} open todos", todos.len());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod query;
pub mod test_utils;
pub mod validation;

pub use config::{DatabaseConfig, TodoConfig};
pub use database::{SelectQuery, TodoDatabase};
pub use error::{Result, TodoError, ValidationError};
pub use models::*;
pub use query::{FilterCombination, FilterRule, TodoQueryBuilder, FILTER_RULES};
pub use validation::Validate;

// Re-export common types
pub use chrono::NaiveDate;
