//! Storage access for the `todo` table

mod core;
pub mod mappers;
pub mod query_builders;

pub use core::*;

pub use mappers::map_todo_row;
pub use query_builders::SelectQuery;
