//! SQL builders for the `todo` table
//!
//! Every client-supplied value is passed as a bound `?` parameter; only fixed
//! column names ever end up in the statement text.

use crate::models::{NewTodo, Todo, TodoFilter};
use crate::query::FilterCombination;
use chrono::NaiveDate;
use todo_common::format_date;

const SELECT_COLUMNS: &str = "SELECT id, todo, priority, status, category, due_date FROM todo";

pub(crate) const SELECT_BY_ID: &str =
    "SELECT id, todo, priority, status, category, due_date FROM todo WHERE id = ?";

pub(crate) const INSERT_TODO: &str =
    "INSERT INTO todo (id, todo, priority, status, category, due_date) VALUES (?, ?, ?, ?, ?, ?)";

pub(crate) const UPDATE_TODO: &str =
    "UPDATE todo SET todo = ?, priority = ?, status = ?, category = ?, due_date = ? WHERE id = ?";

pub(crate) const DELETE_TODO: &str = "DELETE FROM todo WHERE id = ?";

/// A parameterized SELECT and its bind values, in placeholder order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectQuery {
    pub sql: String,
    pub binds: Vec<String>,
}

impl SelectQuery {
    /// Build the list query for a validated filter
    ///
    /// The text predicate is a case-sensitive substring match; an empty
    /// search term matches every row with text.
    #[must_use]
    pub fn for_filter(filter: &TodoFilter) -> Self {
        Self::for_combination(filter, filter.combination())
    }

    /// Build the list query for an explicitly chosen combination
    #[must_use]
    pub fn for_combination(filter: &TodoFilter, combination: FilterCombination) -> Self {
        let mut clauses = vec!["instr(todo, ?) > 0".to_string()];
        let mut binds = vec![filter.search.clone()];

        for column in combination.columns() {
            if let Some(value) = filter.value_for(*column) {
                clauses.push(format!("{} = ?", column.name()));
                binds.push(value.to_string());
            }
        }

        Self {
            sql: format!(
                "{SELECT_COLUMNS} WHERE {} ORDER BY id",
                clauses.join(" AND ")
            ),
            binds,
        }
    }

    /// Build the agenda query: todos due on exactly this date
    #[must_use]
    pub fn due_on(date: NaiveDate) -> Self {
        Self {
            sql: format!("{SELECT_COLUMNS} WHERE due_date = ? ORDER BY id"),
            binds: vec![format_date(&date)],
        }
    }
}

/// Column values for an INSERT, in statement order after `id`
///
/// Enum fields that were not supplied are stored as empty strings.
#[must_use]
pub(crate) fn insert_values(todo: &NewTodo) -> [String; 5] {
    [
        todo.todo.clone(),
        todo.priority.map(|p| p.as_str()).unwrap_or_default().to_string(),
        todo.status.map(|s| s.as_str()).unwrap_or_default().to_string(),
        todo.category.map(|c| c.as_str()).unwrap_or_default().to_string(),
        format_date(&todo.due_date),
    ]
}

/// Column values for an UPDATE, in statement order before `id`
#[must_use]
pub(crate) fn update_values(todo: &Todo) -> [&str; 5] {
    [
        todo.todo.as_str(),
        todo.priority.as_str(),
        todo.status.as_str(),
        todo.category.as_str(),
        todo.due_date.as_str(),
    ]
}
