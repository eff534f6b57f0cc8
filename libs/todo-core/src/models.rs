//! Data models for todo entities and the requests that touch them

use crate::error::ValidationError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Todo priority enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    #[serde(rename = "HIGH")]
    High,
    #[serde(rename = "MEDIUM")]
    Medium,
    #[serde(rename = "LOW")]
    Low,
}

/// Todo status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "TO DO")]
    ToDo,
    #[serde(rename = "IN PROGRESS")]
    InProgress,
    #[serde(rename = "DONE")]
    Done,
}

/// Todo category enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "WORK")]
    Work,
    #[serde(rename = "HOME")]
    Home,
    #[serde(rename = "LEARNING")]
    Learning,
}

impl Priority {
    pub const ALL: [Self; 3] = [Self::High, Self::Medium, Self::Low];

    /// Stored and wire representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }
}

impl Status {
    pub const ALL: [Self; 3] = [Self::ToDo, Self::InProgress, Self::Done];

    /// Stored and wire representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ToDo => "TO DO",
            Self::InProgress => "IN PROGRESS",
            Self::Done => "DONE",
        }
    }
}

impl Category {
    pub const ALL: [Self; 3] = [Self::Work, Self::Home, Self::Learning];

    /// Stored and wire representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Work => "WORK",
            Self::Home => "HOME",
            Self::Learning => "LEARNING",
        }
    }
}

// Matching is exact and case-sensitive.
impl FromStr for Priority {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or(ValidationError::InvalidPriority)
    }
}

impl FromStr for Status {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|st| st.as_str() == s)
            .ok_or(ValidationError::InvalidStatus)
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or(ValidationError::InvalidCategory)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A row of the `todo` table as stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: i64,
    pub todo: String,
    pub priority: String,
    pub status: String,
    pub category: String,
    /// Due date as stored, `yyyy-MM-dd`
    pub due_date: String,
}

/// External JSON shape of a todo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoResponse {
    pub id: i64,
    pub todo: String,
    pub category: String,
    pub priority: String,
    pub status: String,
    #[serde(rename = "dueDate")]
    pub due_date: String,
}

impl From<Todo> for TodoResponse {
    fn from(row: Todo) -> Self {
        Self {
            id: row.id,
            todo: row.todo,
            category: row.category,
            priority: row.priority,
            status: row.status,
            due_date: row.due_date,
        }
    }
}

/// Map a sequence of stored rows to their external shape
#[must_use]
pub fn to_responses(rows: Vec<Todo>) -> Vec<TodoResponse> {
    rows.into_iter().map(TodoResponse::from).collect()
}

/// A date-like value supplied by a client
///
/// JSON integers are milliseconds since the Unix epoch; strings go through the
/// lenient date parser. Any other JSON value lands in `Other` and is rejected
/// during validation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum DateInput {
    Timestamp(i64),
    Text(String),
    Other(serde_json::Value),
}

impl From<&str> for DateInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// An enumerated field of a JSON body, kept raw until validation
///
/// Non-string values are captured in `Other` so they are reported with the
/// field's own validation error.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum EnumInput {
    Text(String),
    Other(serde_json::Value),
}

impl From<&str> for EnumInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Query string of `GET /todos/`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TodoQueryParams {
    pub search_q: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub category: Option<String>,
}

/// Query string of `GET /agenda/`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AgendaParams {
    pub date: Option<String>,
}

/// Body of `POST /todos/`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateTodoPayload {
    pub id: i64,
    pub todo: String,
    pub priority: Option<EnumInput>,
    pub status: Option<EnumInput>,
    pub category: Option<EnumInput>,
    #[serde(rename = "dueDate")]
    pub due_date: Option<DateInput>,
}

/// Body of `PUT /todos/:todoId/`; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateTodoPayload {
    pub todo: Option<String>,
    pub priority: Option<EnumInput>,
    pub status: Option<EnumInput>,
    pub category: Option<EnumInput>,
    #[serde(rename = "dueDate")]
    pub due_date: Option<DateInput>,
}

/// Validated read filter for the todo list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoFilter {
    /// Substring to look for in the todo text; empty matches everything
    pub search: String,
    pub priority: Option<Priority>,
    pub status: Option<Status>,
    pub category: Option<Category>,
}

/// Validated todo ready for insertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub id: i64,
    pub todo: String,
    pub priority: Option<Priority>,
    pub status: Option<Status>,
    pub category: Option<Category>,
    pub due_date: NaiveDate,
}

/// Validated set of changes for an existing todo
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoChanges {
    pub todo: Option<String>,
    pub priority: Option<Priority>,
    pub status: Option<Status>,
    pub category: Option<Category>,
    pub due_date: Option<NaiveDate>,
}

/// Field named in an update confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdatedField {
    Status,
    Priority,
    Todo,
    Category,
    DueDate,
}

impl fmt::Display for UpdatedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Status => "Status",
            Self::Priority => "Priority",
            Self::Todo => "Todo",
            Self::Category => "Category",
            Self::DueDate => "Due Date",
        })
    }
}

impl TodoChanges {
    /// The single field reported back to the client
    ///
    /// Checked in the order status, priority, todo, category, due date; only
    /// the first supplied field is named even when several are written.
    #[must_use]
    pub fn updated_field(&self) -> Option<UpdatedField> {
        if self.status.is_some() {
            Some(UpdatedField::Status)
        } else if self.priority.is_some() {
            Some(UpdatedField::Priority)
        } else if self.todo.is_some() {
            Some(UpdatedField::Todo)
        } else if self.category.is_some() {
            Some(UpdatedField::Category)
        } else if self.due_date.is_some() {
            Some(UpdatedField::DueDate)
        } else {
            None
        }
    }

    /// Plain-text confirmation for a successful update
    #[must_use]
    pub fn confirmation(&self) -> String {
        match self.updated_field() {
            Some(field) => format!("{field} Updated"),
            None => "Updated".to_string(),
        }
    }

    /// Overlay the supplied fields on the current row
    #[must_use]
    pub fn apply(&self, current: Todo) -> Todo {
        Todo {
            id: current.id,
            todo: self.todo.clone().unwrap_or(current.todo),
            priority: self
                .priority
                .map_or(current.priority, |p| p.as_str().to_string()),
            status: self
                .status
                .map_or(current.status, |s| s.as_str().to_string()),
            category: self
                .category
                .map_or(current.category, |c| c.as_str().to_string()),
            due_date: self
                .due_date
                .map_or(current.due_date, |d| todo_common::format_date(&d)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> Todo {
        Todo {
            id: 1,
            todo: "Buy milk".to_string(),
            priority: "HIGH".to_string(),
            status: "TO DO".to_string(),
            category: "HOME".to_string(),
            due_date: "2021-01-01".to_string(),
        }
    }

    #[test]
    fn test_enum_round_trip_through_from_str() {
        for p in Priority::ALL {
            assert_eq!(p.as_str().parse::<Priority>(), Ok(p));
        }
        for s in Status::ALL {
            assert_eq!(s.as_str().parse::<Status>(), Ok(s));
        }
        for c in Category::ALL {
            assert_eq!(c.as_str().parse::<Category>(), Ok(c));
        }
    }

    #[test]
    fn test_enum_matching_is_case_sensitive() {
        assert_eq!(
            "high".parse::<Priority>(),
            Err(ValidationError::InvalidPriority)
        );
        assert_eq!("To Do".parse::<Status>(), Err(ValidationError::InvalidStatus));
        assert_eq!(
            "work ".parse::<Category>(),
            Err(ValidationError::InvalidCategory)
        );
    }

    #[test]
    fn test_enum_serde_uses_wire_strings() {
        assert_eq!(
            serde_json::to_string(&Status::InProgress).unwrap(),
            "\"IN PROGRESS\""
        );
        let parsed: Category = serde_json::from_str("\"LEARNING\"").unwrap();
        assert_eq!(parsed, Category::Learning);
    }

    #[test]
    fn test_response_mapping_renames_due_date() {
        let response = TodoResponse::from(sample_row());
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "todo": "Buy milk",
                "category": "HOME",
                "priority": "HIGH",
                "status": "TO DO",
                "dueDate": "2021-01-01"
            })
        );
        assert!(json.get("due_date").is_none());
    }

    #[test]
    fn test_to_responses_preserves_order() {
        let mut second = sample_row();
        second.id = 2;
        let responses = to_responses(vec![sample_row(), second]);
        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0].id, 1);
        assert_eq!(responses[1].id, 2);
    }

    #[test]
    fn test_date_input_deserialization() {
        let text: DateInput = serde_json::from_str("\"2021-01-01\"").unwrap();
        assert_eq!(text, DateInput::Text("2021-01-01".to_string()));

        let millis: DateInput = serde_json::from_str("1609459200000").unwrap();
        assert_eq!(millis, DateInput::Timestamp(1_609_459_200_000));

        let fraction: DateInput = serde_json::from_str("1.5").unwrap();
        assert_eq!(fraction, DateInput::Other(serde_json::json!(1.5)));

        let flag: DateInput = serde_json::from_str("true").unwrap();
        assert_eq!(flag, DateInput::Other(serde_json::Value::Bool(true)));
    }

    #[test]
    fn test_update_payload_accepts_partial_body() {
        let payload: UpdateTodoPayload = serde_json::from_str(r#"{"status":"DONE"}"#).unwrap();
        assert_eq!(payload.status, Some(EnumInput::from("DONE")));
        assert!(payload.todo.is_none());
        assert!(payload.due_date.is_none());
    }

    #[test]
    fn test_payload_keeps_wrongly_typed_fields() {
        let payload: CreateTodoPayload = serde_json::from_str(
            r#"{"id":1,"todo":"Buy milk","status":5,"priority":null,"dueDate":true}"#,
        )
        .unwrap();
        assert_eq!(payload.status, Some(EnumInput::Other(serde_json::json!(5))));
        assert_eq!(payload.priority, None);
        assert_eq!(payload.category, None);
        assert_eq!(
            payload.due_date,
            Some(DateInput::Other(serde_json::Value::Bool(true)))
        );
    }

    #[test]
    fn test_updated_field_precedence() {
        let all = TodoChanges {
            todo: Some("x".to_string()),
            priority: Some(Priority::Low),
            status: Some(Status::Done),
            category: Some(Category::Work),
            due_date: NaiveDate::from_ymd_opt(2021, 5, 5),
        };
        assert_eq!(all.updated_field(), Some(UpdatedField::Status));

        let no_status = TodoChanges {
            status: None,
            ..all.clone()
        };
        assert_eq!(no_status.updated_field(), Some(UpdatedField::Priority));

        let text_and_later = TodoChanges {
            status: None,
            priority: None,
            ..all.clone()
        };
        assert_eq!(text_and_later.updated_field(), Some(UpdatedField::Todo));

        let category_and_date = TodoChanges {
            category: Some(Category::Home),
            due_date: NaiveDate::from_ymd_opt(2021, 5, 5),
            ..TodoChanges::default()
        };
        assert_eq!(
            category_and_date.updated_field(),
            Some(UpdatedField::Category)
        );

        let date_only = TodoChanges {
            due_date: NaiveDate::from_ymd_opt(2021, 5, 5),
            ..TodoChanges::default()
        };
        assert_eq!(date_only.confirmation(), "Due Date Updated");
        assert_eq!(TodoChanges::default().confirmation(), "Updated");
    }

    #[test]
    fn test_apply_keeps_unsupplied_fields() {
        let changes = TodoChanges {
            status: Some(Status::Done),
            ..TodoChanges::default()
        };
        let merged = changes.apply(sample_row());

        assert_eq!(merged.status, "DONE");
        assert_eq!(merged.todo, "Buy milk");
        assert_eq!(merged.priority, "HIGH");
        assert_eq!(merged.category, "HOME");
        assert_eq!(merged.due_date, "2021-01-01");
    }

    #[test]
    fn test_apply_overwrites_every_supplied_field() {
        let changes = TodoChanges {
            todo: Some("Walk dog".to_string()),
            priority: Some(Priority::Low),
            status: Some(Status::InProgress),
            category: Some(Category::Learning),
            due_date: NaiveDate::from_ymd_opt(2022, 2, 3),
        };
        let merged = changes.apply(sample_row());

        assert_eq!(
            merged,
            Todo {
                id: 1,
                todo: "Walk dog".to_string(),
                priority: "LOW".to_string(),
                status: "IN PROGRESS".to_string(),
                category: "LEARNING".to_string(),
                due_date: "2022-02-03".to_string(),
            }
        );
    }
}
