//! Request validation
//!
//! Enum fields are checked before dates, and among enum fields the order is
//! status, priority, category: the first invalid field decides the error.
//! An absent, null or empty enum value means "not provided"; a JSON value of
//! the wrong type is invalid.

use crate::error::ValidationError;
use crate::models::{
    AgendaParams, Category, CreateTodoPayload, DateInput, EnumInput, NewTodo, Priority, Status,
    TodoChanges, TodoFilter, TodoQueryParams, UpdateTodoPayload,
};
use chrono::NaiveDate;
use std::str::FromStr;
use todo_common::{date_from_timestamp_millis, parse_flexible_date};

/// One raw enum field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RawField<'a> {
    #[default]
    Absent,
    Text(&'a str),
    /// A JSON value that is not a string
    WrongType,
}

impl<'a> From<Option<&'a str>> for RawField<'a> {
    fn from(value: Option<&'a str>) -> Self {
        value.map_or(Self::Absent, Self::Text)
    }
}

impl<'a> From<Option<&'a EnumInput>> for RawField<'a> {
    fn from(value: Option<&'a EnumInput>) -> Self {
        match value {
            None => Self::Absent,
            Some(EnumInput::Text(text)) => Self::Text(text),
            Some(EnumInput::Other(_)) => Self::WrongType,
        }
    }
}

/// Raw enum fields as supplied by a client
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnumFields<'a> {
    pub status: RawField<'a>,
    pub priority: RawField<'a>,
    pub category: RawField<'a>,
}

/// Enum fields after validation; `None` means not provided
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParsedEnums {
    pub status: Option<Status>,
    pub priority: Option<Priority>,
    pub category: Option<Category>,
}

fn parse_optional<T: FromStr<Err = ValidationError>>(
    value: RawField<'_>,
    invalid: ValidationError,
) -> Result<Option<T>, ValidationError> {
    match value {
        RawField::Absent | RawField::Text("") => Ok(None),
        RawField::Text(s) => s.parse().map(Some),
        RawField::WrongType => Err(invalid),
    }
}

/// Validate the enumerated fields of a body or query string
///
/// # Errors
///
/// Returns the error of the first invalid field, checking status, then
/// priority, then category
pub fn validate_enum_fields(fields: EnumFields<'_>) -> Result<ParsedEnums, ValidationError> {
    let status = parse_optional::<Status>(fields.status, ValidationError::InvalidStatus)?;
    let priority = parse_optional::<Priority>(fields.priority, ValidationError::InvalidPriority)?;
    let category = parse_optional::<Category>(fields.category, ValidationError::InvalidCategory)?;

    Ok(ParsedEnums {
        status,
        priority,
        category,
    })
}

/// Parse a date-like value into a calendar date
///
/// # Errors
///
/// Returns [`ValidationError::InvalidDueDate`] when the value is absent or
/// cannot be coerced to a valid date
pub fn normalize_due_date(input: Option<&DateInput>) -> Result<NaiveDate, ValidationError> {
    let parsed = match input {
        Some(DateInput::Text(text)) => parse_flexible_date(text),
        Some(DateInput::Timestamp(millis)) => date_from_timestamp_millis(*millis),
        Some(DateInput::Other(_)) | None => None,
    };
    parsed.ok_or(ValidationError::InvalidDueDate)
}

/// Conversion of a raw client request into its validated form
pub trait Validate {
    type Output;

    /// # Errors
    ///
    /// Returns the [`ValidationError`] that should be reported to the client
    fn validate(self) -> Result<Self::Output, ValidationError>;
}

impl Validate for TodoQueryParams {
    type Output = TodoFilter;

    fn validate(self) -> Result<TodoFilter, ValidationError> {
        let parsed = validate_enum_fields(EnumFields {
            status: self.status.as_deref().into(),
            priority: self.priority.as_deref().into(),
            category: self.category.as_deref().into(),
        })?;

        Ok(TodoFilter {
            search: self.search_q.unwrap_or_default(),
            priority: parsed.priority,
            status: parsed.status,
            category: parsed.category,
        })
    }
}

impl Validate for AgendaParams {
    type Output = NaiveDate;

    fn validate(self) -> Result<NaiveDate, ValidationError> {
        let input = self.date.map(DateInput::Text);
        normalize_due_date(input.as_ref())
    }
}

impl Validate for CreateTodoPayload {
    type Output = NewTodo;

    fn validate(self) -> Result<NewTodo, ValidationError> {
        let parsed = validate_enum_fields(EnumFields {
            status: self.status.as_ref().into(),
            priority: self.priority.as_ref().into(),
            category: self.category.as_ref().into(),
        })?;
        let due_date = normalize_due_date(self.due_date.as_ref())?;

        Ok(NewTodo {
            id: self.id,
            todo: self.todo,
            priority: parsed.priority,
            status: parsed.status,
            category: parsed.category,
            due_date,
        })
    }
}

impl Validate for UpdateTodoPayload {
    type Output = TodoChanges;

    fn validate(self) -> Result<TodoChanges, ValidationError> {
        let parsed = validate_enum_fields(EnumFields {
            status: self.status.as_ref().into(),
            priority: self.priority.as_ref().into(),
            category: self.category.as_ref().into(),
        })?;
        // Only a supplied due date is checked on update.
        let due_date = self
            .due_date
            .as_ref()
            .map(|d| normalize_due_date(Some(d)))
            .transpose()?;

        Ok(TodoChanges {
            todo: self.todo,
            priority: parsed.priority,
            status: parsed.status,
            category: parsed.category,
            due_date,
        })
    }
}
