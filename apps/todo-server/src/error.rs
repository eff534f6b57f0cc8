//! Mapping of core errors to HTTP responses
//!
//! Every error body is plain text.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use todo_core::{TodoError, ValidationError};
use tracing::error;

/// Errors a handler can return
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Internal Server Error")]
    Internal(#[source] TodoError),
}

impl From<TodoError> for ApiError {
    fn from(err: TodoError) -> Self {
        match err {
            TodoError::Validation(validation) => Self::Validation(validation),
            other => Self::Internal(other),
        }
    }
}

impl ApiError {
    /// Status code sent for this error
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Internal(source) = &self {
            error!("Request failed: {}", source);
        }
        (self.status(), self.to_string()).into_response()
    }
}
