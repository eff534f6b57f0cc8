//! HTTP routes for the todo API
//!
//! Paths carry a trailing slash and are matched exactly; `/todos` without
//! the slash falls through to the 404 handler.

use crate::{
    error::ApiError,
    extract::{ValidatedJson, ValidatedQuery},
    health::health_check,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use std::sync::Arc;
use todo_core::{
    to_responses, AgendaParams, CreateTodoPayload, TodoDatabase, TodoQueryParams, TodoResponse,
    UpdateTodoPayload,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, instrument};

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub database: Arc<TodoDatabase>,
}

impl AppState {
    #[must_use]
    pub fn new(database: Arc<TodoDatabase>) -> Self {
        Self { database }
    }
}

/// Build the application router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/todos/", get(list_todos).post(create_todo))
        .route(
            "/todos/:todo_id/",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .route("/agenda/", get(agenda))
        .route("/health", get(health_check))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[instrument(skip(state))]
async fn list_todos(
    State(state): State<AppState>,
    ValidatedQuery(filter): ValidatedQuery<TodoQueryParams>,
) -> Result<Json<Vec<TodoResponse>>, ApiError> {
    let todos = state.database.list_todos(&filter).await?;
    Ok(Json(to_responses(todos)))
}

/// A missing id answers `{}` rather than 404
#[instrument(skip(state))]
async fn get_todo(
    State(state): State<AppState>,
    Path(todo_id): Path<i64>,
) -> Result<Response, ApiError> {
    let response = match state.database.get_todo(todo_id).await? {
        Some(todo) => Json(TodoResponse::from(todo)).into_response(),
        None => {
            debug!("Todo {} not found", todo_id);
            Json(serde_json::json!({})).into_response()
        }
    };
    Ok(response)
}

#[instrument(skip(state))]
async fn agenda(
    State(state): State<AppState>,
    ValidatedQuery(date): ValidatedQuery<AgendaParams>,
) -> Result<Json<Vec<TodoResponse>>, ApiError> {
    let todos = state.database.list_todos_due_on(date).await?;
    Ok(Json(to_responses(todos)))
}

#[instrument(skip(state, todo), fields(id = todo.id))]
async fn create_todo(
    State(state): State<AppState>,
    ValidatedJson(todo): ValidatedJson<CreateTodoPayload>,
) -> Result<&'static str, ApiError> {
    state.database.create_todo(&todo).await?;
    Ok("Todo Successfully Added")
}

#[instrument(skip(state))]
async fn update_todo(
    State(state): State<AppState>,
    Path(todo_id): Path<i64>,
    ValidatedJson(changes): ValidatedJson<UpdateTodoPayload>,
) -> Result<String, ApiError> {
    // An unknown id writes nothing and still gets the confirmation.
    state.database.update_todo(todo_id, &changes).await?;
    Ok(changes.confirmation())
}

#[instrument(skip(state))]
async fn delete_todo(
    State(state): State<AppState>,
    Path(todo_id): Path<i64>,
) -> Result<&'static str, ApiError> {
    state.database.delete_todo(todo_id).await?;
    Ok("Todo Deleted")
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Resource not found")
}
