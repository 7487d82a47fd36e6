//! HTTP endpoint handlers

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use todo_core::{CreateTodoRequest, Todo, UpdateTodoRequest};

use crate::error::ApiError;
use crate::AppState;

/// List all todos in insertion order
pub async fn list_todos(State(state): State<Arc<AppState>>) -> Json<Vec<Todo>> {
    Json(state.store.list())
}

/// Create a todo
pub async fn create_todo(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let Json(request) = body.map_err(invalid_body)?;

    let todo = state.store.create(request.title)?;
    Ok((StatusCode::CREATED, Json(todo)))
}

/// Update the title and/or completion flag of a todo
pub async fn update_todo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Result<Json<UpdateTodoRequest>, JsonRejection>,
) -> Result<Json<Todo>, ApiError> {
    let id = parse_id(&id)?;
    let Json(request) = body.map_err(invalid_body)?;

    if request.is_empty() {
        return Err(ApiError::bad_request("no fields to update"));
    }

    let todo = state.store.update(id, request)?;
    Ok(Json(todo))
}

/// Delete a todo
pub async fn delete_todo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    state.store.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}

// Any integer is a well-formed id; ones no todo can carry are simply unknown.
fn parse_id(raw: &str) -> Result<u64, ApiError> {
    let id: i64 = raw.parse().map_err(|_| ApiError::bad_request("invalid id"))?;
    u64::try_from(id).map_err(|_| ApiError::not_found("todo not found"))
}

fn invalid_body(rejection: JsonRejection) -> ApiError {
    tracing::debug!(error = %rejection.body_text(), "Rejected request body");
    ApiError::bad_request("invalid request body")
}
