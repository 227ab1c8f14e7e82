use axum::{extract::{Path, RawQuery, State}, routing::{get, put}, Router, Json};
use axum::http::StatusCode;
use crate::{
    application::todo_service::TodoService,
    domain::{error::TodoError, todo::{CreateTodo, Todo, TodoId, UpdateTodo}},
    http::types::{ApiMessage, JsonBody},
};

#[derive(Clone)]
pub struct AppState<S: TodoService> { pub service: S }

/// `/todos/complete-all` is a static segment, so the router matches it ahead
/// of `/todos/:id`.
pub fn router<S: TodoService + Clone + Send + Sync + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .route("/todos", get(list_todos::<S>).post(create_todo::<S>))
        .route("/todos/complete-all", put(complete_all::<S>))
        .route("/todos/:id", get(get_todo::<S>).put(update_todo::<S>).delete(delete_todo::<S>))
        .with_state(state)
}

async fn list_todos<S: TodoService>(State(state): State<AppState<S>>, RawQuery(query): RawQuery) -> Result<Json<Vec<Todo>>, TodoError> {
    let filter = completed_filter(query.as_deref().unwrap_or_default())?;
    Ok(Json(state.service.list(filter).await?))
}

/// Only a single `completed=true` selects finished items; any other value,
/// including a repeated parameter, selects unfinished ones.
fn completed_filter(query: &str) -> Result<Option<bool>, TodoError> {
    let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query)
        .map_err(|err| TodoError::Validation(format!("Invalid query string: {err}")))?;
    let values: Vec<&str> = pairs.iter().filter(|(key, _)| key == "completed").map(|(_, value)| value.as_str()).collect();
    Ok(match values.as_slice() {
        [] => None,
        [value] => Some(*value == "true"),
        _ => Some(false),
    })
}

async fn create_todo<S: TodoService>(State(state): State<AppState<S>>, JsonBody(payload): JsonBody<CreateTodo>) -> Result<(StatusCode, Json<Todo>), TodoError> {
    let todo = state.service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn get_todo<S: TodoService>(State(state): State<AppState<S>>, Path(id): Path<String>) -> Result<Json<Todo>, TodoError> {
    let id = parse_id(&id)?;
    Ok(Json(state.service.get(id).await?))
}

async fn update_todo<S: TodoService>(State(state): State<AppState<S>>, Path(id): Path<String>, JsonBody(payload): JsonBody<UpdateTodo>) -> Result<Json<ApiMessage>, TodoError> {
    let id = parse_id(&id)?;
    state.service.update(id, payload).await?;
    Ok(Json(ApiMessage::new("To-Do item updated.")))
}

async fn complete_all<S: TodoService>(State(state): State<AppState<S>>) -> Result<Json<ApiMessage>, TodoError> {
    state.service.complete_all().await?;
    Ok(Json(ApiMessage::new("All to-do items marked as completed.")))
}

async fn delete_todo<S: TodoService>(State(state): State<AppState<S>>, Path(id): Path<String>) -> Result<StatusCode, TodoError> {
    let id = parse_id(&id)?;
    state.service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// An id that cannot name a row is indistinguishable from one that names no row.
fn parse_id(s: &str) -> Result<TodoId, TodoError> { s.parse().map(TodoId).map_err(|_| TodoError::NotFound) }
