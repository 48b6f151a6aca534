//! Handlers for the `/todos` resource.
//!
//! Each handler delegates straight to [`TodoItemRepo`]; a `None` from the
//! store becomes a 404 here.

use axum::extract::State;
use axum::Json;
use todo_core::error::CoreError;
use todo_core::todo::{deleted_message, ENTITY_TODO};
use todo_core::types::DbId;
use todo_db::models::todo_item::UpdateTodoItem;
use todo_db::repositories::TodoItemRepo;

use crate::dto::{CreateTodoRequest, MessageResponse, TodoItemResponse, UpdateTodoRequest};
use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, PathId};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: ENTITY_TODO,
        id,
    })
}

/// GET /todos
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<TodoItemResponse>>> {
    let todos = TodoItemRepo::list(&state.pool).await?;
    Ok(Json(todos.into_iter().map(TodoItemResponse::from).collect()))
}

/// GET /todos/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> AppResult<Json<TodoItemResponse>> {
    let todo = TodoItemRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(todo.into()))
}

/// POST /todos
///
/// Responds 200 with the created item.
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateTodoRequest>,
) -> AppResult<Json<TodoItemResponse>> {
    let input = input.into_store_input()?;
    let todo = TodoItemRepo::create(&state.pool, &input).await?;

    tracing::info!(todo_id = todo.id, title = %todo.title, "Todo created");

    Ok(Json(todo.into()))
}

/// PUT /todos/{id}
///
/// Partial update; omitted fields keep their stored values.
pub async fn update(
    State(state): State<AppState>,
    PathId(id): PathId,
    JsonBody(input): JsonBody<UpdateTodoRequest>,
) -> AppResult<Json<TodoItemResponse>> {
    let input = UpdateTodoItem::from(input);
    let todo = TodoItemRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(todo_id = id, completed = todo.completed, "Todo updated");

    Ok(Json(todo.into()))
}

/// DELETE /todos/{id}
pub async fn delete(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> AppResult<Json<MessageResponse>> {
    let todo = TodoItemRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(todo_id = id, "Todo deleted");

    Ok(Json(MessageResponse {
        message: deleted_message(&todo.title),
    }))
}
