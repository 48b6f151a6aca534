//! JSON wire types for the todo endpoints.
//!
//! These are written by hand rather than derived from the storage row so
//! that a schema change in `todo_db` cannot silently change the HTTP
//! contract. Conversions to and from the store types are explicit.

use serde::{Deserialize, Deserializer, Serialize};
use todo_core::error::CoreError;
use todo_core::todo::require_title;
use todo_core::types::DbId;
use todo_db::models::todo_item::{CreateTodoItem, TodoItemRow, UpdateTodoItem};

/// A todo item as returned by every endpoint that yields one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoItemResponse {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
}

impl From<TodoItemRow> for TodoItemResponse {
    fn from(row: TodoItemRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            completed: row.completed,
        }
    }
}

/// Body of `POST /todos`.
///
/// `title` is optional at the parse step so that a missing title is reported
/// as a validation error rather than a deserialization failure.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTodoRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl CreateTodoRequest {
    /// Validate the request and convert it into a store input.
    pub fn into_store_input(self) -> Result<CreateTodoItem, CoreError> {
        Ok(CreateTodoItem {
            title: require_title(self.title)?,
            description: self.description,
        })
    }
}

/// Body of `PUT /todos/{id}`. Every field is optional.
///
/// An absent or `null` `title`/`completed` keeps the stored value. For
/// `description`, absent keeps the value and an explicit `null` clears it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTodoRequest {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "present_or_null")]
    pub description: Option<Option<String>>,
    pub completed: Option<bool>,
}

impl From<UpdateTodoRequest> for UpdateTodoItem {
    fn from(req: UpdateTodoRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            completed: req.completed,
        }
    }
}

/// `{ "message": ... }` payload used by `GET /` and `DELETE /todos/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Distinguish an explicit `null` from a missing field.
///
/// Only called when the key is present, so the outer `Some` records presence
/// and the inner value carries `null` as `None`. Pair with `#[serde(default)]`.
fn present_or_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
