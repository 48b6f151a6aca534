//! Todo item row type and store inputs.
//!
//! These types describe the `todo_items` table only. The JSON wire contract
//! lives in the API crate and is mapped from [`TodoItemRow`] explicitly.

use sqlx::FromRow;
use todo_core::types::DbId;

/// A row from the `todo_items` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct TodoItemRow {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
}

/// Input for inserting a new todo item. `completed` always starts false.
#[derive(Debug, Clone)]
pub struct CreateTodoItem {
    pub title: String,
    pub description: Option<String>,
}

/// Input for partially updating a todo item.
///
/// `None` on any field keeps the stored value. `description` is doubly
/// optional so that `Some(None)` clears it.
#[derive(Debug, Clone, Default)]
pub struct UpdateTodoItem {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub completed: Option<bool>,
}
