//! Repository for the `todo_items` table.

use sqlx::SqlitePool;
use todo_core::todo::validate_title;
use todo_core::types::DbId;

use crate::error::StoreError;
use crate::models::todo_item::{CreateTodoItem, TodoItemRow, UpdateTodoItem};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, completed";

/// Provides CRUD operations for todo items.
pub struct TodoItemRepo;

impl TodoItemRepo {
    /// Insert a new todo item, returning the created row.
    ///
    /// The title is validated first; an invalid title never reaches the table.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateTodoItem,
    ) -> Result<TodoItemRow, StoreError> {
        validate_title(&input.title)?;

        let query = format!(
            "INSERT INTO todo_items (title, description, completed)
             VALUES ($1, $2, FALSE)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, TodoItemRow>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .fetch_one(pool)
            .await?;
        Ok(row)
    }

    /// List all todo items in insertion order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<TodoItemRow>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM todo_items ORDER BY id");
        let rows = sqlx::query_as::<_, TodoItemRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    /// Find a todo item by ID.
    pub async fn find_by_id(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<TodoItemRow>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM todo_items WHERE id = $1");
        let row = sqlx::query_as::<_, TodoItemRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Partially update a todo item.
    ///
    /// `title` and `completed` use `COALESCE` so only provided fields change.
    /// `description` is replaced whenever the outer `Option` is `Some`, which
    /// lets `Some(None)` clear it.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateTodoItem,
    ) -> Result<Option<TodoItemRow>, StoreError> {
        if let Some(title) = &input.title {
            validate_title(title)?;
        }

        let description_provided = input.description.is_some();
        let description_value = input.description.as_ref().and_then(|d| d.as_deref());

        let query = format!(
            "UPDATE todo_items SET
                title       = COALESCE($2, title),
                description = CASE WHEN $3 THEN $4 ELSE description END,
                completed   = COALESCE($5, completed)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, TodoItemRow>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(description_provided)
            .bind(description_value)
            .bind(input.completed)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Hard-delete a todo item, returning its last state.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn delete(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<TodoItemRow>, StoreError> {
        let query = format!("DELETE FROM todo_items WHERE id = $1 RETURNING {COLUMNS}");
        let row = sqlx::query_as::<_, TodoItemRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        if let Some(deleted) = &row {
            tracing::debug!(todo_id = deleted.id, "Todo item row deleted");
        }
        Ok(row)
    }
}
