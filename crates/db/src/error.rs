use todo_core::error::CoreError;

/// Errors returned by store operations.
///
/// Absence of a row is not an error here; lookups return `Option`.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Input rejected before it reached the database.
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
