/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Constructed once in `main` after the pool is connected and migrated, and
/// cheaply cloned per request.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: todo_db::DbPool,
}
