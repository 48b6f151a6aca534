pub mod health;
pub mod todo;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the application route tree.
///
/// ```text
/// /                     welcome message
/// /health               service and database health
/// /todos                list, create
/// /todos/{id}           get, update, delete
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::root::welcome))
        .merge(health::router())
        .merge(todo::router())
}
