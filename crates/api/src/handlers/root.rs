use axum::Json;
use todo_core::todo::WELCOME_MESSAGE;

use crate::dto::MessageResponse;

/// GET /
pub async fn welcome() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: WELCOME_MESSAGE.to_string(),
    })
}
