//! Todo item domain rules.
//!
//! Titles are the only validated field: they are required on create and,
//! when supplied on update, must still be non-empty.

use crate::error::CoreError;

/// Entity name used in [`CoreError::NotFound`] and user-facing messages.
pub const ENTITY_TODO: &str = "TODO";

/// Payload of `GET /`.
pub const WELCOME_MESSAGE: &str = "TODO APIへようこそ！";

/// Validate a todo title.
///
/// Rejects empty and whitespace-only titles. The title is stored as given;
/// surrounding whitespace is not trimmed.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation(
            "title must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Validate a title that may have been omitted from a create request.
pub fn require_title(title: Option<String>) -> Result<String, CoreError> {
    let title =
        title.ok_or_else(|| CoreError::Validation("title is required".to_string()))?;
    validate_title(&title)?;
    Ok(title)
}

/// Confirmation message returned after a todo has been deleted.
pub fn deleted_message(title: &str) -> String {
    format!("{ENTITY_TODO} '{title}' を削除しました")
}
