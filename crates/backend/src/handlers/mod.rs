use axum::extract::rejection::JsonRejection;
use contracts::shared::validation::ValidationErrors;

use crate::shared::error::AppError;

pub mod a001_habit;
pub mod a002_tag;
pub mod a003_habit_tag;

/// Error key for a request body that does not deserialize
pub const BODY_ERROR_KEY: &str = "body";

/// Report an unreadable JSON body as a validation problem keyed by `key`
pub fn body_error(key: &str, rejection: JsonRejection) -> AppError {
    AppError::Validation(ValidationErrors::single(key, rejection.body_text()))
}
