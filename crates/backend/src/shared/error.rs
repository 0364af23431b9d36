use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use contracts::shared::problem::ProblemDetails;
use contracts::shared::validation::ValidationErrors;
use thiserror::Error;

/// Request-level failures, each mapped to one HTTP status
#[derive(Debug, Error)]
pub enum AppError {
    #[error("resource not found")]
    NotFound,

    /// The id once existed or never did; either way it will not come back
    #[error("{0}")]
    Gone(String),

    #[error("validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("store error: {0}")]
    Store(#[from] sea_orm::DbErr),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Validation(errors)
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Gone(_) => StatusCode::GONE,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Store(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let title = status.canonical_reason().unwrap_or("Error");

        let problem = match self {
            AppError::Validation(errors) => {
                tracing::debug!(
                    fields = ?errors.fields().collect::<Vec<_>>(),
                    "Request rejected by validation"
                );
                ProblemDetails::validation(errors)
            }
            AppError::NotFound => ProblemDetails::new(status.as_u16(), title),
            AppError::Gone(detail) | AppError::Conflict(detail) | AppError::BadRequest(detail) => {
                ProblemDetails::new(status.as_u16(), title).with_detail(detail)
            }
            AppError::Store(e) => {
                tracing::error!("Store failure: {}", e);
                ProblemDetails::new(status.as_u16(), title)
            }
            AppError::Internal(e) => {
                tracing::error!("Internal failure: {:#}", e);
                ProblemDetails::new(status.as_u16(), title)
            }
        };

        (
            status,
            [(header::CONTENT_TYPE, "application/problem+json")],
            Json(problem),
        )
            .into_response()
    }
}
