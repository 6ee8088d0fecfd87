use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;
use validator::ValidationErrors;

pub const NOT_FOUND_MESSAGE: &str = "Categoria de evento não encontrada";
pub const EMPTY_MESSAGE: &str = "Nenhuma categoria de eventos encontrada";
pub const DUPLICATE_MESSAGE: &str = "Esta categoria já está cadastrada.";
pub const IN_USE_MESSAGE: &str = "Categoria de evento possui eventos vinculados";

#[derive(Debug, Error)]
pub enum CategoryError {
    #[error("Event category not found: {0}")]
    NotFound(Uuid),

    #[error("No event categories registered")]
    Empty,

    #[error("Event category '{0}' already exists")]
    DuplicateName(String),

    #[error("Event category {0} is referenced by events")]
    InUse(Uuid),

    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Invalid id: {0}")]
    InvalidId(&'static str),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type CategoryResult<T> = Result<T, CategoryError>;

impl From<CategoryError> for AppError {
    fn from(err: CategoryError) -> Self {
        match err {
            CategoryError::NotFound(_) => AppError::NotFound(NOT_FOUND_MESSAGE.to_string()),
            CategoryError::Empty => AppError::NotFound(EMPTY_MESSAGE.to_string()),
            CategoryError::DuplicateName(_) => AppError::Conflict(DUPLICATE_MESSAGE.to_string()),
            CategoryError::InUse(_) => AppError::Conflict(IN_USE_MESSAGE.to_string()),
            CategoryError::Validation(errors) => errors.into(),
            CategoryError::InvalidId(msg) => AppError::InvalidUuid(msg.to_string()),
            CategoryError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for CategoryError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
