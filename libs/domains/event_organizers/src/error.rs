use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;
use validator::ValidationErrors;

pub const NOT_FOUND_MESSAGE: &str = "Organizador de eventos não encontrado";
pub const EMPTY_MESSAGE: &str = "Nenhum organizador de eventos foi encontrado";
pub const DUPLICATE_MESSAGE: &str = "Este organizador já está cadastrado";
pub const IN_USE_MESSAGE: &str = "Organizador de eventos possui eventos vinculados";

#[derive(Debug, Error)]
pub enum OrganizerError {
    #[error("Event organizer not found: {0}")]
    NotFound(Uuid),

    #[error("No event organizers registered")]
    Empty,

    #[error("An organizer with this e-mail or CNPJ already exists")]
    Duplicate,

    #[error("Event organizer {0} is referenced by events")]
    InUse(Uuid),

    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Invalid id: {0}")]
    InvalidId(&'static str),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type OrganizerResult<T> = Result<T, OrganizerError>;

impl From<OrganizerError> for AppError {
    fn from(err: OrganizerError) -> Self {
        match err {
            OrganizerError::NotFound(_) => AppError::NotFound(NOT_FOUND_MESSAGE.to_string()),
            OrganizerError::Empty => AppError::NotFound(EMPTY_MESSAGE.to_string()),
            OrganizerError::Duplicate => AppError::Conflict(DUPLICATE_MESSAGE.to_string()),
            OrganizerError::InUse(_) => AppError::Conflict(IN_USE_MESSAGE.to_string()),
            OrganizerError::Validation(errors) => errors.into(),
            OrganizerError::InvalidId(msg) => AppError::InvalidUuid(msg.to_string()),
            OrganizerError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for OrganizerError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
