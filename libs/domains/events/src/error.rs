use axum::response::{IntoResponse, Response};
use axum_helpers::{AppError, ErrorCode};
use domain_event_categories::CategoryError;
use domain_event_organizers::OrganizerError;
use geolocation::GeoError;
use thiserror::Error;
use uuid::Uuid;
use validator::ValidationErrors;

pub const NOT_FOUND_MESSAGE: &str = "Evento não encontrado";
pub const EMPTY_MESSAGE: &str = "Nenhum evento encontrado";

#[derive(Debug, Error)]
pub enum EventError {
    #[error("Event not found: {0}")]
    NotFound(Uuid),

    #[error("No events registered")]
    Empty,

    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationErrors),

    #[error(transparent)]
    Category(#[from] CategoryError),

    #[error(transparent)]
    Organizer(#[from] OrganizerError),

    #[error(transparent)]
    Geo(#[from] GeoError),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type EventResult<T> = Result<T, EventError>;

impl From<EventError> for AppError {
    fn from(err: EventError) -> Self {
        match err {
            EventError::NotFound(_) => AppError::NotFound(NOT_FOUND_MESSAGE.to_string()),
            EventError::Empty => AppError::NotFound(EMPTY_MESSAGE.to_string()),
            EventError::Validation(errors) => errors.into(),
            EventError::Category(e) => e.into(),
            EventError::Organizer(e) => e.into(),
            EventError::Geo(e @ GeoError::OutOfBounds { .. }) => AppError::OutOfBounds(e.to_string()),
            EventError::Geo(e @ GeoError::AddressNotResolved) => {
                AppError::AddressNotResolved(e.to_string())
            }
            EventError::Geo(GeoError::Unavailable(details)) => {
                tracing::error!("Geocoding provider failure: {}", details);
                AppError::ExternalService(ErrorCode::ExternalServiceFailure.default_message().to_string())
            }
            EventError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for EventError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_geo_errors_map_to_distinct_statuses() {
        let out_of_bounds = EventError::Geo(GeoError::OutOfBounds {
            city: "João Pessoa".to_string(),
        })
        .into_response();
        assert_eq!(out_of_bounds.status(), StatusCode::BAD_REQUEST);

        let unresolved = EventError::Geo(GeoError::AddressNotResolved).into_response();
        assert_eq!(unresolved.status(), StatusCode::BAD_REQUEST);

        let unavailable =
            EventError::Geo(GeoError::Unavailable("timeout".to_string())).into_response();
        assert_eq!(unavailable.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_reference_errors_keep_their_messages() {
        let app_error: AppError = EventError::Category(CategoryError::NotFound(Uuid::new_v4())).into();
        assert!(matches!(app_error, AppError::NotFound(msg) if msg == "Categoria de evento não encontrada"));
    }
}
