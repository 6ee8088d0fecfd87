//! UUID path parameter extractor.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use uuid::Uuid;

pub const EMPTY_ID_MESSAGE: &str = "id não pode ser vazio.";
pub const INVALID_ID_MESSAGE: &str = "id deve estar no formato de uuid v4.";

/// Parses a client-supplied identifier, returning the user-facing message on failure.
pub fn parse_id(raw: &str) -> Result<Uuid, &'static str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(EMPTY_ID_MESSAGE);
    }
    Uuid::parse_str(trimmed).map_err(|_| INVALID_ID_MESSAGE)
}

/// Extractor for a single UUID path parameter.
///
/// ```ignore
/// async fn get_event(UuidPath(id): UuidPath) -> String {
///     format!("Event {}", id)
/// }
///
/// let app = Router::new().route("/events/{id}", get(get_event));
/// ```
pub struct UuidPath(pub Uuid);

impl<S> FromRequestParts<S> for UuidPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::InvalidUuid(EMPTY_ID_MESSAGE.to_string()))?;

        parse_id(&id)
            .map(UuidPath)
            .map_err(|msg| AppError::InvalidUuid(msg.to_string()))
    }
}
