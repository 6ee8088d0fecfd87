//! Type-safe error codes for API responses.
//!
//! Each code has a client-facing identifier (`"OUT_OF_BOUNDS"`), an integer
//! for logs and dashboards (`1010`) and a default message used when the
//! raising site has nothing more specific to say.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::OutOfBounds;
//! assert_eq!(code.as_str(), "OUT_OF_BOUNDS");
//! assert_eq!(code.code(), 1010);
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Request body or query failed field validation
    ValidationError,
    /// Identifier in path or body is empty or not a UUID
    InvalidUuid,
    /// Request body is not valid JSON for the target type
    JsonExtraction,
    /// Requested resource was not found
    NotFound,
    /// Authentication credentials are missing or invalid
    Unauthorized,
    /// Authenticated caller lacks the required role
    Forbidden,
    /// Uniqueness or referential conflict
    Conflict,
    /// Address resolved outside the admitted city
    OutOfBounds,
    /// Geocoder returned no candidate for the address
    AddressNotResolved,

    // Server errors (5000-5999)
    /// An unexpected internal server error occurred
    InternalError,
    /// Geocoding or map provider failed or timed out
    ExternalServiceFailure,
    /// Service is temporarily unavailable
    ServiceUnavailable,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidUuid => "INVALID_UUID",
            Self::JsonExtraction => "JSON_EXTRACTION",
            Self::NotFound => "NOT_FOUND",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden => "FORBIDDEN",
            Self::Conflict => "CONFLICT",
            Self::OutOfBounds => "OUT_OF_BOUNDS",
            Self::AddressNotResolved => "ADDRESS_NOT_RESOLVED",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ExternalServiceFailure => "EXTERNAL_SERVICE_FAILURE",
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
        }
    }

    /// Integer code for structured logs and metrics.
    ///
    /// - 1000-1999: client errors
    /// - 5000-5999: server and upstream errors
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::InvalidUuid => 1002,
            Self::JsonExtraction => 1003,
            Self::NotFound => 1004,
            Self::Unauthorized => 1006,
            Self::Forbidden => 1007,
            Self::Conflict => 1008,
            Self::OutOfBounds => 1010,
            Self::AddressNotResolved => 1011,
            Self::InternalError => 5000,
            Self::ExternalServiceFailure => 5002,
            Self::ServiceUnavailable => 5003,
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "Dados da requisição inválidos",
            Self::InvalidUuid => "id deve estar no formato de uuid v4.",
            Self::JsonExtraction => "Corpo da requisição inválido",
            Self::NotFound => "Recurso não encontrado",
            Self::Unauthorized => "Autenticação necessária",
            Self::Forbidden => "Permissão insuficiente",
            Self::Conflict => "Recurso já cadastrado",
            Self::OutOfBounds => "As coordenadas do evento estão fora dos limites da cidade",
            Self::AddressNotResolved => {
                "Endereço do evento não foi encontrado pelo serviço de geolocalização"
            }
            Self::InternalError => "Erro interno no servidor",
            Self::ExternalServiceFailure => "Erro ao consultar o serviço de geolocalização",
            Self::ServiceUnavailable => "Serviço temporariamente indisponível",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_string_representation() {
        assert_eq!(ErrorCode::ValidationError.as_str(), "VALIDATION_ERROR");
        assert_eq!(ErrorCode::OutOfBounds.as_str(), "OUT_OF_BOUNDS");
        assert_eq!(
            ErrorCode::ExternalServiceFailure.to_string(),
            "EXTERNAL_SERVICE_FAILURE"
        );
    }

    #[test]
    fn test_error_code_ranges() {
        assert!((1000..2000).contains(&ErrorCode::AddressNotResolved.code()));
        assert!((5000..6000).contains(&ErrorCode::ExternalServiceFailure.code()));
    }

    #[test]
    fn test_error_code_serialization_matches_as_str() {
        let json = serde_json::to_string(&ErrorCode::AddressNotResolved).unwrap();
        assert_eq!(json, "\"ADDRESS_NOT_RESOLVED\"");

        let code: ErrorCode = serde_json::from_str("\"FORBIDDEN\"").unwrap();
        assert_eq!(code, ErrorCode::Forbidden);
    }
}
