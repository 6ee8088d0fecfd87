//! Reusable OpenAPI response components.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "code": 5000,
        "error": "INTERNAL_ERROR",
        "message": "Erro interno no servidor"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Geocoding or map provider failure",
    content_type = "application/json",
    example = json!({
        "code": 5002,
        "error": "EXTERNAL_SERVICE_FAILURE",
        "message": "Erro ao consultar o serviço de geolocalização"
    })
)]
pub struct ExternalServiceFailureResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Validation Error",
    content_type = "application/json",
    example = json!({
        "code": 1001,
        "error": "VALIDATION_ERROR",
        "message": "Título deve conter entre 3 e 120 caracteres",
        "details": {
            "eventTitle": [{
                "code": "length",
                "message": "Título deve conter entre 3 e 120 caracteres",
                "params": {"min": 3, "max": 120, "value": "ab"}
            }]
        }
    })
)]
pub struct BadRequestValidationResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Invalid id",
    content_type = "application/json",
    example = json!({
        "code": 1002,
        "error": "INVALID_UUID",
        "message": "id deve estar no formato de uuid v4."
    })
)]
pub struct BadRequestUuidResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Address outside the admitted city",
    content_type = "application/json",
    example = json!({
        "code": 1010,
        "error": "OUT_OF_BOUNDS",
        "message": "As coordenadas do evento estão fora dos limites de João Pessoa"
    })
)]
pub struct OutOfBoundsResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "code": 1004,
        "error": "NOT_FOUND",
        "message": "Evento não encontrado"
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Unauthorized - Authentication required",
    content_type = "application/json",
    example = json!({
        "code": 1006,
        "error": "UNAUTHORIZED",
        "message": "Autenticação necessária"
    })
)]
pub struct UnauthorizedResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Forbidden - Insufficient role",
    content_type = "application/json",
    example = json!({
        "code": 1007,
        "error": "FORBIDDEN",
        "message": "Permissão insuficiente"
    })
)]
pub struct ForbiddenResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Conflict - Resource already exists",
    content_type = "application/json",
    example = json!({
        "code": 1008,
        "error": "CONFLICT",
        "message": "Esta categoria já está cadastrada."
    })
)]
pub struct ConflictResponse(pub ErrorResponse);
