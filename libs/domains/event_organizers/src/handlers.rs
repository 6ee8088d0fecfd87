use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    JsonBody, UuidPath,
    errors::responses::{
        BadRequestUuidResponse, BadRequestValidationResponse, ConflictResponse,
        ForbiddenResponse, InternalServerErrorResponse, NotFoundResponse, UnauthorizedResponse,
    },
};
use serde_json::json;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::OrganizerResult;
use crate::models::{CreateEventOrganizer, EventOrganizer, UpdateEventOrganizer};
use crate::repository::EventOrganizerRepository;
use crate::service::EventOrganizerService;

const TAG: &str = "Event Organizers";

pub const DELETED_MESSAGE: &str = "Organizador de eventos removido com sucesso";

/// OpenAPI documentation for the event organizers API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_organizers,
        create_organizer,
        get_organizer,
        update_organizer,
        delete_organizer,
    ),
    components(
        schemas(EventOrganizer, CreateEventOrganizer, UpdateEventOrganizer),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            ConflictResponse,
            UnauthorizedResponse,
            ForbiddenResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Event organizer management endpoints")
    )
)]
pub struct ApiDoc;

pub fn router<R: EventOrganizerRepository + 'static>(service: EventOrganizerService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_organizers).post(create_organizer))
        .route(
            "/{id}",
            get(get_organizer)
                .put(update_organizer)
                .delete(delete_organizer),
        )
        .with_state(shared_service)
}

/// List organizers ordered by name
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "List of organizers", body = Vec<EventOrganizer>),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_organizers<R: EventOrganizerRepository>(
    State(service): State<Arc<EventOrganizerService<R>>>,
) -> OrganizerResult<Json<Vec<EventOrganizer>>> {
    let organizers = service.list_organizers().await?;
    Ok(Json(organizers))
}

/// Create an organizer
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateEventOrganizer,
    responses(
        (status = 201, description = "Organizer created", body = EventOrganizer),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
async fn create_organizer<R: EventOrganizerRepository>(
    State(service): State<Arc<EventOrganizerService<R>>>,
    JsonBody(input): JsonBody<CreateEventOrganizer>,
) -> OrganizerResult<impl IntoResponse> {
    let organizer = service.create_organizer(input).await?;
    Ok((StatusCode::CREATED, Json(organizer)))
}

/// Get an organizer by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Organizer ID")
    ),
    responses(
        (status = 200, description = "Organizer found", body = EventOrganizer),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_organizer<R: EventOrganizerRepository>(
    State(service): State<Arc<EventOrganizerService<R>>>,
    UuidPath(id): UuidPath,
) -> OrganizerResult<Json<EventOrganizer>> {
    let organizer = service.get_organizer(id).await?;
    Ok(Json(organizer))
}

/// Update an organizer; absent fields are left unchanged
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Organizer ID")
    ),
    request_body = UpdateEventOrganizer,
    responses(
        (status = 200, description = "Organizer updated", body = EventOrganizer),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
async fn update_organizer<R: EventOrganizerRepository>(
    State(service): State<Arc<EventOrganizerService<R>>>,
    UuidPath(id): UuidPath,
    JsonBody(input): JsonBody<UpdateEventOrganizer>,
) -> OrganizerResult<Json<EventOrganizer>> {
    let organizer = service.update_organizer(id, input).await?;
    Ok(Json(organizer))
}

/// Delete an organizer
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Organizer ID")
    ),
    responses(
        (status = 200, description = "Organizer deleted"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
async fn delete_organizer<R: EventOrganizerRepository>(
    State(service): State<Arc<EventOrganizerService<R>>>,
    UuidPath(id): UuidPath,
) -> OrganizerResult<impl IntoResponse> {
    service.delete_organizer(id).await?;
    Ok(Json(json!({ "message": DELETED_MESSAGE })))
}
