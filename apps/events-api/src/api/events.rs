use crate::state::AppState;
use axum::Router;
use domain_event_categories::{EventCategoryService, PgEventCategoryRepository};
use domain_event_organizers::{EventOrganizerService, PgEventOrganizerRepository};
use domain_events::{DomainReferences, EventService, PgEventRepository, handlers};
use std::sync::Arc;

/// Events router; category and organizer lookups share the same pool.
pub fn router(state: &AppState) -> Router {
    let references = DomainReferences::new(
        EventCategoryService::new(PgEventCategoryRepository::new(state.db.clone())),
        EventOrganizerService::new(PgEventOrganizerRepository::new(state.db.clone())),
    );
    let service = EventService::new(
        PgEventRepository::new(state.db.clone()),
        Arc::new(references),
        state.gate.clone(),
    );
    handlers::router(service)
}
