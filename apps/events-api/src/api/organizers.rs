use crate::state::AppState;
use axum::Router;
use domain_event_organizers::{EventOrganizerService, PgEventOrganizerRepository, handlers};

pub fn router(state: &AppState) -> Router {
    let repository = PgEventOrganizerRepository::new(state.db.clone());
    handlers::router(EventOrganizerService::new(repository))
}
