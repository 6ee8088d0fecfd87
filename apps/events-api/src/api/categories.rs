use crate::state::AppState;
use axum::Router;
use domain_event_categories::{EventCategoryService, PgEventCategoryRepository, handlers};

pub fn router(state: &AppState) -> Router {
    let repository = PgEventCategoryRepository::new(state.db.clone());
    handlers::router(EventCategoryService::new(repository))
}
