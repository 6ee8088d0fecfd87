use crate::state::AppState;
use axum::Router;
use geolocation::{MapImageService, map};

pub fn router(state: &AppState) -> Router {
    let service = MapImageService::new(
        state.mapbox.clone(),
        state.map_cache.clone(),
        state.config.geo.map_cache_ttl,
    );
    map::router(service)
}
