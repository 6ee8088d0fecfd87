//! API routes module
//!
//! Composes the domain routers under `/api` and guards every write behind
//! the admin role.

mod categories;
mod events;
mod health;
mod map;
mod organizers;

use crate::state::AppState;
use axum::{Router, middleware, routing::get};
use axum_helpers::{JwtVerifier, RoleGuard, require_role_for_writes};

/// Role required for POST, PUT and DELETE requests.
pub const WRITE_ROLE: &str = "admin";

/// Creates the API routes without state.
pub fn routes(state: &AppState) -> Router {
    let guard = RoleGuard::new(JwtVerifier::new(&state.config.jwt), WRITE_ROLE);

    let api = Router::new()
        .nest("/events", events::router(state))
        .nest("/events-categories", categories::router(state))
        .nest("/events-organizers", organizers::router(state))
        .nest("/map", map::router(state));

    guarded(api, guard)
}

/// Applies the write-role guard to every route in `router`.
pub fn guarded(router: Router, guard: RoleGuard) -> Router {
    router.layer(middleware::from_fn_with_state(guard, require_role_for_writes))
}

/// Readiness route with Postgres and Redis checks
pub fn ready_router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
