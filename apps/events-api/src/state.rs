//! Shared application state

use geolocation::{AdmissionGate, CoordinateCache, MapboxClient};
use std::sync::Arc;

/// Connections and geolocation collaborators shared by every router.
///
/// Cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub db: database::postgres::DatabaseConnection,
    pub redis: Option<database::redis::ConnectionManager>,
    pub mapbox: Arc<MapboxClient>,
    pub gate: Arc<AdmissionGate>,
    pub map_cache: Arc<dyn CoordinateCache>,
}
