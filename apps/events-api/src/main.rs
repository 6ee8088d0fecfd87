use axum::{middleware, routing::get};
use axum_helpers::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use geolocation::{
    AdmissionGate, CoordinateCache, InMemoryCoordinateCache, MapboxClient, RedisCoordinateCache,
};
use observability::{init_metrics, metrics_handler, metrics_middleware};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);
    init_metrics()?;

    let db = database::postgres::connect_from_config_with_retry(config.database.clone(), None)
        .await
        .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

    database::postgres::run_migrations::<migration::Migrator>(&db, config.app.name)
        .await
        .map_err(|e| eyre::eyre!("Migrations failed: {}", e))?;

    // Redis is optional; without it map images are cached in process
    let redis = match &config.redis {
        Some(redis_config) => Some(
            database::redis::connect_with_retry(redis_config, None)
                .await
                .map_err(|e| eyre::eyre!("Redis connection failed: {}", e))?,
        ),
        None => {
            info!("REDIS_URL not set, caching map images in memory");
            None
        }
    };

    let map_cache: Arc<dyn CoordinateCache> = match &redis {
        Some(conn) => Arc::new(RedisCoordinateCache::new(conn.clone())),
        None => Arc::new(InMemoryCoordinateCache::new()),
    };

    let mapbox = Arc::new(MapboxClient::new(&config.mapbox)?);
    let gate = Arc::new(AdmissionGate::with_place_label_policy(
        mapbox.clone(),
        config.geo.admission_city.clone(),
    ));
    info!(city = gate.city(), "Admission gate ready");

    let state = AppState {
        config,
        db,
        redis,
        mapbox,
        gate,
        map_cache,
    };

    let api_routes = api::routes(&state);
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes).await?;

    let app = router
        .merge(health_router(state.config.app))
        .merge(api::ready_router(state.clone()))
        .route("/metrics", get(metrics_handler))
        .layer(middleware::from_fn(metrics_middleware));

    info!("Starting events API with graceful shutdown (30s timeout)");

    let AppState {
        config, db, redis, ..
    } = state;

    create_production_app(
        app,
        &config.server,
        Duration::from_secs(30),
        async move {
            info!("Shutting down: closing database connections");
            match db.close().await {
                Ok(_) => info!("PostgreSQL connection closed successfully"),
                Err(e) => tracing::error!("Error closing PostgreSQL: {}", e),
            }
            drop(redis);
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Events API shutdown complete");
    Ok(())
}
