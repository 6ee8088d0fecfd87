//! Configuration for the events API

use axum_helpers::JwtConfig;
use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig};
use database::postgres::PostgresConfig;
use database::redis::RedisConfig;
use geolocation::{GeoConfig, MapboxConfig};

pub use core_config::Environment;

#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: PostgresConfig,
    /// Map images are cached in process when unset
    pub redis: Option<RedisConfig>,
    pub server: ServerConfig,
    pub environment: Environment,
    pub mapbox: MapboxConfig,
    pub geo: GeoConfig,
    pub jwt: JwtConfig,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let database = PostgresConfig::from_env()?;
        let server = ServerConfig::from_env()?;
        let mapbox = MapboxConfig::from_env()?;
        let geo = GeoConfig::from_env()?;
        let jwt = JwtConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            database,
            redis: RedisConfig::from_env_optional(),
            server,
            environment,
            mapbox,
            geo,
            jwt,
        })
    }
}
