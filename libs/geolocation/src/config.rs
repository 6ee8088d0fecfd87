use core_config::{ConfigError, FromEnv, env_or_default, env_parse, env_required};
use std::fmt;
use std::time::Duration;

pub const DEFAULT_MAPBOX_BASE_URL: &str = "https://api.mapbox.com";
pub const DEFAULT_ADMISSION_CITY: &str = "João Pessoa";

#[derive(Clone)]
pub struct MapboxConfig {
    pub access_token: String,
    /// Without trailing slash
    pub base_url: String,
    pub timeout: Duration,
}

impl fmt::Debug for MapboxConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapboxConfig")
            .field("access_token", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl FromEnv for MapboxConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let timeout_secs: u64 = env_parse("MAPBOX_TIMEOUT_SECS", "10")?;
        Ok(Self {
            access_token: env_required("MAPBOX_ACCESS_TOKEN")?,
            base_url: env_or_default("MAPBOX_BASE_URL", DEFAULT_MAPBOX_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// City used by the admission gate and TTL of cached map images.
#[derive(Debug, Clone)]
pub struct GeoConfig {
    pub admission_city: String,
    pub map_cache_ttl: Duration,
}

impl Default for GeoConfig {
    fn default() -> Self {
        Self {
            admission_city: DEFAULT_ADMISSION_CITY.to_string(),
            map_cache_ttl: Duration::from_secs(3600),
        }
    }
}

impl FromEnv for GeoConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let ttl_secs: u64 = env_parse("MAP_CACHE_TTL_SECS", "3600")?;
        Ok(Self {
            admission_city: env_or_default("ADMISSION_CITY", DEFAULT_ADMISSION_CITY),
            map_cache_ttl: Duration::from_secs(ttl_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapbox_config_defaults() {
        temp_env::with_vars(
            [
                ("MAPBOX_ACCESS_TOKEN", Some("pk.test")),
                ("MAPBOX_BASE_URL", None),
                ("MAPBOX_TIMEOUT_SECS", None),
            ],
            || {
                let config = MapboxConfig::from_env().unwrap();
                assert_eq!(config.base_url, "https://api.mapbox.com");
                assert_eq!(config.timeout, Duration::from_secs(10));
                assert!(!format!("{:?}", config).contains("pk.test"));
            },
        );
    }

    #[test]
    fn test_mapbox_config_trims_base_url() {
        temp_env::with_vars(
            [
                ("MAPBOX_ACCESS_TOKEN", Some("pk.test")),
                ("MAPBOX_BASE_URL", Some("http://localhost:9000/")),
            ],
            || {
                let config = MapboxConfig::from_env().unwrap();
                assert_eq!(config.base_url, "http://localhost:9000");
            },
        );
    }

    #[test]
    fn test_mapbox_config_requires_token() {
        temp_env::with_var_unset("MAPBOX_ACCESS_TOKEN", || {
            assert!(matches!(
                MapboxConfig::from_env(),
                Err(ConfigError::MissingEnvVar(_))
            ));
        });
    }

    #[test]
    fn test_geo_config_from_env() {
        temp_env::with_vars(
            [
                ("ADMISSION_CITY", None),
                ("MAP_CACHE_TTL_SECS", Some("120")),
            ],
            || {
                let config = GeoConfig::from_env().unwrap();
                assert_eq!(config.admission_city, "João Pessoa");
                assert_eq!(config.map_cache_ttl, Duration::from_secs(120));
            },
        );
    }
}
