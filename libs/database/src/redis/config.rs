#[cfg(feature = "config")]
use core_config::{ConfigError, FromEnv, env_optional, env_required};

#[derive(Clone, Debug)]
pub struct RedisConfig {
    pub url: String,
}

impl RedisConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[cfg(feature = "config")]
impl RedisConfig {
    /// `None` when `REDIS_URL` is unset or blank.
    pub fn from_env_optional() -> Option<Self> {
        env_optional("REDIS_URL").map(Self::new)
    }
}

#[cfg(feature = "config")]
impl FromEnv for RedisConfig {
    fn from_env() -> Result<Self, ConfigError> {
        env_required("REDIS_URL").map(Self::new)
    }
}
