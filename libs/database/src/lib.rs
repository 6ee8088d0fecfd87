//! PostgreSQL and Redis connectivity for the events service.
//!
//! # Features
//!
//! - `postgres` (default) - SeaORM connector, migrations runner, [`BaseRepository`]
//! - `redis` (default) - `ConnectionManager` connector
//! - `config` (default) - `core_config::FromEnv` for both configs
//!
//! ```ignore
//! use database::postgres::{self, PostgresConfig};
//! use core_config::FromEnv;
//!
//! let db = postgres::connect_from_config_with_retry(PostgresConfig::from_env()?, None).await?;
//! postgres::run_migrations::<migration::Migrator>(&db, "events-api").await?;
//! ```

pub mod common;

#[cfg(feature = "postgres")]
pub mod repository;

#[cfg(feature = "postgres")]
pub mod postgres;

#[cfg(feature = "redis")]
pub mod redis;

pub use common::{DatabaseError, DatabaseResult};

#[cfg(feature = "postgres")]
pub use repository::BaseRepository;
