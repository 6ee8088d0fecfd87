//! # Axum Helpers
//!
//! Shared HTTP plumbing for the events service.
//!
//! - **[`auth`]**: HS256 bearer verification and the write-role guard
//! - **[`server`]**: router assembly, health checks, graceful shutdown
//! - **[`http`]**: CORS and security headers
//! - **[`errors`]**: structured JSON error responses with error codes
//! - **[`extractors`]**: UUID path and JSON body extractors
//! - **[`audit`]**: audit logging for authorization decisions

pub mod audit;
pub mod auth;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use auth::{JwtClaims, JwtConfig, JwtVerifier, RoleGuard, require_role_for_writes};

pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app, create_router,
    health_router, run_health_checks, shutdown_signal,
};

pub use http::{cors_layer_from_env, create_cors_layer, security_headers};

pub use errors::{AppError, ErrorCode, ErrorResponse, error_response, validation_message};

pub use extractors::{JsonBody, UuidPath, ValidatedJson, parse_id};

pub use audit::{AuditEvent, AuditOutcome, extract_ip_from_headers, extract_user_agent};
