//! Stateless bearer-token authorization.
//!
//! Tokens are minted elsewhere and signed with a shared HS256 secret. This
//! service only verifies them and checks the `roles` claim.
//!
//! ```ignore
//! use axum_helpers::auth::{JwtConfig, JwtVerifier, RoleGuard, require_role_for_writes};
//!
//! let guard = RoleGuard::new(JwtVerifier::new(&JwtConfig::from_env()?), "admin");
//! let api = api.layer(axum::middleware::from_fn_with_state(guard, require_role_for_writes));
//! ```

pub mod config;
pub mod jwt;
pub mod middleware;

pub use config::JwtConfig;
pub use jwt::{JwtClaims, JwtVerifier};
pub use middleware::{RoleGuard, extract_token_from_request, require_role_for_writes};
