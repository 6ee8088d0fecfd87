//! Custom extractors for Axum handlers.
//!
//! All rejections are [`AppError`](crate::errors::AppError)s, so malformed
//! requests get the same JSON error body as domain failures.

pub mod json_body;
pub mod uuid_path;
pub mod validated_json;

pub use json_body::JsonBody;
pub use uuid_path::{EMPTY_ID_MESSAGE, INVALID_ID_MESSAGE, UuidPath, parse_id};
pub use validated_json::ValidatedJson;
