use super::jwt::JwtVerifier;
use crate::audit::{AuditEvent, AuditOutcome, extract_ip_from_headers, extract_user_agent};
use crate::errors::AppError;
use axum::{
    extract::{Request, State},
    http::{HeaderMap, Method},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

pub const FORBIDDEN_MESSAGE: &str = "Permissão insuficiente";
const MISSING_TOKEN_MESSAGE: &str = "Token de acesso não informado";
const INVALID_TOKEN_MESSAGE: &str = "Token de acesso inválido ou expirado";

/// Extract JWT from the Authorization header or the `access_token` cookie.
pub fn extract_token_from_request(headers: &HeaderMap) -> Option<String> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|auth| auth.strip_prefix("Bearer ").map(|s| s.trim().to_string()))
        .or_else(|| {
            headers
                .get("cookie")
                .and_then(|v| v.to_str().ok())
                .and_then(|cookies| {
                    cookies.split(';').find_map(|cookie| {
                        let (name, value) = cookie.trim().split_once('=')?;
                        (name == "access_token").then(|| value.to_string())
                    })
                })
        })
}

/// Verifier plus the role that write requests must carry.
#[derive(Clone)]
pub struct RoleGuard {
    verifier: JwtVerifier,
    role: Arc<str>,
}

impl RoleGuard {
    pub fn new(verifier: JwtVerifier, role: impl Into<Arc<str>>) -> Self {
        Self {
            verifier,
            role: role.into(),
        }
    }
}

fn is_read(method: &Method) -> bool {
    matches!(*method, Method::GET | Method::HEAD | Method::OPTIONS)
}

/// Lets reads through and requires the guard's role on every other method.
///
/// Writes without a token or with a bad signature get 401; a valid token
/// without the role gets 403. Verified claims are inserted into request
/// extensions. Every write attempt past token verification is audited.
pub async fn require_role_for_writes(
    State(guard): State<RoleGuard>,
    mut request: Request,
    next: Next,
) -> Response {
    if is_read(request.method()) {
        return next.run(request).await;
    }

    let headers = request.headers();
    let action = format!("{} {}", request.method(), request.uri().path());
    let ip = extract_ip_from_headers(headers);
    let user_agent = extract_user_agent(headers);

    let Some(token) = extract_token_from_request(headers) else {
        tracing::debug!(%action, "No JWT on write request");
        return AppError::Unauthorized(MISSING_TOKEN_MESSAGE.to_string()).into_response();
    };

    let claims = match guard.verifier.verify(&token) {
        Ok(claims) => claims,
        Err(e) => {
            tracing::debug!(%action, "JWT verification failed: {}", e);
            return AppError::Unauthorized(INVALID_TOKEN_MESSAGE.to_string()).into_response();
        }
    };

    if !claims.has_role(&guard.role) {
        AuditEvent::new(Some(claims.sub.clone()), action, None, AuditOutcome::Denied)
            .with_ip(ip)
            .with_user_agent(user_agent)
            .with_details(serde_json::json!({ "required_role": &*guard.role }))
            .log();
        return AppError::Forbidden(FORBIDDEN_MESSAGE.to_string()).into_response();
    }

    let user_id = claims.sub.clone();
    request.extensions_mut().insert(claims);
    let response = next.run(request).await;

    let outcome = if response.status().is_success() {
        AuditOutcome::Success
    } else {
        AuditOutcome::Failure
    };
    AuditEvent::new(Some(user_id), action, None, outcome)
        .with_ip(ip)
        .with_user_agent(user_agent)
        .with_details(serde_json::json!({ "status": response.status().as_u16() }))
        .log();

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::config::JwtConfig;
    use crate::auth::jwt::test_tokens::{SECRET, token};
    use axum::{
        Router,
        body::Body,
        http::{Request as HttpRequest, StatusCode},
        middleware::from_fn_with_state,
        routing::get,
    };
    use tower::ServiceExt;

    fn app() -> Router {
        let guard = RoleGuard::new(JwtVerifier::new(&JwtConfig::new(SECRET)), "admin");
        Router::new()
            .route("/events", get(|| async { "list" }).post(|| async { "created" }))
            .layer(from_fn_with_state(guard, require_role_for_writes))
    }

    fn request(method: &str, bearer: Option<String>) -> HttpRequest<Body> {
        let mut builder = HttpRequest::builder().method(method).uri("/events");
        if let Some(token) = bearer {
            builder = builder.header("authorization", format!("Bearer {}", token));
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_reads_are_public() {
        let response = app().oneshot(request("GET", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_write_without_token_is_unauthorized() {
        let response = app().oneshot(request("POST", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_write_without_admin_role_is_forbidden() {
        let response = app()
            .oneshot(request("POST", Some(token(&["viewer"], 60))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_write_with_admin_role_passes() {
        let response = app()
            .oneshot(request("POST", Some(token(&["admin"], 60))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_token_from_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert("cookie", "theme=dark; access_token=abc.def".parse().unwrap());
        assert_eq!(extract_token_from_request(&headers).as_deref(), Some("abc.def"));
    }
}
