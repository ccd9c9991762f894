/**
 * Admin Route Guard
 *
 * Middleware protecting the admin UI and the `/api/admin` surface. It
 * reads the session cookie, verifies the token, and requires the decoded
 * role to be `admin`; anything else is rejected with 401 before the
 * request reaches a handler or the database.
 *
 * The guard is stateless: the token is re-verified on every request and
 * no session store or database lookup is involved.
 */

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::CookieJar;

use crate::auth::sessions::{verify_token, Claims, SESSION_COOKIE};
use crate::error::ApiError;

/// Require a valid admin session cookie
///
/// On success the decoded [`Claims`] are attached to the request
/// extensions for handlers that want the caller's identity.
///
/// # Errors
///
/// `401 Unauthorized` if the cookie is missing, the token is invalid or
/// expired, or the role is not `admin`.
pub async fn require_admin(
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = jar.get(SESSION_COOKIE).map(|cookie| cookie.value()).ok_or_else(|| {
        tracing::warn!("admin route called without session cookie");
        ApiError::Unauthorized
    })?;

    let claims = verify_token(token).map_err(|e| {
        tracing::warn!("admin route called with invalid token: {:?}", e);
        ApiError::Unauthorized
    })?;

    if !claims.is_admin() {
        tracing::warn!("admin route denied for non-admin user {}", claims.email);
        return Err(ApiError::Unauthorized);
    }

    request.extensions_mut().insert::<Claims>(claims);

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::StatusCode;
    use axum::middleware::from_fn;
    use axum::routing::get;
    use axum::Router;
    use tower::ServiceExt;

    use crate::auth::sessions::create_token;

    fn guarded_app() -> Router {
        Router::new()
            .route("/api/admin/ping", get(|| async { "pong" }))
            .layer(from_fn(require_admin))
    }

    async fn request_with_cookie(cookie: Option<String>) -> StatusCode {
        let mut builder = axum::http::Request::builder().uri("/api/admin/ping");
        if let Some(cookie) = cookie {
            builder = builder.header("cookie", cookie);
        }
        let response = guarded_app()
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap();
        response.status()
    }

    #[tokio::test]
    async fn test_missing_cookie_is_unauthorized() {
        assert_eq!(request_with_cookie(None).await, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_garbage_token_is_unauthorized() {
        let status = request_with_cookie(Some("token=not.a.jwt".to_string())).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_user_role_is_unauthorized() {
        let token = create_token("user-1", "user@example.com", "user").unwrap();
        let status = request_with_cookie(Some(format!("token={}", token))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_admin_role_passes() {
        let token = create_token("admin-1", "admin@example.com", "admin").unwrap();
        let status = request_with_cookie(Some(format!("token={}", token))).await;
        assert_eq!(status, StatusCode::OK);
    }
}
