/**
 * Session Status Handler
 *
 * This module implements GET /api/auth/status, which tells the client who
 * is currently logged in.
 *
 * The endpoint always answers 200: a missing or invalid session is not an
 * error, it simply yields `{"user": null}`. When the token decodes, the
 * user row is re-fetched so a deleted account does not keep a live-looking
 * session.
 */

use axum::extract::State;
use axum::response::Json;
use axum_extra::extract::CookieJar;
use sqlx::SqlitePool;

use crate::auth::handlers::types::{StatusResponse, UserResponse};
use crate::auth::sessions::{verify_token, SESSION_COOKIE};
use crate::auth::users::get_user_by_id;
use crate::error::ApiResult;

/// Session status handler
///
/// # Errors
///
/// * `500 Internal Server Error` - store failure; everything else is a
///   successful `{"user": null}` response
pub async fn status(
    State(pool): State<SqlitePool>,
    jar: CookieJar,
) -> ApiResult<Json<StatusResponse>> {
    let token = match jar.get(SESSION_COOKIE) {
        Some(cookie) => cookie.value().to_string(),
        None => return Ok(Json(StatusResponse { user: None })),
    };

    let claims = match verify_token(&token) {
        Ok(claims) => claims,
        Err(e) => {
            tracing::debug!("status probe with invalid token: {:?}", e);
            return Ok(Json(StatusResponse { user: None }));
        }
    };

    // Confirm the account still exists and pick up any role change.
    let user = get_user_by_id(&pool, &claims.sub).await?;

    Ok(Json(StatusResponse {
        user: user.map(UserResponse::from),
    }))
}
