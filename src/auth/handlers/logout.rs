/**
 * Logout Handler
 *
 * Clears the session cookie. There is no server-side token invalidation:
 * an already-issued token stays valid until its one-hour expiry.
 */

use axum::http::header::SET_COOKIE;
use axum::response::{AppendHeaders, IntoResponse, Json};

use crate::auth::sessions::clear_session_cookie;

/// Logout handler
pub async fn logout() -> impl IntoResponse {
    (
        AppendHeaders([(SET_COOKIE, clear_session_cookie())]),
        Json(serde_json::json!({ "message": "Logged out successfully" })),
    )
}
