/**
 * Public API Routes
 *
 * This module defines every route reachable without a session:
 *
 * ## Authentication
 * - `POST /api/auth/register` - User registration (sets the session cookie)
 * - `POST /api/auth/login` - Login (sets the session cookie)
 * - `POST /api/auth/logout` - Logout (clears the session cookie)
 * - `GET /api/auth/status` - Current session's user, or null
 *
 * ## Site
 * - `POST /api/contact` - Contact form submission
 * - `GET /api/jobs` - Open positions feed
 * - `POST /api/jobs/apply` - Job application submission
 * - `GET /api/announcements` - Announcement news feed
 * - `GET /api/health` - Liveness probe
 */

use axum::routing::{get, post};
use axum::Router;

use crate::announcements::handlers::list_announcements;
use crate::auth::{login, logout, register, status};
use crate::contact::handlers::submit_message;
use crate::jobs::applications::apply;
use crate::jobs::openings::list_openings;
use crate::server::state::AppState;

/// Liveness probe
async fn health() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({ "status": "ok" }))
}

/// Configure the public API routes
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Authentication endpoints
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout))
        .route("/api/auth/status", get(status))
        // Public site endpoints
        .route("/api/contact", post(submit_message))
        .route("/api/jobs", get(list_openings))
        .route("/api/jobs/apply", post(apply))
        .route("/api/announcements", get(list_announcements))
        // Liveness probe
        .route("/api/health", get(health))
}
