/**
 * Admin API Routes
 *
 * Every route in this set is wrapped by the admin guard middleware: a
 * request without a valid admin session cookie is rejected with 401
 * before any handler runs.
 *
 * ## Routes (all under `/api/admin`)
 * - `GET/POST/PUT/DELETE /users` - User management
 * - `GET/POST/PUT/DELETE /job-openings` - Job opening management
 * - `GET/PUT/DELETE /job-applications` - Application review pipeline
 * - `GET/POST/PUT/DELETE /announcements` - Announcement management
 * - `GET/PUT/DELETE /contact-messages` - Contact inbox
 * - `POST /email/send` - Ad-hoc email relay
 */

use axum::middleware::from_fn;
use axum::routing::{get, post};
use axum::Router;

use crate::announcements::handlers as announcements;
use crate::auth::handlers::admin as users;
use crate::contact::handlers as contact;
use crate::email::handlers::send_email;
use crate::jobs::{applications, openings};
use crate::middleware::require_admin;
use crate::server::state::AppState;

/// Build the admin router, guarded by the admin session middleware
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route(
            "/users",
            get(users::list_users)
                .post(users::create_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route(
            "/job-openings",
            get(openings::list_openings)
                .post(openings::create_opening)
                .put(openings::update_opening)
                .delete(openings::delete_opening),
        )
        .route(
            "/job-applications",
            get(applications::list_applications)
                .put(applications::update_application)
                .delete(applications::delete_application),
        )
        .route(
            "/announcements",
            get(announcements::list_announcements)
                .post(announcements::create_announcement)
                .put(announcements::update_announcement)
                .delete(announcements::delete_announcement),
        )
        .route(
            "/contact-messages",
            get(contact::list_messages)
                .put(contact::update_message)
                .delete(contact::delete_message),
        )
        .route("/email/send", post(send_email))
        .layer(from_fn(require_admin))
}
