/**
 * Announcement Handlers
 *
 * Admin CRUD over announcements plus the public news feed. The list is
 * intentionally public: the home page renders it without a session, and
 * the admin dashboard reads the same data through the guarded route.
 *
 * Publishing an announcement sends one broadcast email addressed to every
 * user that exists at that moment; no users means no send.
 */

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::announcements::db;
use crate::announcements::db::Announcement;
use crate::auth::users::list_user_emails;
use crate::email::templates;
use crate::error::{ApiError, ApiResult};
use crate::server::state::AppState;

/// Create payload
#[derive(Deserialize, Debug)]
pub struct CreateAnnouncementRequest {
    pub title: String,
    pub content: String,
}

/// Update payload
#[derive(Deserialize, Debug)]
pub struct UpdateAnnouncementRequest {
    pub id: String,
    pub title: String,
    pub content: String,
}

/// Delete payload
#[derive(Deserialize, Debug)]
pub struct DeleteAnnouncementRequest {
    pub id: String,
}

/// List announcements, most recently published first
///
/// Mounted both publicly (news feed) and under the admin prefix.
pub async fn list_announcements(
    State(pool): State<SqlitePool>,
) -> ApiResult<Json<Vec<Announcement>>> {
    let announcements = db::list_announcements(&pool).await?;
    Ok(Json(announcements))
}

/// Create an announcement and broadcast it to every user
///
/// # Errors
///
/// * `400 Bad Request` - title or content missing
pub async fn create_announcement(
    State(state): State<AppState>,
    Json(request): Json<CreateAnnouncementRequest>,
) -> ApiResult<impl IntoResponse> {
    if request.title.is_empty() || request.content.is_empty() {
        return Err(ApiError::validation("Title and content are required"));
    }

    let announcement = db::create_announcement(&state.db, &request.title, &request.content).await?;

    let recipients = list_user_emails(&state.db).await?;
    if !recipients.is_empty() {
        let email = templates::announcement(&announcement.title, &announcement.content);
        state.send_email(&recipients, &email.subject, email.html).await?;
        tracing::info!(
            "Announcement \"{}\" broadcast to {} user(s)",
            announcement.title,
            recipients.len()
        );
    }

    Ok((StatusCode::CREATED, Json(announcement)))
}

/// Update an announcement
///
/// # Errors
///
/// * `400 Bad Request` - id, title, or content missing
pub async fn update_announcement(
    State(pool): State<SqlitePool>,
    Json(request): Json<UpdateAnnouncementRequest>,
) -> ApiResult<Json<Announcement>> {
    if request.id.is_empty() || request.title.is_empty() || request.content.is_empty() {
        return Err(ApiError::validation("ID, title, and content are required"));
    }

    let announcement =
        db::update_announcement(&pool, &request.id, &request.title, &request.content).await?;

    Ok(Json(announcement))
}

/// Delete an announcement
pub async fn delete_announcement(
    State(pool): State<SqlitePool>,
    Json(request): Json<DeleteAnnouncementRequest>,
) -> ApiResult<Json<serde_json::Value>> {
    if request.id.is_empty() {
        return Err(ApiError::validation("ID is required"));
    }

    db::delete_announcement(&pool, &request.id).await?;

    Ok(Json(serde_json::json!({ "message": "Announcement deleted successfully" })))
}
