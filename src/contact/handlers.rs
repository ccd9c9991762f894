/**
 * Contact Message Handlers
 *
 * The public contact form endpoint plus the admin inbox (list, read
 * toggle, delete). A new submission notifies the admin address by email.
 */

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::contact::db;
use crate::contact::db::ContactMessage;
use crate::email::templates;
use crate::error::{ApiError, ApiResult};
use crate::server::state::AppState;

/// Public contact form payload
#[derive(Deserialize, Debug)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Read-toggle payload
#[derive(Deserialize, Debug)]
pub struct UpdateMessageRequest {
    pub id: String,
    pub read: bool,
}

/// Delete payload
#[derive(Deserialize, Debug)]
pub struct DeleteMessageRequest {
    pub id: String,
}

/// Submit a contact message (public)
///
/// # Errors
///
/// * `400 Bad Request` - any of name, email, subject, message missing
pub async fn submit_message(
    State(state): State<AppState>,
    Json(request): Json<ContactRequest>,
) -> ApiResult<impl IntoResponse> {
    if request.name.is_empty()
        || request.email.is_empty()
        || request.subject.is_empty()
        || request.message.is_empty()
    {
        return Err(ApiError::validation("All fields are required"));
    }

    let message = db::create_message(
        &state.db,
        &request.name,
        &request.email,
        &request.subject,
        &request.message,
    )
    .await?;

    let notification = templates::contact_notification(
        &message.name,
        &message.email,
        &message.subject,
        &message.message,
    );
    state
        .send_admin_email(&notification.subject, notification.html)
        .await?;

    tracing::info!("Contact message received from {}", message.email);

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": "Message sent successfully",
            "data": message,
        })),
    ))
}

/// List contact messages, most recently received first (admin)
pub async fn list_messages(State(pool): State<SqlitePool>) -> ApiResult<Json<Vec<ContactMessage>>> {
    let messages = db::list_messages(&pool).await?;
    Ok(Json(messages))
}

/// Toggle the read flag on a contact message (admin)
///
/// Only `read` changes; all other attributes are untouched.
///
/// # Errors
///
/// * `400 Bad Request` - id missing
pub async fn update_message(
    State(pool): State<SqlitePool>,
    Json(request): Json<UpdateMessageRequest>,
) -> ApiResult<Json<ContactMessage>> {
    if request.id.is_empty() {
        return Err(ApiError::validation("ID and read status are required"));
    }

    let message = db::set_read(&pool, &request.id, request.read).await?;

    Ok(Json(message))
}

/// Delete a contact message (admin)
pub async fn delete_message(
    State(pool): State<SqlitePool>,
    Json(request): Json<DeleteMessageRequest>,
) -> ApiResult<Json<serde_json::Value>> {
    if request.id.is_empty() {
        return Err(ApiError::validation("ID is required"));
    }

    db::delete_message(&pool, &request.id).await?;

    Ok(Json(serde_json::json!({ "message": "Contact message deleted successfully" })))
}
