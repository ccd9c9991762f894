/**
 * Email Relay Handler
 *
 * POST /api/admin/email/send lets an admin send an ad-hoc HTML email
 * through the configured transport (the dashboard uses this for one-off
 * replies). The route sits behind the admin guard; it is not a public
 * relay.
 */

use axum::extract::State;
use axum::response::Json;
use axum::Extension;
use serde::Deserialize;

use crate::auth::sessions::Claims;
use crate::error::{ApiError, ApiResult};
use crate::server::state::AppState;

/// One address or a list of addresses
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum Recipients {
    One(String),
    Many(Vec<String>),
}

impl Recipients {
    fn into_vec(self) -> Vec<String> {
        match self {
            Recipients::One(address) => vec![address],
            Recipients::Many(addresses) => addresses,
        }
    }
}

/// Relay payload
#[derive(Deserialize, Debug)]
pub struct SendEmailRequest {
    pub to: Recipients,
    pub subject: String,
    pub html: String,
}

/// Send an ad-hoc email (admin)
///
/// # Errors
///
/// * `400 Bad Request` - recipient list empty, or subject/html missing
/// * `500 Internal Server Error` - delivery failure
pub async fn send_email(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(request): Json<SendEmailRequest>,
) -> ApiResult<Json<serde_json::Value>> {
    let recipients = request.to.into_vec();

    if recipients.is_empty() || recipients.iter().any(|r| r.is_empty()) {
        return Err(ApiError::validation("To, subject, and HTML content are required"));
    }
    if request.subject.is_empty() || request.html.is_empty() {
        return Err(ApiError::validation("To, subject, and HTML content are required"));
    }

    state
        .send_email(&recipients, &request.subject, request.html)
        .await?;

    tracing::info!(
        "Admin {} relayed email \"{}\" to {} recipient(s)",
        claims.email,
        request.subject,
        recipients.len()
    );

    Ok(Json(serde_json::json!({ "message": "Email sent successfully" })))
}
