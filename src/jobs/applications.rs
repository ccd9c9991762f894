/**
 * Job Application Handlers
 *
 * The public application submission endpoint plus the admin surface for
 * reviewing applications and moving them through the hiring pipeline.
 *
 * # Email Side Effects
 *
 * - Submission notifies the applicant (confirmation) and the admin address
 * - A status change notifies the applicant; re-submitting the same status
 *   sends nothing
 */

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::email::templates;
use crate::error::{ApiError, ApiResult};
use crate::jobs::db;
use crate::jobs::db::{ApplicationStatus, JobApplication};
use crate::server::state::AppState;

/// Public application payload
#[derive(Deserialize, Debug)]
pub struct ApplyRequest {
    pub job_opening_id: String,
    pub applicant_name: String,
    pub applicant_email: String,
    pub resume_url: String,
    #[serde(default)]
    pub cover_letter: Option<String>,
}

/// Status update payload
#[derive(Deserialize, Debug)]
pub struct UpdateApplicationRequest {
    pub id: String,
    pub status: String,
}

/// Delete payload
#[derive(Deserialize, Debug)]
pub struct DeleteApplicationRequest {
    pub id: String,
}

/// Submit a job application (public)
///
/// # Errors
///
/// * `400 Bad Request` - opening id, applicant name, applicant email, or
///   resume URL missing
/// * `404 Not Found` - the referenced opening does not exist
pub async fn apply(
    State(state): State<AppState>,
    Json(request): Json<ApplyRequest>,
) -> ApiResult<impl IntoResponse> {
    if request.job_opening_id.is_empty()
        || request.applicant_name.is_empty()
        || request.applicant_email.is_empty()
        || request.resume_url.is_empty()
    {
        return Err(ApiError::validation("Required fields are missing"));
    }

    let opening = db::get_opening_by_id(&state.db, &request.job_opening_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Job opening not found"))?;

    let application = db::create_application(
        &state.db,
        &request.job_opening_id,
        &request.applicant_name,
        &request.applicant_email,
        &request.resume_url,
        request.cover_letter.as_deref(),
    )
    .await?;

    let confirmation = templates::application_received(&application.applicant_name, &opening.title);
    state
        .send_email(
            &[application.applicant_email.clone()],
            &confirmation.subject,
            confirmation.html,
        )
        .await?;

    let notification = templates::application_notification(
        &opening.title,
        &application.applicant_name,
        &application.applicant_email,
        &application.resume_url,
        application.cover_letter.as_deref(),
    );
    state
        .send_admin_email(&notification.subject, notification.html)
        .await?;

    tracing::info!(
        "Application submitted for {} by {}",
        opening.title,
        application.applicant_email
    );

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": "Application submitted successfully",
            "data": application,
        })),
    ))
}

/// List all job applications, most recent first (admin)
pub async fn list_applications(
    State(pool): State<SqlitePool>,
) -> ApiResult<Json<Vec<JobApplication>>> {
    let applications = db::list_applications(&pool).await?;
    Ok(Json(applications))
}

/// Update a job application's status and notify the applicant on change
///
/// # Errors
///
/// * `400 Bad Request` - id or status missing, or status not one of the
///   five pipeline states
/// * `404 Not Found` - no such application
pub async fn update_application(
    State(state): State<AppState>,
    Json(request): Json<UpdateApplicationRequest>,
) -> ApiResult<Json<JobApplication>> {
    if request.id.is_empty() || request.status.is_empty() {
        return Err(ApiError::validation("ID and status are required"));
    }

    let status = ApplicationStatus::parse(&request.status).ok_or_else(|| {
        ApiError::validation(
            "Status must be one of Pending, Reviewed, Interviewed, Hired, Rejected",
        )
    })?;

    let existing = db::get_application_by_id(&state.db, &request.id)
        .await?
        .ok_or_else(|| ApiError::not_found("Job application not found"))?;

    let changed = existing.status != status.as_str();

    db::update_application_status(&state.db, &request.id, status).await?;

    if changed {
        let email = templates::application_status_update(
            &existing.applicant_name,
            &existing.job_title,
            status.as_str(),
        );
        state
            .send_email(
                &[existing.applicant_email.clone()],
                &email.subject,
                email.html,
            )
            .await?;
        tracing::info!(
            "Application {} moved to {} ({} notified)",
            existing.id,
            status.as_str(),
            existing.applicant_email
        );
    }

    let updated = db::get_application_by_id(&state.db, &request.id)
        .await?
        .ok_or_else(|| ApiError::not_found("Job application not found"))?;

    Ok(Json(updated))
}

/// Delete a job application (admin)
pub async fn delete_application(
    State(pool): State<SqlitePool>,
    Json(request): Json<DeleteApplicationRequest>,
) -> ApiResult<Json<serde_json::Value>> {
    if request.id.is_empty() {
        return Err(ApiError::validation("ID is required"));
    }

    db::delete_application(&pool, &request.id).await?;

    Ok(Json(serde_json::json!({ "message": "Job application deleted successfully" })))
}
