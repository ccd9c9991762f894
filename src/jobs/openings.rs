/**
 * Job Opening Handlers
 *
 * Admin CRUD over job openings, plus the public read-only feed the
 * application page consumes.
 */

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::error::{ApiError, ApiResult};
use crate::jobs::db;
use crate::jobs::db::JobOpening;

/// Create payload
#[derive(Deserialize, Debug)]
pub struct CreateOpeningRequest {
    pub title: String,
    pub description: String,
    pub location: String,
    pub department: String,
    #[serde(default)]
    pub salary_range: Option<String>,
}

/// Update payload
#[derive(Deserialize, Debug)]
pub struct UpdateOpeningRequest {
    pub id: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub department: String,
    #[serde(default)]
    pub salary_range: Option<String>,
}

/// Delete payload
#[derive(Deserialize, Debug)]
pub struct DeleteOpeningRequest {
    pub id: String,
}

/// List job openings, most recently posted first
///
/// Serves both the admin dashboard and the public careers feed.
pub async fn list_openings(State(pool): State<SqlitePool>) -> ApiResult<Json<Vec<JobOpening>>> {
    let openings = db::list_openings(&pool).await?;
    Ok(Json(openings))
}

/// Create a job opening
///
/// # Errors
///
/// * `400 Bad Request` - title, description, location, or department missing
pub async fn create_opening(
    State(pool): State<SqlitePool>,
    Json(request): Json<CreateOpeningRequest>,
) -> ApiResult<impl IntoResponse> {
    if request.title.is_empty()
        || request.description.is_empty()
        || request.location.is_empty()
        || request.department.is_empty()
    {
        return Err(ApiError::validation(
            "Title, description, location, and department are required",
        ));
    }

    let opening = db::create_opening(
        &pool,
        &request.title,
        &request.description,
        &request.location,
        &request.department,
        request.salary_range.as_deref(),
    )
    .await?;

    tracing::info!("Job opening created: {} ({})", opening.title, opening.id);

    Ok((StatusCode::CREATED, Json(opening)))
}

/// Update a job opening
///
/// # Errors
///
/// * `400 Bad Request` - id or a required field missing
pub async fn update_opening(
    State(pool): State<SqlitePool>,
    Json(request): Json<UpdateOpeningRequest>,
) -> ApiResult<Json<JobOpening>> {
    if request.id.is_empty()
        || request.title.is_empty()
        || request.description.is_empty()
        || request.location.is_empty()
        || request.department.is_empty()
    {
        return Err(ApiError::validation(
            "ID, title, description, location, and department are required",
        ));
    }

    let opening = db::update_opening(
        &pool,
        &request.id,
        &request.title,
        &request.description,
        &request.location,
        &request.department,
        request.salary_range.as_deref(),
    )
    .await?;

    Ok(Json(opening))
}

/// Delete a job opening and, through the schema cascade, its applications
pub async fn delete_opening(
    State(pool): State<SqlitePool>,
    Json(request): Json<DeleteOpeningRequest>,
) -> ApiResult<Json<serde_json::Value>> {
    if request.id.is_empty() {
        return Err(ApiError::validation("ID is required"));
    }

    db::delete_opening(&pool, &request.id).await?;

    Ok(Json(serde_json::json!({ "message": "Job opening deleted successfully" })))
}
