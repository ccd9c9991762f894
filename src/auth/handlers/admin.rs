/**
 * Admin User Management Handlers
 *
 * CRUD over user accounts for the admin dashboard. All four handlers sit
 * behind the admin route guard; they never re-expose the password hash.
 */

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use bcrypt::{hash, DEFAULT_COST};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::auth::handlers::types::{CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::auth::users;
use crate::email::templates;
use crate::error::{ApiError, ApiResult};
use crate::server::state::AppState;

/// Delete payload
#[derive(Deserialize, Debug)]
pub struct DeleteUserRequest {
    pub id: String,
}

fn validate_role(role: &str) -> ApiResult<()> {
    match role {
        "user" | "admin" => Ok(()),
        _ => Err(ApiError::validation("Role must be 'user' or 'admin'")),
    }
}

/// List all users, most recently created first
pub async fn list_users(State(pool): State<SqlitePool>) -> ApiResult<Json<Vec<UserResponse>>> {
    let users = users::list_users(&pool).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Create a user with an explicit role and notify them by email
///
/// # Errors
///
/// * `400 Bad Request` - email, password, or role missing, or role invalid
/// * `409 Conflict` - a user with this email already exists
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> ApiResult<impl IntoResponse> {
    if request.email.is_empty() || request.password.is_empty() || request.role.is_empty() {
        return Err(ApiError::validation("Email, password, and role are required"));
    }
    validate_role(&request.role)?;

    if users::get_user_by_email(&state.db, &request.email).await?.is_some() {
        return Err(ApiError::conflict("User with this email already exists"));
    }

    let password_hash = hash(&request.password, DEFAULT_COST)?;

    let user = users::create_user(
        &state.db,
        &request.email,
        &password_hash,
        request.name.as_deref(),
        &request.role,
    )
    .await?;

    let email = templates::account_created(user.name.as_deref(), &user.email, &user.role);
    state
        .send_email(&[user.email.clone()], &email.subject, email.html)
        .await?;

    tracing::info!("Admin created user {} with role {}", user.email, user.role);

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// Update a user; the password is re-hashed only when a new one is supplied
///
/// # Errors
///
/// * `400 Bad Request` - id, email, or role missing, or role invalid
pub async fn update_user(
    State(pool): State<SqlitePool>,
    Json(request): Json<UpdateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    if request.id.is_empty() || request.email.is_empty() || request.role.is_empty() {
        return Err(ApiError::validation("ID, email, and role are required"));
    }
    validate_role(&request.role)?;

    let password_hash = match request.password.as_deref() {
        Some(password) if !password.is_empty() => Some(hash(password, DEFAULT_COST)?),
        _ => None,
    };

    let user = users::update_user(
        &pool,
        &request.id,
        &request.email,
        request.name.as_deref(),
        &request.role,
        password_hash.as_deref(),
    )
    .await?;

    Ok(Json(UserResponse::from(user)))
}

/// Delete a user by id
pub async fn delete_user(
    State(pool): State<SqlitePool>,
    Json(request): Json<DeleteUserRequest>,
) -> ApiResult<Json<serde_json::Value>> {
    if request.id.is_empty() {
        return Err(ApiError::validation("ID is required"));
    }

    users::delete_user(&pool, &request.id).await?;

    Ok(Json(serde_json::json!({ "message": "User deleted successfully" })))
}
