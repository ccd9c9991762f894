/**
 * Login Handler
 *
 * This module implements the user authentication handler for
 * POST /api/auth/login.
 *
 * # Security
 *
 * - Password verification uses bcrypt
 * - Unknown email and wrong password return the identical 401 body, so the
 *   endpoint cannot be used to enumerate accounts
 * - Passwords are never logged or returned in responses
 */

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::response::{AppendHeaders, IntoResponse, Json};
use bcrypt::verify;
use sqlx::SqlitePool;

use crate::auth::handlers::types::{AuthResponse, LoginRequest, UserResponse};
use crate::auth::sessions::{create_token, session_cookie};
use crate::auth::users::get_user_by_email;
use crate::error::{ApiError, ApiResult};

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - email or password missing
/// * `401 Unauthorized` - unknown email or wrong password (uniform body)
/// * `500 Internal Server Error` - store or token failure
pub async fn login(
    State(pool): State<SqlitePool>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<impl IntoResponse> {
    if request.email.is_empty() || request.password.is_empty() {
        return Err(ApiError::validation("Email and password are required"));
    }

    tracing::info!("Login request for {}", request.email);

    let user = get_user_by_email(&pool, &request.email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Login failed, no such user: {}", request.email);
            ApiError::InvalidCredentials
        })?;

    let valid = verify(&request.password, &user.password_hash)?;
    if !valid {
        tracing::warn!("Login failed, wrong password for {}", request.email);
        return Err(ApiError::InvalidCredentials);
    }

    let token = create_token(&user.id, &user.email, &user.role)?;
    let cookie = session_cookie(&token);

    tracing::info!("User logged in successfully: {}", user.email);

    Ok((
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(AuthResponse {
            message: "Login successful".to_string(),
            user: UserResponse::from(user),
        }),
    ))
}
