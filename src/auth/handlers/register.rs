/**
 * Registration Handler
 *
 * This module implements the user registration handler for
 * POST /api/auth/register.
 *
 * # Registration Process
 *
 * 1. Validate email and password are present
 * 2. Check if a user with this email already exists
 * 3. Hash password using bcrypt
 * 4. Create user with the default `user` role
 * 5. Issue a session token and set the session cookie
 * 6. Send the welcome email
 *
 * # Security
 *
 * - Passwords are hashed using bcrypt with DEFAULT_COST
 * - Passwords are never returned in responses
 * - The session cookie is http-only with a one-hour expiry
 */

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::StatusCode;
use axum::response::{AppendHeaders, IntoResponse, Json};
use bcrypt::{hash, DEFAULT_COST};

use crate::auth::handlers::types::{AuthResponse, RegisterRequest, UserResponse};
use crate::auth::sessions::{create_token, session_cookie};
use crate::auth::users::{create_user, get_user_by_email};
use crate::email::templates;
use crate::error::{ApiError, ApiResult};
use crate::server::state::AppState;

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - email or password missing
/// * `409 Conflict` - a user with this email already exists
/// * `500 Internal Server Error` - hashing, store, or mail failure
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> ApiResult<impl IntoResponse> {
    if request.email.is_empty() || request.password.is_empty() {
        return Err(ApiError::validation("Email and password are required"));
    }

    tracing::info!("Registration request for {}", request.email);

    if get_user_by_email(&state.db, &request.email).await?.is_some() {
        tracing::warn!("Registration rejected, email already exists: {}", request.email);
        return Err(ApiError::conflict("User with this email already exists"));
    }

    let password_hash = hash(&request.password, DEFAULT_COST)?;

    let user = create_user(
        &state.db,
        &request.email,
        &password_hash,
        request.name.as_deref(),
        "user",
    )
    .await?;

    let token = create_token(&user.id, &user.email, &user.role)?;
    let cookie = session_cookie(&token);

    let email = templates::welcome(user.name.as_deref(), &user.email);
    state
        .send_email(&[user.email.clone()], &email.subject, email.html)
        .await?;

    tracing::info!("User registered successfully: {}", user.email);

    Ok((
        StatusCode::CREATED,
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(AuthResponse {
            message: "User registered successfully".to_string(),
            user: UserResponse::from(user),
        }),
    ))
}
