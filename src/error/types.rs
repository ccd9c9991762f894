/**
 * API Error Types
 *
 * This module defines the error type used by all HTTP handlers and its
 * conversion into an HTTP response.
 *
 * # Error Categories
 *
 * - `Unauthorized` - missing, invalid, or non-admin session
 * - `Validation` - a required field is missing or malformed
 * - `NotFound` - the referenced row does not exist
 * - `Conflict` - a uniqueness constraint would be violated
 * - `Database` / `Hash` / `Token` / `Email` - infrastructure failures,
 *   surfaced to the caller as a generic 500 and logged server-side
 */

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::email::EmailError;

/// Result alias used by handlers and database operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// All errors a request handler can produce.
///
/// Each variant maps to exactly one HTTP status code via `status_code()`.
/// Infrastructure variants carry the underlying error for the server-side
/// log; the response body for those is always the generic message.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing, invalid, or insufficient session
    #[error("Unauthorized")]
    Unauthorized,

    /// Login failure; identical for unknown email and wrong password so the
    /// response cannot be used to enumerate accounts
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// A required field is missing or malformed
    #[error("{0}")]
    Validation(String),

    /// The referenced row does not exist
    #[error("{0}")]
    NotFound(String),

    /// A uniqueness constraint would be violated
    #[error("{0}")]
    Conflict(String),

    /// Database failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing failure
    #[error("password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// Token signing failure
    #[error("token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// Mail delivery failure
    #[error("email error: {0}")]
    Email(#[from] EmailError),
}

impl ApiError {
    /// Create a validation error naming the violated requirement.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Create a conflict error.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized | Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Database(_) | Self::Hash(_) | Self::Token(_) | Self::Email(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Internal detail stays in the server log; the caller only sees a
        // generic message.
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("request failed: {:?}", self);
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        (status, Json(ErrorBody { message })).into_response()
    }
}
