/**
 * Authentication Handler Types
 *
 * Request and response types shared by the authentication handlers and the
 * admin user management handlers.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::users::User;

/// Registration request
#[derive(Deserialize, Serialize, Debug)]
pub struct RegisterRequest {
    /// User's email address
    pub email: String,
    /// User's password (hashed before storage)
    pub password: String,
    /// Optional display name
    #[serde(default)]
    pub name: Option<String>,
}

/// Login request
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    /// User's email address
    pub email: String,
    /// User's password (verified against the stored hash)
    pub password: String,
}

/// Public user projection
///
/// The only user shape ever returned by the API; the password hash never
/// leaves the database layer.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserResponse {
    /// User's unique ID
    pub id: String,
    /// User's email address
    pub email: String,
    /// Display name, if set
    pub name: Option<String>,
    /// Role (`user` or `admin`)
    pub role: String,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id,
            email: user.email,
            name: user.name,
            role: user.role,
            created_at: user.created_at,
        }
    }
}

/// Response for register and login
#[derive(Serialize, Debug)]
pub struct AuthResponse {
    /// Human-readable confirmation
    pub message: String,
    /// The authenticated user
    pub user: UserResponse,
}

/// Response for the session status probe; `user` is null when there is no
/// valid session
#[derive(Serialize, Debug)]
pub struct StatusResponse {
    pub user: Option<UserResponse>,
}

/// Admin request to create a user
#[derive(Deserialize, Serialize, Debug)]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub name: Option<String>,
    pub role: String,
}

/// Admin request to update a user
///
/// `password` is optional; when present and non-empty it is re-hashed and
/// replaces the stored hash.
#[derive(Deserialize, Serialize, Debug)]
pub struct UpdateUserRequest {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    pub role: String,
    #[serde(default)]
    pub password: Option<String>,
}
