/**
 * User Model and Database Operations
 *
 * This module handles user data and database operations.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// User struct representing a user in the database
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID string)
    pub id: String,
    /// User email address (unique)
    pub email: String,
    /// Hashed password (bcrypt); never serialized into API responses
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Display name (optional)
    pub name: Option<String>,
    /// Role (`user` or `admin`)
    pub role: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Create a new user
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `email` - User email
/// * `password_hash` - Hashed password
/// * `name` - Optional display name
/// * `role` - `user` or `admin`
///
/// # Returns
/// Created user or error
pub async fn create_user(
    pool: &SqlitePool,
    email: &str,
    password_hash: &str,
    name: Option<&str>,
    role: &str,
) -> Result<User, sqlx::Error> {
    let id = uuid::Uuid::new_v4().to_string();
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, email, password_hash, name, role, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, email, password_hash, name, role, created_at
        "#,
    )
    .bind(&id)
    .bind(email)
    .bind(password_hash)
    .bind(name)
    .bind(role)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get user by email
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, password_hash, name, role, created_at
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Get user by ID
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_id(pool: &SqlitePool, id: &str) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, password_hash, name, role, created_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// List all users, most recently created first
pub async fn list_users(pool: &SqlitePool) -> Result<Vec<User>, sqlx::Error> {
    let users = sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, password_hash, name, role, created_at
        FROM users
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(users)
}

/// List every user email address (announcement broadcast recipients)
pub async fn list_user_emails(pool: &SqlitePool) -> Result<Vec<String>, sqlx::Error> {
    let emails = sqlx::query_scalar::<_, String>("SELECT email FROM users")
        .fetch_all(pool)
        .await?;

    Ok(emails)
}

/// Update a user's profile fields
///
/// The password hash is replaced only when a new one is supplied.
///
/// # Returns
/// Updated user or error
pub async fn update_user(
    pool: &SqlitePool,
    id: &str,
    email: &str,
    name: Option<&str>,
    role: &str,
    password_hash: Option<&str>,
) -> Result<User, sqlx::Error> {
    let user = match password_hash {
        Some(hash) => {
            sqlx::query_as::<_, User>(
                r#"
                UPDATE users
                SET email = $1, name = $2, role = $3, password_hash = $4
                WHERE id = $5
                RETURNING id, email, password_hash, name, role, created_at
                "#,
            )
            .bind(email)
            .bind(name)
            .bind(role)
            .bind(hash)
            .bind(id)
            .fetch_one(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, User>(
                r#"
                UPDATE users
                SET email = $1, name = $2, role = $3
                WHERE id = $4
                RETURNING id, email, password_hash, name, role, created_at
                "#,
            )
            .bind(email)
            .bind(name)
            .bind(role)
            .bind(id)
            .fetch_one(pool)
            .await?
        }
    };

    Ok(user)
}

/// Delete a user by ID
pub async fn delete_user(pool: &SqlitePool, id: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}
