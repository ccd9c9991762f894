//! Common test utilities and helpers
//!
//! Provides a migrated in-memory database, a configured test server, and
//! session helpers shared by the integration suites.

use std::str::FromStr;

use axum_test::TestServer;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use northbridge::auth::sessions::create_token;
use northbridge::auth::users::{create_user, User};
use northbridge::routes::create_router;
use northbridge::server::AppState;

/// Create a migrated in-memory test database
///
/// The pool is capped at one connection so every query sees the same
/// in-memory database.
pub async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("Failed to parse sqlite options")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test database pool");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Spin up a test server over a fresh database
///
/// The mailer is left unconfigured, so notification sends become logged
/// no-ops and requests succeed without an SMTP server.
pub async fn test_server() -> (TestServer, SqlitePool) {
    let pool = test_pool().await;
    let state = AppState {
        db: pool.clone(),
        mailer: None,
    };
    let server = TestServer::new(create_router(state)).expect("Failed to start test server");
    (server, pool)
}

/// Create a user with the given role and password
pub async fn create_test_user(pool: &SqlitePool, email: &str, password: &str, role: &str) -> User {
    let password_hash = bcrypt::hash(password, bcrypt::DEFAULT_COST).expect("Failed to hash");
    create_user(pool, email, &password_hash, None, role)
        .await
        .expect("Failed to create test user")
}

/// Create an admin account and return a `Cookie` header value holding a
/// valid session for it
pub async fn admin_cookie(pool: &SqlitePool) -> String {
    let admin = create_test_user(pool, "admin@example.com", "adminpass123", "admin").await;
    let token = create_token(&admin.id, &admin.email, &admin.role).expect("Failed to sign token");
    format!("token={}", token)
}

/// Create a regular account and return a `Cookie` header value for it
pub async fn user_cookie(pool: &SqlitePool) -> String {
    let user = create_test_user(pool, "user@example.com", "userpass123", "user").await;
    let token = create_token(&user.id, &user.email, &user.role).expect("Failed to sign token");
    format!("token={}", token)
}
