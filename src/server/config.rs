/**
 * Server Configuration
 *
 * This module handles loading of server configuration: the SQLite
 * connection pool, schema migrations, and the optional admin account
 * bootstrap.
 *
 * # Configuration Sources
 *
 * Configuration is loaded from environment variables, with sensible
 * defaults for local development.
 *
 * # Error Handling
 *
 * The database is a required service: a connection or migration failure
 * aborts startup. The admin bootstrap is best-effort and only logs on
 * failure.
 */

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::auth::users::{create_user, get_user_by_email};

/// Create the database connection pool and run migrations
///
/// This function:
/// 1. Reads `DATABASE_URL` from environment (default: local `northbridge.db`)
/// 2. Opens a SQLite pool with foreign keys enforced (the schema relies on
///    `ON DELETE CASCADE` for job applications)
/// 3. Runs the bundled migrations
///
/// # Errors
///
/// Any connection or migration failure is returned and aborts startup.
pub async fn load_database() -> Result<SqlitePool, sqlx::Error> {
    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:northbridge.db".to_string());

    tracing::info!("Connecting to database...");

    let options = SqliteConnectOptions::from_str(&database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new().connect_with(options).await?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to run database migrations: {:?}", e);
            sqlx::Error::Migrate(Box::new(e))
        })?;

    tracing::info!("Database ready");

    Ok(pool)
}

/// Create the admin account on first boot
///
/// When `ADMIN_EMAIL` and `ADMIN_PASSWORD` are both set and no user with
/// that email exists yet, an admin account is created so the dashboard is
/// reachable on a fresh database. Failures are logged and do not prevent
/// startup.
pub async fn bootstrap_admin(pool: &SqlitePool) {
    let (email, password) = match (
        std::env::var("ADMIN_EMAIL"),
        std::env::var("ADMIN_PASSWORD"),
    ) {
        (Ok(email), Ok(password)) => (email, password),
        _ => {
            tracing::debug!("ADMIN_EMAIL/ADMIN_PASSWORD not set, skipping admin bootstrap");
            return;
        }
    };

    match get_user_by_email(pool, &email).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            let hash = match bcrypt::hash(&password, bcrypt::DEFAULT_COST) {
                Ok(hash) => hash,
                Err(e) => {
                    tracing::error!("Failed to hash bootstrap admin password: {:?}", e);
                    return;
                }
            };
            match create_user(pool, &email, &hash, None, "admin").await {
                Ok(user) => tracing::info!("Bootstrapped admin account: {}", user.email),
                Err(e) => tracing::error!("Failed to create bootstrap admin: {:?}", e),
            }
        }
        Err(e) => tracing::error!("Admin bootstrap lookup failed: {:?}", e),
    }
}
