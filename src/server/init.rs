/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server:
 * state creation, database loading, mailer configuration, and route
 * assembly.
 *
 * # Initialization Process
 *
 * 1. Open the database pool and run migrations
 * 2. Bootstrap the admin account if configured and absent
 * 3. Configure the SMTP mailer (optional service)
 * 4. Create and configure the router
 */

use axum::Router;

use crate::email::Mailer;
use crate::routes::router::create_router;
use crate::server::config::{bootstrap_admin, load_database};
use crate::server::state::AppState;

/// Create and configure the Axum application
///
/// # Returns
///
/// Configured Axum Router ready to serve requests, or the database error
/// that prevented startup.
///
/// # Error Handling
///
/// - Missing mailer configuration: server continues with email disabled
/// - Database or migration failure: startup aborts
pub async fn create_app() -> Result<Router, sqlx::Error> {
    tracing::info!("Initializing Northbridge backend server");

    let db = load_database().await?;

    bootstrap_admin(&db).await;

    let mailer = Mailer::from_env();

    let app_state = AppState { db, mailer };

    Ok(create_router(app_state))
}
