/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * The state is deliberately small: a database pool and an optional mailer.
 * Requests share no other in-process mutable state, so concurrent requests
 * are isolated by the database's own transactional guarantees.
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::email::{EmailError, Mailer};

/// Application state shared by all request handlers
///
/// # Fields
///
/// * `db` - SQLite connection pool
/// * `mailer` - SMTP mailer; `None` when email is not configured, in which
///   case sends are logged and skipped
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,

    /// Optional SMTP mailer
    pub mailer: Option<Mailer>,
}

impl AppState {
    /// Deliver one HTML message to the given recipients.
    ///
    /// A no-op (logged) when the mailer is not configured; a delivery
    /// failure on a configured mailer is returned to the caller.
    pub async fn send_email(
        &self,
        to: &[String],
        subject: &str,
        html: String,
    ) -> Result<(), EmailError> {
        match &self.mailer {
            Some(mailer) => mailer.send(to, subject, html).await,
            None => {
                tracing::warn!(
                    "mailer not configured, skipping email \"{}\" to {} recipient(s)",
                    subject,
                    to.len()
                );
                Ok(())
            }
        }
    }

    /// Deliver a notification to the configured admin address.
    pub async fn send_admin_email(&self, subject: &str, html: String) -> Result<(), EmailError> {
        match &self.mailer {
            Some(mailer) => {
                let to = [mailer.admin_email().to_string()];
                mailer.send(&to, subject, html).await
            }
            None => {
                tracing::warn!("mailer not configured, skipping admin email \"{}\"", subject);
                Ok(())
            }
        }
    }
}

/// Implement FromRef for the database pool
///
/// This allows Axum handlers that only touch the database to extract
/// `SqlitePool` directly from `AppState`.
impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db.clone()
    }
}

/// Implement FromRef for the optional mailer
impl FromRef<AppState> for Option<Mailer> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.mailer.clone()
    }
}
