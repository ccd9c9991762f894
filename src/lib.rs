//! Northbridge - Main Library
//!
//! Northbridge is the backend for the Northbridge Solutions company site:
//! the public marketing endpoints, a cookie/JWT authentication layer, the
//! admin dashboard API, and transactional email notifications.
//!
//! # Overview
//!
//! This library provides:
//! - Public endpoints: contact form, job application, job and announcement
//!   feeds, session status
//! - Authentication: registration, login, logout; sessions carried in an
//!   http-only cookie holding a signed one-hour token
//! - Admin API: CRUD over users, job openings, job applications,
//!   announcements, and contact messages, gated by a stateless role check
//! - Email: transactional notifications on registration, applications,
//!   status changes, announcements, and contact submissions
//!
//! # Module Structure
//!
//! ```text
//! src/
//! ├── server/         - Initialization, configuration, application state
//! ├── routes/         - Route configuration (public and admin)
//! ├── auth/           - Users, sessions, auth and user-management handlers
//! ├── middleware/     - Admin route guard
//! ├── jobs/           - Job openings and applications
//! ├── announcements/  - Company announcements
//! ├── contact/        - Contact messages
//! ├── email/          - SMTP mailer and notification templates
//! └── error/          - API error taxonomy
//! ```
//!
//! # Concurrency
//!
//! Requests are independent, short-lived cycles sharing only the database
//! pool and the mailer. The application layer holds no other mutable
//! state, so isolation comes from the database's transactional guarantees.

/// Company announcements
pub mod announcements;

/// Authentication and user management
pub mod auth;

/// Contact messages
pub mod contact;

/// SMTP mailer and notification templates
pub mod email;

/// API error types
pub mod error;

/// Job openings and applications
pub mod jobs;

/// Middleware for request processing
pub mod middleware;

/// Route configuration
pub mod routes;

/// Server setup and configuration
pub mod server;

// Re-export commonly used types
pub use error::{ApiError, ApiResult};
pub use server::{create_app, AppState};
