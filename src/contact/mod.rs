//! Contact messages
//!
//! Public contact form submissions and the admin inbox that manages them.

/// Models and database operations
pub mod db;

/// HTTP handlers
pub mod handlers;

pub use db::ContactMessage;
