//! HTTP handlers for authentication and user management
//!
//! The public quartet (`register`, `login`, `logout`, `status`) plus the
//! admin-only user CRUD.

/// Admin user management handlers
pub mod admin;

/// User login handler
pub mod login;

/// Session clear handler
pub mod logout;

/// User registration handler
pub mod register;

/// Session status handler
pub mod status;

/// Request/response types
pub mod types;

pub use login::login;
pub use logout::logout;
pub use register::register;
pub use status::status;
