//! API error types
//!
//! This module defines the error taxonomy shared by every HTTP handler.
//! Errors convert directly into JSON responses, so handlers can bubble
//! failures with `?` instead of mapping status codes by hand.

/// Error enum and response conversion
pub mod types;

pub use types::{ApiError, ApiResult};
