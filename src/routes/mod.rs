//! Route configuration
//!
//! Route assembly is split by audience: the public API surface and the
//! admin surface behind the session guard.

/// Admin routes (guarded)
pub mod admin_routes;

/// Public API routes
pub mod api_routes;

/// Top-level router assembly
pub mod router;

pub use router::create_router;
