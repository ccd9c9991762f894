//! Server Setup
//!
//! This module contains server initialization, configuration loading, and
//! application state.
//!
//! - **`config`** - database pool, migrations, admin bootstrap
//! - **`init`** - application assembly (`create_app`)
//! - **`state`** - shared `AppState`

/// Configuration loading
pub mod config;

/// Application assembly
pub mod init;

/// Shared application state
pub mod state;

pub use init::create_app;
pub use state::AppState;
