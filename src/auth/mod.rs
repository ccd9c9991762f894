//! Authentication Module
//!
//! This module handles user authentication, registration, and session
//! management.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports
//! ├── users.rs        - User model and database operations
//! ├── sessions.rs     - JWT tokens and the session cookie
//! └── handlers/       - HTTP handlers
//!     ├── types.rs    - Request/response types
//!     ├── register.rs - Self-registration
//!     ├── login.rs    - Login
//!     ├── logout.rs   - Logout
//!     ├── status.rs   - Session status probe
//!     └── admin.rs    - Admin user CRUD
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register/Login**: credentials verified, JWT issued, session cookie set
//! 2. **Guarded request**: cookie token re-verified, role checked
//! 3. **Logout**: cookie cleared (token stays valid until natural expiry)
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens expire after one hour; there is no refresh mechanism
//! - Invalid credentials return a uniform 401 (no account enumeration)

/// HTTP handlers for authentication endpoints
pub mod handlers;

/// JWT token and session cookie management
pub mod sessions;

/// User model and database operations
pub mod users;

pub use handlers::types::{LoginRequest, RegisterRequest, StatusResponse, UserResponse};
pub use handlers::{login, logout, register, status};
