//! Authentication Handlers Module
//!
//! This module contains all HTTP handlers for authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── issue.rs    - Token policy and Set-Cookie helpers
//! ├── signup.rs   - User registration handler
//! ├── login.rs    - User authentication handler
//! ├── logout.rs   - Session cookie removal
//! └── me.rs       - Get current user handler
//! ```
//!
//! # Handlers
//!
//! - **`signup`** - POST /api/signup - User registration
//! - **`login`** - POST /api/login - User authentication
//! - **`logout`** - POST /api/logout - Clear the session cookie
//! - **`get_me`** - GET /api/me - Get current user info
//!
//! # Example
//!
//! ```rust,no_run
//! use play4good::backend::auth::handlers::{get_me, login, logout, signup};
//! use play4good::backend::server::AppState;
//! use axum::{routing::get, routing::post, Router};
//!
//! let router: Router<AppState> = Router::new()
//!     .route("/api/signup", post(signup))
//!     .route("/api/login", post(login))
//!     .route("/api/logout", post(logout))
//!     .route("/api/me", get(get_me));
//! ```

/// Request and response types
pub mod types;

/// Token issuance shared by signup and login
pub mod issue;

/// Signup handler
pub mod signup;

/// Login handler
pub mod login;

/// Logout handler
pub mod logout;

/// Get current user handler
pub mod me;

pub use types::{AuthResponse, LoginRequest, MessageResponse, SignupRequest, UserResponse};

pub use login::login;
pub use logout::logout;
pub use me::get_me;
pub use signup::signup;
