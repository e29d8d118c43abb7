//! Backend Module
//!
//! This module contains all server-side code for the Play4Good API: an Axum
//! HTTP server with account management and token-based authentication.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, initialization
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Password hashing, JWT tokens, stores, auth handlers
//! - **`users`** - Profile read, update and delete
//! - **`middleware`** - The `Session` extractor gating protected routes
//! - **`error`** - `ApiError` and its HTTP rendering
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── users/          - Profile endpoints
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds the user and token-record stores behind trait objects
//! plus the immutable hasher, token issuer and cookie settings, all in `Arc`.
//! The PostgreSQL store relies on the pool for concurrency; the in-memory
//! store guards its tables with a `tokio::sync::RwLock`.
//!
//! # Error Handling
//!
//! Handlers return `Result<_, ApiError>`. Domain errors convert with `?` and
//! 5xx detail stays in the server log.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Profile endpoints
pub mod users;

/// Middleware for request processing
pub mod middleware;

pub use error::ApiError;
pub use server::create_app;
