//! Play4Good - Fundraising Platform API
//!
//! Server-side library for the Play4Good fundraising platform. It provides
//! user accounts and the token-based authentication that every protected
//! endpoint relies on.
//!
//! # Module Structure
//!
//! - **`shared`** - Validation errors and request field checks
//! - **`backend`** - Axum HTTP server
//!   - Password hashing (bcrypt) and JWT issuance/verification
//!   - Cookie and bearer-header session propagation
//!   - The `Session` extractor that gates protected operations
//!   - PostgreSQL and in-memory credential stores
//!
//! # Usage
//!
//! ```rust,no_run
//! use play4good::backend::server::{config::ServerConfig, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::SharedError` for validation failures
//! - Domain errors per component (`StoreError`, `TokenError`, `PasswordError`)
//! - `backend::error::ApiError` maps all of them onto HTTP responses

/// Shared types and validation
pub mod shared;

/// Backend server-side code
pub mod backend;
