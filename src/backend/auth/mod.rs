//! Authentication Module
//!
//! This module handles user registration, login and session management.
//! It provides HTTP handlers for the authentication endpoints, the stores
//! behind them and the JWT tokens that carry identity between requests.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and the UserStore trait
//! ├── tokens.rs       - Token records, TokenPolicy and the TokenRecordStore trait
//! ├── db.rs           - PostgreSQL implementation of both stores
//! ├── memory.rs       - In-process implementation of both stores
//! ├── password.rs     - bcrypt hashing and verification
//! ├── sessions.rs     - JWT issuing and verification
//! ├── cookies.rs      - Session cookie rendering and token extraction
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: details validated → password hashed → user created → token
//!    returned and set as cookie
//! 2. **Login**: password verified → stored or fresh token returned and set as cookie
//! 3. **Me**: token from header or cookie verified → user info returned
//! 4. **Logout**: cookie cleared; the token is not revoked
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are stateless HS256 JWTs expiring after 24 hours by default
//! - Invalid credentials return 401 with one message for every cause

/// User data model and store trait
pub mod users;

/// Token records and issuance policy
pub mod tokens;

/// PostgreSQL store
pub mod db;

/// In-memory store
pub mod memory;

/// Password hashing
pub mod password;

/// JWT token generation and validation
pub mod sessions;

/// Session cookie handling
pub mod cookies;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::types::{AuthResponse, LoginRequest, SignupRequest, UserResponse};
pub use handlers::{get_me, login, logout, signup};
