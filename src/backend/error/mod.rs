//! Backend Error Module
//!
//! Error types returned by HTTP handlers and their conversion into responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - ApiError and conversions from domain errors
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Example
//!
//! ```rust
//! use play4good::backend::error::ApiError;
//! use axum::http::StatusCode;
//!
//! let err = ApiError::forbidden("You can only modify your own profile");
//! assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::ApiError;
