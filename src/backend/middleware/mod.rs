//! Middleware Module
//!
//! Request processing that runs before handler bodies.
//!
//! - **`auth`** - The `Session` extractor gating protected routes, plus the
//!   ownership check
//!
//! # Example
//!
//! ```rust,no_run
//! use play4good::backend::middleware::Session;
//!
//! async fn protected(session: Session) -> String {
//!     format!("hello user {}", session.user_id)
//! }
//! ```

pub mod auth;

pub use auth::{authenticate, Session};
