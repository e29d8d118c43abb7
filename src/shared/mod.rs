//! Shared Module
//!
//! Types that do not depend on the HTTP server: validation errors and the
//! field checks applied to incoming requests.

/// Shared error types
pub mod error;

/// Request field validation
pub mod validation;

pub use error::SharedError;
