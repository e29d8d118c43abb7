//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - An in-memory application driven through `tower::ServiceExt::oneshot`
//! - Request builders and seeded accounts
//! - Custom assertion macros
//! - PostgreSQL fixtures for the `#[ignore]`d database tests

pub mod auth_helpers;

// Re-export commonly used utilities
pub use auth_helpers::*;
