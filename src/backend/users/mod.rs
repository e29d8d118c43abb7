//! Users Module
//!
//! Profile endpoints for existing accounts: public read, owner-only update
//! and delete.

pub mod handlers;

pub use handlers::*;
