//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation, CORS, tracing, fallback
//! └── api_routes.rs   - API endpoint registration
//! ```
//!
//! # Route Organization
//!
//! 1. **Healthcheck** - `GET /api/healthcheck`
//! 2. **API Routes** - Authentication and user profiles
//! 3. **Fallback Handler** - JSON 404 for anything else

/// Main router creation
pub mod router;

/// API route registration
pub mod api_routes;

pub use router::create_router;
