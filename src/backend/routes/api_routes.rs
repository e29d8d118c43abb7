/**
 * API Route Handlers
 *
 * Every JSON endpoint lives under `/api`.
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /api/signup` - User registration
 * - `POST /api/login` - User login
 * - `POST /api/logout` - Clear the session cookie
 * - `GET /api/me` - Get current user info
 *
 * ## Users
 * - `GET /api/users/{id}` - Public profile
 * - `PUT /api/users/{id}` - Update own profile
 * - `DELETE /api/users/{id}` - Delete own account
 */

use axum::routing::{get, post};
use axum::Router;

use crate::backend::auth::{get_me, login, logout, signup};
use crate::backend::server::state::AppState;
use crate::backend::users::{delete_user, get_user, update_user};

/// Configure API routes
///
/// # Authentication
///
/// Routes that take a `Session` argument reject requests without a valid
/// token before the handler runs:
/// - `/api/me`
/// - `PUT` and `DELETE /api/users/{id}` (which also check ownership)
///
/// Everything else is public.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Authentication endpoints
        .route("/api/signup", post(signup))
        .route("/api/login", post(login))
        .route("/api/logout", post(logout))
        .route("/api/me", get(get_me))
        // Profile endpoints
        .route(
            "/api/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
}
