/**
 * Get Current User Handler
 *
 * GET /api/me returns the account behind the request's session. The token
 * may arrive in the `Authorization: Bearer` header or the `token` cookie; the
 * `Session` extractor rejects the request with 401 before this runs if
 * neither yields a valid token.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::error::ApiError;
use crate::backend::middleware::Session;
use crate::backend::server::state::AppState;

/// Get current user handler
///
/// # Errors
///
/// * `401 Unauthorized` - No token, or the token is malformed, forged or expired
/// * `404 Not Found` - The token is valid but the account was deleted
/// * `500 Internal Server Error` - Store failure
pub async fn get_me(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state
        .users
        .find_by_id(session.user_id)
        .await
        .map_err(|e| {
            tracing::error!("Database error: {}", e);
            ApiError::from(e)
        })?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", session.user_id);
            ApiError::not_found("User not found")
        })?;

    Ok(Json(UserResponse::from(user)))
}
