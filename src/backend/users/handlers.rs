//! User Profile HTTP Handlers
//!
//! Read, update and delete of a single account. Reads are public; update and
//! delete require a session belonging to the account owner.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::HeaderMap,
    Json,
};
use std::sync::Arc;

use crate::backend::auth::handlers::issue::cookie_headers;
use crate::backend::auth::handlers::types::{MessageResponse, UpdateProfileRequest, UserResponse};
use crate::backend::auth::users::{UserId, UserStore};
use crate::backend::error::ApiError;
use crate::backend::middleware::Session;
use crate::backend::server::state::AppState;

fn user_id(path: Result<Path<UserId>, PathRejection>) -> Result<UserId, ApiError> {
    path.map(|Path(id)| id)
        .map_err(|e| ApiError::validation("id", e.body_text()))
}

/// GET /api/users/{id}
pub async fn get_user(
    State(users): State<Arc<dyn UserStore>>,
    path: Result<Path<UserId>, PathRejection>,
) -> Result<Json<UserResponse>, ApiError> {
    let id = user_id(path)?;
    let user = users
        .find_by_id(id)
        .await
        .map_err(|e| {
            tracing::error!("Database error: {}", e);
            ApiError::from(e)
        })?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(Json(UserResponse::from(user)))
}

/// PUT /api/users/{id}
///
/// Only the owner may update. Each provided field is validated like at signup.
pub async fn update_user(
    State(state): State<AppState>,
    session: Session,
    path: Result<Path<UserId>, PathRejection>,
    payload: Result<Json<UpdateProfileRequest>, JsonRejection>,
) -> Result<Json<UserResponse>, ApiError> {
    let id = user_id(path)?;
    session.require_owner(id)?;

    let Json(request) = payload?;
    let update = request.into_update()?;

    let user = state.users.update_profile(id, update).await.map_err(|e| {
        tracing::warn!("Failed to update user {}: {}", id, e);
        ApiError::from(e)
    })?;

    tracing::info!("User {} updated their profile", id);
    Ok(Json(UserResponse::from(user)))
}

/// DELETE /api/users/{id}
///
/// Removes the account and its token record, then clears the session cookie.
/// Tokens already handed out keep verifying until they expire, but any
/// handler that loads the user answers 404.
pub async fn delete_user(
    State(state): State<AppState>,
    session: Session,
    path: Result<Path<UserId>, PathRejection>,
) -> Result<(HeaderMap, Json<MessageResponse>), ApiError> {
    let id = user_id(path)?;
    session.require_owner(id)?;

    state.token_records.remove(id).await.map_err(|e| {
        tracing::warn!("Failed to remove token record of user {}: {}", id, e);
        ApiError::from(e)
    })?;
    state.users.delete(id).await.map_err(|e| {
        tracing::warn!("Failed to delete user {}: {}", id, e);
        ApiError::from(e)
    })?;

    tracing::info!("User {} deleted their account", id);
    Ok((
        cookie_headers(state.cookies.clear()),
        Json(MessageResponse::new("User deleted successfully")),
    ))
}
