/**
 * Signup Handler
 *
 * This module implements the user registration handler for POST /api/signup.
 *
 * # Registration Process
 *
 * 1. Validate username, email, password, names and avatar URL
 * 2. Reject an email that is already registered
 * 3. Hash the password with bcrypt on the blocking pool
 * 4. Create the user (a racing duplicate still surfaces as 409 from the store)
 * 5. Issue a token under the configured token policy; if that fails the new
 *    account is deleted again so the email stays free for a retry
 * 6. Return 201 with the user, the token and the session cookie
 *
 * # Security
 *
 * - Passwords over 72 bytes are rejected rather than truncated
 * - Neither the password nor the hash appears in responses or logs
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderMap, StatusCode},
    response::Json,
};

use crate::backend::auth::handlers::issue::{cookie_headers, session_token};
use crate::backend::auth::handlers::types::{AuthResponse, SignupRequest, UserResponse};
use crate::backend::auth::password::hash_blocking;
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;

/// Sign up handler
///
/// # Arguments
///
/// * `State(state)` - Application state
/// * `payload` - Signup request, or the JSON rejection when the body is malformed
///
/// # Returns
///
/// `201 Created` with the user fields, the token and a `Set-Cookie` header
///
/// # Errors
///
/// * `400 Bad Request` - Malformed body or a field failing validation
/// * `409 Conflict` - Email or username already registered
/// * `500 Internal Server Error` - Hashing, store or signing failure
///
/// # Example Request
///
/// ```http
/// POST /api/signup HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "username": "ada",
///   "email": "ada@example.com",
///   "password": "correct horse",
///   "first_name": "Ada",
///   "last_name": "Lovelace"
/// }
/// ```
pub async fn signup(
    State(state): State<AppState>,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<(StatusCode, HeaderMap, Json<AuthResponse>), ApiError> {
    let Json(request) = payload?;
    tracing::info!("Signup request for username: {}, email: {}", request.username, request.email);

    request.validate().map_err(|e| {
        tracing::warn!("Signup validation failed: {}", e);
        ApiError::from(e)
    })?;

    let existing = state.users.find_by_email(request.email.trim()).await.map_err(|e| {
        tracing::error!("Failed to look up email: {}", e);
        ApiError::from(e)
    })?;
    if existing.is_some() {
        tracing::warn!("Email already exists: {}", request.email);
        return Err(ApiError::Conflict("Email already registered".to_string()));
    }

    let password_hash = hash_blocking(state.hasher.clone(), request.password.clone())
        .await
        .map_err(|e| {
            tracing::error!("Failed to hash password: {}", e);
            ApiError::from(e)
        })?;

    let user = state
        .users
        .create(request.into_new_user(password_hash))
        .await
        .map_err(|e| {
            tracing::warn!("Failed to create user: {}", e);
            ApiError::from(e)
        })?;

    let token = match session_token(&state, user.id).await {
        Ok(token) => token,
        Err(e) => {
            tracing::error!("Token issuance failed for new user {}; removing the account", user.id);
            if let Err(cleanup) = state.users.delete(user.id).await {
                tracing::error!("Failed to remove user {}: {}", user.id, cleanup);
            }
            return Err(e);
        }
    };
    let headers = cookie_headers(state.cookies.issue(&token));

    tracing::info!("User created successfully: {} ({})", user.username, user.id);

    Ok((
        StatusCode::CREATED,
        headers,
        Json(AuthResponse {
            user: UserResponse::from(user),
            token,
        }),
    ))
}
