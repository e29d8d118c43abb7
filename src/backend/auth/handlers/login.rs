/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /api/login.
 *
 * # Authentication Process
 *
 * 1. Look up the user by email
 * 2. Verify the password with bcrypt; an unknown email verifies against a
 *    dummy digest so both failure paths cost the same
 * 3. Return a token under the configured token policy
 * 4. Set the session cookie
 *
 * Unknown email and wrong password produce the identical 401 body.
 */
use axum::{
    extract::{rejection::JsonRejection, State},
    http::HeaderMap,
    response::Json,
};

use crate::backend::auth::handlers::issue::{cookie_headers, session_token};
use crate::backend::auth::handlers::types::{AuthResponse, LoginRequest, UserResponse};
use crate::backend::auth::password::verify_blocking;
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;

/// Login handler
///
/// # Arguments
///
/// * `State(state)` - Application state
/// * `payload` - Login request, or the JSON rejection when the body is malformed
///
/// # Returns
///
/// `200 OK` with the user fields, the token and a `Set-Cookie` header
///
/// # Errors
///
/// * `400 Bad Request` - Malformed body or a missing field
/// * `401 Unauthorized` - Unknown email or wrong password
/// * `500 Internal Server Error` - Store, hashing or signing failure
///
/// # Example Request
///
/// ```http
/// POST /api/login HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "email": "ada@example.com",
///   "password": "correct horse"
/// }
/// ```
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<(HeaderMap, Json<AuthResponse>), ApiError> {
    let Json(request) = payload?;
    request.validate()?;
    tracing::info!("Login request for: {}", request.email);

    let user = state.users.find_by_email(request.email.trim()).await.map_err(|e| {
        tracing::error!("Database error: {}", e);
        ApiError::from(e)
    })?;

    let digest = user.as_ref().map(|u| u.password_hash.clone());
    let valid = verify_blocking(state.hasher.clone(), request.password, digest)
        .await
        .map_err(|e| {
            tracing::error!("Password verification error: {}", e);
            ApiError::from(e)
        })?;

    let user = match user {
        Some(user) if valid => user,
        _ => {
            tracing::warn!("Invalid credentials for: {}", request.email);
            return Err(ApiError::invalid_credentials());
        }
    };

    let token = session_token(&state, user.id).await?;
    let headers = cookie_headers(state.cookies.issue(&token));

    tracing::info!("User logged in successfully: {} ({})", user.username, user.id);

    Ok((
        headers,
        Json(AuthResponse {
            user: UserResponse::from(user),
            token,
        }),
    ))
}
