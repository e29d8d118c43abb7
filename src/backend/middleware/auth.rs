/**
 * Authentication Gate
 *
 * `Session` is an axum extractor for routes that require a signed-in user.
 * It extracts the token (bearer header or `token` cookie), verifies it and
 * hands the handler the resolved user id as a typed argument. Any failure
 * rejects the request with 401 before the handler body runs.
 *
 * Ownership is a separate check: handlers that act on a user-owned resource
 * call `Session::require_owner` with the owning id.
 */

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::HeaderMap;

use crate::backend::auth::cookies::extract_token;
use crate::backend::auth::sessions::TokenIssuer;
use crate::backend::auth::users::UserId;
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;

/// Identity resolved from a valid token, alive for one request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Session {
    pub user_id: UserId,
}

impl Session {
    /// Fail with 403 unless this session belongs to `owner_id`
    pub fn require_owner(&self, owner_id: UserId) -> Result<(), ApiError> {
        if self.user_id == owner_id {
            Ok(())
        } else {
            tracing::warn!(
                "User {} attempted to act on resource owned by {}",
                self.user_id,
                owner_id
            );
            Err(ApiError::forbidden("You can only modify your own account"))
        }
    }
}

/// Resolve the session for a set of request headers
pub fn authenticate(
    headers: &HeaderMap,
    tokens: &TokenIssuer,
    cookie_name: &str,
) -> Result<Session, ApiError> {
    let token = extract_token(headers, cookie_name).ok_or_else(|| {
        tracing::warn!("Missing session token");
        ApiError::authentication_required()
    })?;

    let user_id = tokens.verify(&token).map_err(|e| {
        tracing::warn!("Rejected session token: {}", e);
        ApiError::from(e)
    })?;

    Ok(Session { user_id })
}

impl FromRequestParts<AppState> for Session {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        authenticate(&parts.headers, &state.tokens, &state.cookies.name)
    }
}
