/**
 * Token Issuance for Handlers
 *
 * Shared by signup and login: pick the token to hand out under the configured
 * `TokenPolicy` and wrap the session cookie into response headers.
 *
 * Under `Reuse` a stored record is returned while it is unexpired and still
 * verifies under the current secret; otherwise a new token is minted and the
 * record is overwritten. Under `Stateless` the record table is never touched.
 */

use axum::http::header::SET_COOKIE;
use axum::http::{HeaderMap, HeaderValue};
use chrono::Utc;

use crate::backend::auth::tokens::{TokenPolicy, TokenRecord};
use crate::backend::auth::users::UserId;
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;

/// Token to return for `user_id` after a successful signup or login
pub async fn session_token(state: &AppState, user_id: UserId) -> Result<String, ApiError> {
    if state.token_policy == TokenPolicy::Stateless {
        return Ok(state.tokens.issue(user_id)?.token);
    }

    let now = Utc::now();
    let stored = state.token_records.find_by_user(user_id).await.map_err(|e| {
        tracing::error!("Failed to read token record for user {}: {}", user_id, e);
        ApiError::from(e)
    })?;

    if let Some(record) = stored {
        let still_valid = record.is_live_at(now)
            && state.tokens.verify_at(&record.token, now).ok() == Some(user_id);
        if still_valid {
            tracing::debug!("Reusing stored token for user {}", user_id);
            return Ok(record.token);
        }
    }

    let issued = state.tokens.issue_at(user_id, now)?;
    state
        .token_records
        .upsert(TokenRecord::from(&issued))
        .await
        .map_err(|e| {
            tracing::error!("Failed to store token record for user {}: {}", user_id, e);
            ApiError::from(e)
        })?;

    Ok(issued.token)
}

/// Response headers carrying a `Set-Cookie` value, if it could be rendered
pub fn cookie_headers(cookie: Option<HeaderValue>) -> HeaderMap {
    let mut headers = HeaderMap::new();
    match cookie {
        Some(value) => {
            headers.insert(SET_COOKIE, value);
        }
        None => tracing::warn!("Session cookie could not be rendered; header omitted"),
    }
    headers
}
