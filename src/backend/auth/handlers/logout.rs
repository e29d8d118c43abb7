/**
 * Logout Handler
 *
 * POST /api/logout clears the session cookie. Tokens are stateless, so the
 * token itself stays valid until it expires: a client that kept it can still
 * present it in the `Authorization` header.
 */

use axum::{extract::State, http::HeaderMap, response::Json};
use std::sync::Arc;

use crate::backend::auth::cookies::CookieSettings;
use crate::backend::auth::handlers::issue::cookie_headers;
use crate::backend::auth::handlers::types::MessageResponse;

/// Logout handler
///
/// Always succeeds, with or without a session.
pub async fn logout(
    State(cookies): State<Arc<CookieSettings>>,
) -> (HeaderMap, Json<MessageResponse>) {
    tracing::info!("Logout request");
    (
        cookie_headers(cookies.clear()),
        Json(MessageResponse::new("Logged out successfully")),
    )
}
