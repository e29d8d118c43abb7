/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Layers
 *
 * - CORS for the single configured frontend origin, with credentials so the
 *   session cookie travels on cross-origin requests
 * - Request tracing via `tower_http::trace::TraceLayer`
 *
 * Unknown routes answer 404 with a JSON body naming the path.
 */

use axum::http::header::{AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE, ORIGIN};
use axum::http::{HeaderValue, Method, StatusCode, Uri};
use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::backend::auth::handlers::types::MessageResponse;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// How long browsers may cache a preflight response
const CORS_MAX_AGE: Duration = Duration::from_secs(12 * 60 * 60);

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Stores, hasher, token issuer and cookie settings
/// * `cors_origin` - The one frontend origin allowed to call the API
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState, cors_origin: HeaderValue) -> Router<()> {
    let router = Router::new().route("/api/healthcheck", get(healthcheck));

    // Add API routes
    let router = configure_api_routes(router);

    // Fallback handler for 404
    let router = router.fallback(route_not_found);

    router
        .layer(cors_layer(cors_origin))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

fn cors_layer(origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([ORIGIN, CONTENT_TYPE, AUTHORIZATION])
        .expose_headers([CONTENT_LENGTH])
        .allow_credentials(true)
        .max_age(CORS_MAX_AGE)
}

async fn healthcheck() -> Json<MessageResponse> {
    Json(MessageResponse::new("The Play4Good API is working fine"))
}

async fn route_not_found(uri: Uri) -> (StatusCode, Json<Value>) {
    tracing::debug!("No route for {}", uri);
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "status": "failed",
            "message": format!("The specified route {} not found", uri),
        })),
    )
}
