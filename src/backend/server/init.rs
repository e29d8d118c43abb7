/**
 * Server Initialization
 *
 * Builds the application from a `ServerConfig`:
 * 1. Connect the database when `DATABASE_URL` is set, else use the in-memory store
 * 2. Build `AppState` (hasher, token issuer, cookie settings)
 * 3. Create the router
 */

use axum::Router;
use std::sync::Arc;
use thiserror::Error;

use crate::backend::auth::db::PgAuthStore;
use crate::backend::auth::password::PasswordError;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, ServerConfig};
use crate::backend::server::state::AppState;

/// Startup failures
#[derive(Debug, Error)]
pub enum InitError {
    #[error("database connection failed: {0}")]
    Database(#[from] sqlx::Error),

    #[error("invalid password hashing configuration: {0}")]
    Hasher(#[from] PasswordError),
}

/// Create and configure the Axum application
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, InitError> {
    tracing::info!("Initializing Play4Good backend server");

    let state = match &config.database_url {
        Some(url) => {
            let store = Arc::new(PgAuthStore::new(load_database(url).await?));
            AppState::new(config, store.clone(), store)?
        }
        None => {
            tracing::warn!("DATABASE_URL not set. Using in-memory store; data is lost on restart.");
            AppState::in_memory(config)?
        }
    };

    if let Some(mismatch) = config.lifetime_mismatch() {
        tracing::warn!("{}", mismatch);
    }
    tracing::info!(
        "Token policy: {:?}, token TTL: {}h",
        state.token_policy,
        config.token_ttl.num_hours()
    );

    Ok(create_router(state, config.cors_origin.clone()))
}
