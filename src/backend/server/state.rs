/**
 * Application State Management
 *
 * `AppState` is the central state container shared by every handler:
 * the credential and token-record stores, the password hasher, the token
 * issuer (holding the server secret) and the cookie settings.
 *
 * Everything is behind `Arc` and immutable except the stores, which handle
 * their own synchronization.
 *
 * The `FromRef` implementations let handlers extract only the part they need.
 */

use axum::extract::FromRef;
use std::sync::Arc;

use crate::backend::auth::cookies::CookieSettings;
use crate::backend::auth::memory::MemoryAuthStore;
use crate::backend::auth::password::{PasswordError, PasswordHasher};
use crate::backend::auth::sessions::TokenIssuer;
use crate::backend::auth::tokens::{TokenPolicy, TokenRecordStore};
use crate::backend::auth::users::UserStore;
use crate::backend::server::config::ServerConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub token_records: Arc<dyn TokenRecordStore>,
    pub hasher: Arc<PasswordHasher>,
    pub tokens: Arc<TokenIssuer>,
    pub cookies: Arc<CookieSettings>,
    pub token_policy: TokenPolicy,
}

impl AppState {
    /// Build state from configuration and the chosen stores
    pub fn new(
        config: &ServerConfig,
        users: Arc<dyn UserStore>,
        token_records: Arc<dyn TokenRecordStore>,
    ) -> Result<Self, PasswordError> {
        Ok(Self {
            users,
            token_records,
            hasher: Arc::new(PasswordHasher::new(config.bcrypt_cost)?),
            tokens: Arc::new(TokenIssuer::new(config.jwt_secret.as_bytes(), config.token_ttl)),
            cookies: Arc::new(config.cookie.clone()),
            token_policy: config.token_policy,
        })
    }

    /// State over a fresh in-memory store
    pub fn in_memory(config: &ServerConfig) -> Result<Self, PasswordError> {
        let store = Arc::new(MemoryAuthStore::new());
        Self::new(config, store.clone(), store)
    }
}

impl FromRef<AppState> for Arc<dyn UserStore> {
    fn from_ref(state: &AppState) -> Self {
        state.users.clone()
    }
}

impl FromRef<AppState> for Arc<CookieSettings> {
    fn from_ref(state: &AppState) -> Self {
        state.cookies.clone()
    }
}
