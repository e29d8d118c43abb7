/**
 * Token Records
 *
 * Optional side-table holding each user's most recent token and its expiry.
 * Login consults it under `TokenPolicy::Reuse` to hand back a still-valid
 * token instead of minting a new one. The table is a cache: verification never
 * reads it, so removing a record revokes nothing.
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::backend::auth::sessions::IssuedToken;
use crate::backend::auth::users::{StoreError, UserId};

/// Stored copy of a user's latest token
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct TokenRecord {
    pub user_id: UserId,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl TokenRecord {
    /// Whether the stored token is still usable at `now`
    pub fn is_live_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at > now
    }
}

impl From<&IssuedToken> for TokenRecord {
    fn from(issued: &IssuedToken) -> Self {
        Self {
            user_id: issued.user_id,
            token: issued.token.clone(),
            expires_at: issued.expires_at,
        }
    }
}

/// How login treats previously issued tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenPolicy {
    /// Return the stored token while it is unexpired, otherwise mint and store
    #[default]
    Reuse,
    /// Always mint; the record table is never touched
    Stateless,
}

impl std::str::FromStr for TokenPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reuse" => Ok(Self::Reuse),
            "stateless" => Ok(Self::Stateless),
            other => Err(format!("unknown token policy '{}'", other)),
        }
    }
}

/// Token record store; upserts are keyed by user id, last writer wins
#[async_trait]
pub trait TokenRecordStore: Send + Sync {
    async fn find_by_user(&self, user_id: UserId) -> Result<Option<TokenRecord>, StoreError>;

    async fn upsert(&self, record: TokenRecord) -> Result<(), StoreError>;

    async fn remove(&self, user_id: UserId) -> Result<(), StoreError>;
}
