/**
 * In-Memory Credential and Token Record Store
 *
 * Used when `DATABASE_URL` is not configured and by the test suites. Mirrors
 * the PostgreSQL schema's constraints: unique email, unique username, serial
 * ids, and token records removed together with their user.
 */

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::backend::auth::tokens::{TokenRecord, TokenRecordStore};
use crate::backend::auth::users::{NewUser, ProfileUpdate, StoreError, User, UserId, UserStore};

#[derive(Debug, Default)]
struct Tables {
    users: HashMap<UserId, User>,
    tokens: HashMap<UserId, TokenRecord>,
    next_id: UserId,
}

impl Tables {
    fn ensure_unique(
        &self,
        id: Option<UserId>,
        username: Option<&str>,
        email: Option<&str>,
    ) -> Result<(), StoreError> {
        for user in self.users.values().filter(|u| Some(u.id) != id) {
            if email.is_some_and(|e| e == user.email) {
                return Err(StoreError::Conflict("Email already registered".to_string()));
            }
            if username.is_some_and(|n| n == user.username) {
                return Err(StoreError::Conflict("Username already taken".to_string()));
            }
        }
        Ok(())
    }
}

/// Process-local store; all data is lost on restart
#[derive(Debug, Default)]
pub struct MemoryAuthStore {
    tables: RwLock<Tables>,
}

impl MemoryAuthStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn user_count(&self) -> usize {
        self.tables.read().await.users.len()
    }
}

#[async_trait]
impl UserStore for MemoryAuthStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, StoreError> {
        Ok(self.tables.read().await.users.get(&id).cloned())
    }

    async fn create(&self, user: NewUser) -> Result<User, StoreError> {
        let mut tables = self.tables.write().await;
        tables.ensure_unique(None, Some(&user.username), Some(&user.email))?;

        tables.next_id += 1;
        let now = Utc::now();
        let created = User {
            id: tables.next_id,
            username: user.username,
            email: user.email,
            password_hash: user.password_hash,
            first_name: user.first_name,
            last_name: user.last_name,
            avatar_url: user.avatar_url,
            created_at: now,
            updated_at: now,
        };
        tables.users.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update_profile(&self, id: UserId, update: ProfileUpdate) -> Result<User, StoreError> {
        let mut tables = self.tables.write().await;
        if !tables.users.contains_key(&id) {
            return Err(StoreError::NotFound);
        }
        tables.ensure_unique(Some(id), update.username.as_deref(), update.email.as_deref())?;

        let user = tables.users.get_mut(&id).ok_or(StoreError::NotFound)?;
        if let Some(username) = update.username {
            user.username = username;
        }
        if let Some(email) = update.email {
            user.email = email;
        }
        if let Some(first_name) = update.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = update.last_name {
            user.last_name = last_name;
        }
        if let Some(avatar_url) = update.avatar_url {
            user.avatar_url = Some(avatar_url);
        }
        user.updated_at = Utc::now();
        Ok(user.clone())
    }

    async fn delete(&self, id: UserId) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        tables.users.remove(&id).ok_or(StoreError::NotFound)?;
        tables.tokens.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl TokenRecordStore for MemoryAuthStore {
    async fn find_by_user(&self, user_id: UserId) -> Result<Option<TokenRecord>, StoreError> {
        Ok(self.tables.read().await.tokens.get(&user_id).cloned())
    }

    async fn upsert(&self, record: TokenRecord) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        if !tables.users.contains_key(&record.user_id) {
            // Same outcome as the foreign key on user_tokens.user_id
            return Err(StoreError::NotFound);
        }
        tables.tokens.insert(record.user_id, record);
        Ok(())
    }

    async fn remove(&self, user_id: UserId) -> Result<(), StoreError> {
        self.tables.write().await.tokens.remove(&user_id);
        Ok(())
    }
}
