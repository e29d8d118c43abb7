/**
 * User Model and Credential Store
 *
 * This module defines the stored user record and the `UserStore` trait the
 * handlers depend on. `auth::db` implements it over PostgreSQL and
 * `auth::memory` in process.
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Primary key of the `users` table
pub type UserId = i32;

/// User struct representing a user in the database
#[derive(Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct User {
    /// Unique user ID
    pub id: UserId,
    /// Username (unique, 3-50 chars)
    pub username: String,
    /// User email address (unique)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar_url: Option<String>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("avatar_url", &self.avatar_url)
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}

/// Fields needed to create a user; the password is already hashed
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar_url: Option<String>,
}

/// Partial profile update; `None` leaves the column unchanged
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub username: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar_url: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.email.is_none()
            && self.first_name.is_none()
            && self.last_name.is_none()
            && self.avatar_url.is_none()
    }
}

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// No row for the given key
    #[error("record not found")]
    NotFound,

    /// A unique column already holds this value
    #[error("conflict: {0}")]
    Conflict(String),

    /// The backing store failed
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => StoreError::NotFound,
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                let what = match db.constraint() {
                    Some(c) if c.contains("email") => "Email already registered",
                    Some(c) if c.contains("username") => "Username already taken",
                    _ => "Duplicate value",
                };
                StoreError::Conflict(what.to_string())
            }
            other => StoreError::Unavailable(other.to_string()),
        }
    }
}

/// Credential store
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Look a user up by email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Look a user up by id
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, StoreError>;

    /// Insert a user; `Conflict` if the email or username is taken
    async fn create(&self, user: NewUser) -> Result<User, StoreError>;

    /// Apply a partial profile update
    async fn update_profile(&self, id: UserId, update: ProfileUpdate) -> Result<User, StoreError>;

    /// Remove a user and anything keyed by it
    async fn delete(&self, id: UserId) -> Result<(), StoreError>;
}
