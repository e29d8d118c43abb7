/**
 * Authentication Handler Types
 *
 * Request and response bodies shared by the auth and profile handlers.
 * Request fields default to empty so a missing field surfaces as a
 * validation error naming that field rather than a generic body rejection.
 */

use serde::{Deserialize, Serialize};

use crate::backend::auth::users::{NewUser, ProfileUpdate, User, UserId};
use crate::shared::validation::{
    validate_email, validate_password, validate_required, validate_url, validate_username,
};
use crate::shared::SharedError;

/// Sign up request
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct SignupRequest {
    /// 3-50 chars, no whitespace
    pub username: String,
    pub email: String,
    /// Plaintext; hashed before storage and never logged
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(alias = "avatarUrl")]
    pub avatar_url: Option<String>,
}

impl SignupRequest {
    /// Check every field, reporting the first failure
    pub fn validate(&self) -> Result<(), SharedError> {
        validate_username(&self.username)?;
        validate_email(&self.email)?;
        validate_password(&self.password)?;
        validate_required("first_name", &self.first_name)?;
        validate_required("last_name", &self.last_name)?;
        if let Some(url) = self.avatar() {
            validate_url("avatar_url", url)?;
        }
        Ok(())
    }

    /// Avatar URL, treating an empty string as absent
    fn avatar(&self) -> Option<&str> {
        self.avatar_url.as_deref().map(str::trim).filter(|u| !u.is_empty())
    }

    /// Build the store record once the password has been hashed
    pub fn into_new_user(self, password_hash: String) -> NewUser {
        let avatar_url = self.avatar().map(str::to_string);
        NewUser {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            password_hash,
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            avatar_url,
        }
    }
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), SharedError> {
        validate_required("email", &self.email)?;
        validate_required("password", &self.password)
    }
}

/// Partial profile update; omitted fields stay unchanged
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct UpdateProfileRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(alias = "avatarUrl")]
    pub avatar_url: Option<String>,
}

impl UpdateProfileRequest {
    /// Validate the provided fields and convert into a store update
    ///
    /// An update that changes nothing is rejected.
    pub fn into_update(self) -> Result<ProfileUpdate, SharedError> {
        if let Some(username) = &self.username {
            validate_username(username)?;
        }
        if let Some(email) = &self.email {
            validate_email(email)?;
        }
        if let Some(first_name) = &self.first_name {
            validate_required("first_name", first_name)?;
        }
        if let Some(last_name) = &self.last_name {
            validate_required("last_name", last_name)?;
        }
        if let Some(url) = &self.avatar_url {
            validate_url("avatar_url", url)?;
        }

        let trimmed = |v: Option<String>| v.map(|s| s.trim().to_string());
        let update = ProfileUpdate {
            username: trimmed(self.username),
            email: trimmed(self.email),
            first_name: trimmed(self.first_name),
            last_name: trimmed(self.last_name),
            avatar_url: trimmed(self.avatar_url),
        };

        if update.is_empty() {
            return Err(SharedError::validation("body", "No fields to update"));
        }
        Ok(update)
    }
}

/// User information safe to return to clients
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserResponse {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(rename = "avatarUrl")]
    pub avatar_url: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            avatar_url: user.avatar_url,
        }
    }
}

/// Returned by signup and login: the user fields plus the token
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AuthResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    pub token: String,
}

/// Plain `{ "message": ... }` body
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
