/**
 * API Error Types
 *
 * `ApiError` is the taxonomy every handler returns. Domain errors from the
 * stores, the token issuer, the password hasher and request validation convert
 * into it with `?`.
 *
 * # Status Mapping
 *
 * - `Validation` - 400, names the offending field
 * - `Unauthorized` - 401, fixed message, never the token error detail
 * - `Forbidden` - 403
 * - `NotFound` - 404
 * - `Conflict` - 409
 * - `StoreUnavailable` / `Internal` - 500, detail only in the server log
 */

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::password::PasswordError;
use crate::backend::auth::sessions::TokenError;
use crate::backend::auth::users::StoreError;
use crate::shared::SharedError;

/// Message returned for failed login attempts
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Message returned when a protected route has no usable session
pub const AUTHENTICATION_REQUIRED: &str = "Authentication required";

/// Body message for every 500 response
pub const INTERNAL_ERROR: &str = "Internal server error";

/// HTTP-facing error taxonomy
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or invalid input
    #[error("Validation error in field '{field}': {message}")]
    Validation { field: String, message: String },

    /// Missing, invalid or expired credentials
    #[error("Unauthorized: {0}")]
    Unauthorized(&'static str),

    /// Authenticated but not entitled to the resource
    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Duplicate unique key
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The credential or token store failed
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn invalid_credentials() -> Self {
        Self::Unauthorized(INVALID_CREDENTIALS)
    }

    pub fn authentication_required() -> Self {
        Self::Unauthorized(AUTHENTICATION_REQUIRED)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::StoreUnavailable(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show the client
    pub fn client_message(&self) -> String {
        match self {
            Self::Validation { message, .. } => message.clone(),
            Self::Unauthorized(message) => (*message).to_string(),
            Self::Forbidden(message) | Self::NotFound(message) | Self::Conflict(message) => {
                message.clone()
            }
            Self::StoreUnavailable(_) | Self::Internal(_) => INTERNAL_ERROR.to_string(),
        }
    }

    /// Field named by a validation error
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}

impl From<SharedError> for ApiError {
    fn from(err: SharedError) -> Self {
        match err {
            SharedError::ValidationError { field, message } => Self::Validation { field, message },
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => Self::not_found("User not found"),
            StoreError::Conflict(message) => Self::Conflict(message),
            StoreError::Unavailable(detail) => Self::StoreUnavailable(detail),
        }
    }
}

impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Signing(e) => Self::internal(format!("token signing failed: {}", e)),
            TokenError::ExpiryOutOfRange => Self::internal("token expiry out of range"),
            TokenError::Malformed | TokenError::InvalidSignature | TokenError::Expired => {
                Self::authentication_required()
            }
        }
    }
}

impl From<PasswordError> for ApiError {
    fn from(err: PasswordError) -> Self {
        match err {
            PasswordError::TooLong { .. } => {
                Self::validation("password", "Password must be at most 72 bytes")
            }
            other => Self::internal(format!("password hashing failed: {}", other)),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::validation("body", rejection.body_text())
    }
}
