/**
 * Session Tokens
 *
 * JWT issuance and verification for user sessions.
 *
 * Tokens are HS256-signed with a secret injected at construction and carry
 * `{sub, iat, exp}`. Verification is purely local: it checks the token shape,
 * the signature and `now < exp`, and never consults a store.
 */

use chrono::{DateTime, Duration, TimeZone, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::backend::auth::users::UserId;

/// Default token lifetime
pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// A freshly signed token and its validity window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub token: String,
    pub user_id: UserId,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Token verification errors
#[derive(Debug, Error)]
pub enum TokenError {
    /// Not shaped like a compact JWT, or the subject is not a user id
    #[error("malformed token")]
    Malformed,

    /// Signature does not verify under the server secret
    #[error("invalid token signature")]
    InvalidSignature,

    /// Signature is fine but `exp` has passed
    #[error("token expired")]
    Expired,

    /// Encoding a new token failed
    #[error("failed to sign token: {0}")]
    Signing(jsonwebtoken::errors::Error),

    /// `now + ttl` does not fit in a timestamp
    #[error("token expiry out of range")]
    ExpiryOutOfRange,
}

/// Issues and verifies session tokens under one server secret
#[derive(Clone)]
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("algorithm", &Algorithm::HS256)
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl TokenIssuer {
    /// Create an issuer for `secret` whose tokens live for `ttl`
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked against our own clock in `verify_at`
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Create a token for `user_id` valid from now
    pub fn issue(&self, user_id: UserId) -> Result<IssuedToken, TokenError> {
        self.issue_at(user_id, Utc::now())
    }

    /// Create a token for `user_id` as if the clock read `now`
    pub fn issue_at(&self, user_id: UserId, now: DateTime<Utc>) -> Result<IssuedToken, TokenError> {
        let issued_at = truncate_to_seconds(now);
        let expires_at = issued_at
            .checked_add_signed(self.ttl)
            .ok_or(TokenError::ExpiryOutOfRange)?;
        let claims = Claims {
            sub: user_id.to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(TokenError::Signing)?;

        Ok(IssuedToken {
            token,
            user_id,
            issued_at,
            expires_at,
        })
    }

    /// Verify a token and return the user it was issued for
    pub fn verify(&self, token: &str) -> Result<UserId, TokenError> {
        self.verify_at(token, Utc::now())
    }

    /// Verify a token as if the clock read `now`
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<UserId, TokenError> {
        let claims = self.decode_claims(token)?;
        if now.timestamp() >= claims.exp {
            return Err(TokenError::Expired);
        }
        claims.sub.parse::<UserId>().map_err(|_| TokenError::Malformed)
    }

    fn decode_claims(&self, token: &str) -> Result<Claims, TokenError> {
        if !is_compact_shape(token) {
            return Err(TokenError::Malformed);
        }
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::MissingRequiredClaim(_) | ErrorKind::InvalidSubject => {
                    TokenError::Malformed
                }
                // Any other failure on a three-segment token means its bytes
                // are not what this server signed
                _ => TokenError::InvalidSignature,
            })
    }
}

/// Three non-empty dot-separated segments
fn is_compact_shape(token: &str) -> bool {
    let segments: Vec<&str> = token.split('.').collect();
    segments.len() == 3 && segments.iter().all(|s| !s.is_empty())
}

fn truncate_to_seconds(at: DateTime<Utc>) -> DateTime<Utc> {
    Utc.timestamp_opt(at.timestamp(), 0).single().unwrap_or(at)
}
