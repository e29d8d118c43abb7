/**
 * Password Hashing
 *
 * bcrypt hashing and verification for stored credentials.
 *
 * bcrypt only consumes the first 72 bytes of its input. Hashing a longer
 * password is rejected with `PasswordError::TooLong` instead of silently
 * truncating it, and a longer plaintext never verifies.
 *
 * Hashing is CPU bound: async handlers go through `hash_blocking` and
 * `verify_blocking`, which run on tokio's blocking pool.
 */

use std::sync::Arc;
use thiserror::Error;

use crate::shared::validation::MAX_PASSWORD_BYTES;

pub use bcrypt::DEFAULT_COST;

/// Lowest cost bcrypt accepts
pub const MIN_COST: u32 = 4;

/// Highest cost bcrypt accepts
pub const MAX_COST: u32 = 31;

/// Plaintext hashed once at construction for login attempts on unknown emails
const DUMMY_PASSWORD: &str = "play4good-unknown-account";

/// Password hashing errors
#[derive(Debug, Error)]
pub enum PasswordError {
    /// Password exceeds bcrypt's 72-byte input
    #[error("password is {len} bytes, bcrypt accepts at most 72")]
    TooLong { len: usize },

    /// Cost factor outside 4..=31
    #[error("bcrypt cost {0} is out of range")]
    InvalidCost(u32),

    /// bcrypt failed (malformed digest, RNG failure)
    #[error("bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),

    /// The blocking task panicked or was cancelled
    #[error("hashing task failed: {0}")]
    Task(String),
}

/// bcrypt hasher with a fixed cost factor
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    cost: u32,
    dummy_hash: String,
}

impl PasswordHasher {
    /// Create a hasher for the given cost factor
    ///
    /// Computes one digest up front so that `verify_blocking` can spend the same
    /// time on unknown accounts as on known ones.
    pub fn new(cost: u32) -> Result<Self, PasswordError> {
        if !(MIN_COST..=MAX_COST).contains(&cost) {
            return Err(PasswordError::InvalidCost(cost));
        }
        let dummy_hash = bcrypt::hash(DUMMY_PASSWORD, cost)?;
        Ok(Self { cost, dummy_hash })
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a plaintext password with a fresh random salt
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        if password.len() > MAX_PASSWORD_BYTES {
            return Err(PasswordError::TooLong {
                len: password.len(),
            });
        }
        Ok(bcrypt::hash(password, self.cost)?)
    }

    /// Check a plaintext password against a stored digest
    ///
    /// The digest comparison is constant time. Errors only when the stored
    /// digest is not a bcrypt hash.
    pub fn verify(&self, password: &str, digest: &str) -> Result<bool, PasswordError> {
        if password.len() > MAX_PASSWORD_BYTES {
            return Ok(false);
        }
        Ok(bcrypt::verify(password, digest)?)
    }

    fn burn_verification(&self, password: &str) {
        let _ = bcrypt::verify(password, &self.dummy_hash);
    }
}

/// Hash on the blocking pool
pub async fn hash_blocking(
    hasher: Arc<PasswordHasher>,
    password: String,
) -> Result<String, PasswordError> {
    tokio::task::spawn_blocking(move || hasher.hash(&password))
        .await
        .map_err(|e| PasswordError::Task(e.to_string()))?
}

/// Verify on the blocking pool
///
/// With `digest = None` (no such account) a dummy verification still runs and
/// the result is `false`.
pub async fn verify_blocking(
    hasher: Arc<PasswordHasher>,
    password: String,
    digest: Option<String>,
) -> Result<bool, PasswordError> {
    tokio::task::spawn_blocking(move || match digest {
        Some(digest) => hasher.verify(&password, &digest),
        None => {
            hasher.burn_verification(&password);
            Ok(false)
        }
    })
    .await
    .map_err(|e| PasswordError::Task(e.to_string()))?
}
