/**
 * Server Configuration
 *
 * This module handles loading and validation of server configuration from
 * environment variables (optionally populated from `.env` by the binary),
 * and connecting the optional PostgreSQL database.
 *
 * # Variables
 *
 * | Variable | Default |
 * |---|---|
 * | `JWT_SECRET` | required |
 * | `DATABASE_URL` | unset: in-memory store |
 * | `SERVER_PORT` | 8000 |
 * | `TOKEN_TTL_HOURS` | 24 |
 * | `BCRYPT_COST` | 12 |
 * | `COOKIE_MAX_AGE_SECS` | 3600 |
 * | `COOKIE_SECURE` | false |
 * | `TOKEN_POLICY` | reuse |
 * | `CORS_ORIGIN` | http://localhost:3000 |
 */

use axum::http::HeaderValue;
use chrono::Duration;
use sqlx::PgPool;
use std::net::SocketAddr;
use std::str::FromStr;
use thiserror::Error;

use crate::backend::auth::cookies::CookieSettings;
use crate::backend::auth::password::{DEFAULT_COST, MAX_COST, MIN_COST};
use crate::backend::auth::sessions::DEFAULT_TOKEN_TTL_HOURS;
use crate::backend::auth::tokens::TokenPolicy;

pub const DEFAULT_PORT: u16 = 8000;

pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

/// Longest accepted token lifetime (one year)
pub const MAX_TOKEN_TTL_HOURS: i64 = 24 * 366;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),

    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// Everything the server needs at startup
#[derive(Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub database_url: Option<String>,
    /// HMAC key for session tokens
    pub jwt_secret: String,
    pub token_ttl: Duration,
    pub bcrypt_cost: u32,
    pub cookie: CookieSettings,
    pub token_policy: TokenPolicy,
    pub cors_origin: HeaderValue,
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("port", &self.port)
            .field("database_url", &self.database_url.as_ref().map(|_| "<set>"))
            .field("jwt_secret", &"<redacted>")
            .field("token_ttl", &self.token_ttl)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("cookie", &self.cookie)
            .field("token_policy", &self.token_policy)
            .field("cors_origin", &self.cors_origin)
            .finish()
    }
}

impl ServerConfig {
    /// Defaults for everything except the secret
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            port: DEFAULT_PORT,
            database_url: None,
            jwt_secret: jwt_secret.into(),
            token_ttl: Duration::hours(DEFAULT_TOKEN_TTL_HOURS),
            bcrypt_cost: DEFAULT_COST,
            cookie: CookieSettings::default(),
            token_policy: TokenPolicy::default(),
            cors_origin: HeaderValue::from_static(DEFAULT_CORS_ORIGIN),
        }
    }

    /// Load from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let jwt_secret = lookup("JWT_SECRET")
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingValue("JWT_SECRET"))?;
        let mut config = Self::new(jwt_secret);

        config.database_url = lookup("DATABASE_URL").filter(|s| !s.is_empty());

        if let Some(port) = parse_var::<u16>(&lookup, "SERVER_PORT")? {
            config.port = port;
        }
        if let Some(hours) = parse_var::<i64>(&lookup, "TOKEN_TTL_HOURS")? {
            config.token_ttl = Some(hours)
                .filter(|h| (1..=MAX_TOKEN_TTL_HOURS).contains(h))
                .and_then(Duration::try_hours)
                .ok_or_else(|| invalid("TOKEN_TTL_HOURS", hours))?;
        }
        if let Some(cost) = parse_var::<u32>(&lookup, "BCRYPT_COST")? {
            if !(MIN_COST..=MAX_COST).contains(&cost) {
                return Err(invalid("BCRYPT_COST", cost));
            }
            config.bcrypt_cost = cost;
        }
        if let Some(max_age) = parse_var::<i64>(&lookup, "COOKIE_MAX_AGE_SECS")? {
            if max_age <= 0 {
                return Err(invalid("COOKIE_MAX_AGE_SECS", max_age));
            }
            config.cookie.max_age_secs = max_age;
        }
        if let Some(secure) = parse_var::<bool>(&lookup, "COOKIE_SECURE")? {
            config.cookie.secure = secure;
        }
        if let Some(policy) = parse_var::<TokenPolicy>(&lookup, "TOKEN_POLICY")? {
            config.token_policy = policy;
        }
        if let Some(origin) = lookup("CORS_ORIGIN") {
            config.cors_origin =
                HeaderValue::from_str(&origin).map_err(|_| invalid("CORS_ORIGIN", origin))?;
        }

        Ok(config)
    }

    /// Address the server binds to
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }

    /// Describes a cookie lifetime that differs from the token TTL
    ///
    /// The two are configured separately and are not reconciled; a browser
    /// session can end before its token expires, or outlive it.
    pub fn lifetime_mismatch(&self) -> Option<String> {
        let ttl_secs = self.token_ttl.num_seconds();
        (self.cookie.max_age_secs != ttl_secs).then(|| {
            format!(
                "session cookie max-age is {}s but tokens live {}s",
                self.cookie.max_age_secs, ttl_secs
            )
        })
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
    }
}

fn invalid(key: &'static str, value: impl ToString) -> ConfigError {
    ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    }
}

/// Connect to PostgreSQL and run migrations
///
/// Migration failures are logged but do not prevent startup; the schema may
/// already be current.
pub async fn load_database(database_url: &str) -> Result<PgPool, sqlx::Error> {
    tracing::info!("Connecting to database...");

    let pool = PgPool::connect(database_url).await?;
    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    match sqlx::migrate!().run(&pool).await {
        Ok(_) => tracing::info!("Database migrations completed successfully"),
        Err(e) => {
            tracing::error!("Failed to run database migrations: {}", e);
            tracing::warn!("Continuing without migrations - database might not be up to date");
        }
    }

    Ok(pool)
}
