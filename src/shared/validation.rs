//! Field validation helpers
//!
//! Basic shape checks used by the request types. They are deliberately
//! lenient: the goal is to reject obviously malformed input before it reaches
//! the store, not to implement RFC 5322.

use crate::shared::error::SharedError;

/// Longest password bcrypt consumes, in bytes
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Shortest accepted password, in characters
pub const MIN_PASSWORD_CHARS: usize = 8;

/// Username must be 3-50 characters with no whitespace
pub fn validate_username(username: &str) -> Result<(), SharedError> {
    let len = username.chars().count();
    if !(3..=50).contains(&len) {
        return Err(SharedError::validation(
            "username",
            "Username must be between 3 and 50 characters",
        ));
    }
    if username.chars().any(char::is_whitespace) {
        return Err(SharedError::validation(
            "username",
            "Username must not contain whitespace",
        ));
    }
    Ok(())
}

/// Email must look like `local@domain.tld`
pub fn validate_email(email: &str) -> Result<(), SharedError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(SharedError::validation("email", "Invalid email format"))
    }
}

fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty() && !domain.starts_with('.'),
        None => false,
    }
}

/// Password must be at least 8 characters and at most 72 bytes
///
/// The upper bound is bcrypt's input limit; longer passwords would otherwise be
/// truncated silently.
pub fn validate_password(password: &str) -> Result<(), SharedError> {
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(SharedError::validation(
            "password",
            "Password must be at least 8 characters",
        ));
    }
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(SharedError::validation(
            "password",
            "Password must be at most 72 bytes",
        ));
    }
    Ok(())
}

/// Required free-text field (first or last name)
pub fn validate_required(field: &str, value: &str) -> Result<(), SharedError> {
    if value.trim().is_empty() {
        Err(SharedError::validation(field, "Field is required"))
    } else {
        Ok(())
    }
}

/// Avatar URL must be an absolute http(s) URL with a host
pub fn validate_url(field: &str, value: &str) -> Result<(), SharedError> {
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"));
    let host = rest.map(|r| r.split(['/', '?', '#']).next().unwrap_or_default());
    match host {
        Some(host) if !host.is_empty() && !value.chars().any(char::is_whitespace) => Ok(()),
        _ => Err(SharedError::validation(field, "Invalid URL")),
    }
}
