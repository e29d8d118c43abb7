/**
 * Session Propagation
 *
 * Carries the session token between client and server.
 *
 * # Outbound
 *
 * Signup and login attach `token=<jwt>` as an HttpOnly cookie; logout sends
 * the same cookie empty with `Max-Age=0`. The cookie lifetime is configured
 * independently of the token TTL.
 *
 * # Inbound
 *
 * `Authorization: Bearer <token>` wins when the header is present; the scheme
 * name is matched case-insensitively. Without it
 * the `token` cookie is used. An `Authorization` header carrying another
 * scheme yields no token at all.
 *
 * Logout only clears the cookie. A client that kept the token can still
 * present it through the header until it expires.
 */

use axum::http::header::{AUTHORIZATION, COOKIE};
use axum::http::{HeaderMap, HeaderValue};

/// Cookie name used by the frontend
pub const SESSION_COOKIE_NAME: &str = "token";

/// Default cookie lifetime in seconds
pub const DEFAULT_COOKIE_MAX_AGE_SECS: i64 = 3600;

/// Attributes of the session cookie
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieSettings {
    pub name: String,
    pub path: String,
    pub max_age_secs: i64,
    pub http_only: bool,
    pub secure: bool,
}

impl Default for CookieSettings {
    fn default() -> Self {
        Self {
            name: SESSION_COOKIE_NAME.to_string(),
            path: "/".to_string(),
            max_age_secs: DEFAULT_COOKIE_MAX_AGE_SECS,
            http_only: true,
            secure: false,
        }
    }
}

impl CookieSettings {
    /// `Set-Cookie` value carrying a freshly issued token
    pub fn issue(&self, token: &str) -> Option<HeaderValue> {
        self.render(token, self.max_age_secs)
    }

    /// `Set-Cookie` value that makes the browser drop the session cookie
    pub fn clear(&self) -> Option<HeaderValue> {
        self.render("", 0)
    }

    fn render(&self, value: &str, max_age: i64) -> Option<HeaderValue> {
        let mut cookie = format!(
            "{}={}; Path={}; Max-Age={}",
            self.name, value, self.path, max_age
        );
        if self.http_only {
            cookie.push_str("; HttpOnly");
        }
        if self.secure {
            cookie.push_str("; Secure");
        }
        HeaderValue::from_str(&cookie).ok()
    }
}

/// Pull the session token out of the request headers
pub fn extract_token(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    if let Some(auth_header) = headers.get(AUTHORIZATION) {
        return auth_header
            .to_str()
            .ok()
            .and_then(|h| h.trim_start().split_once(char::is_whitespace))
            .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("Bearer"))
            .map(|(_, token)| token.trim())
            .filter(|t| !t.is_empty())
            .map(str::to_string);
    }
    parse_cookie(headers, cookie_name)
}

/// Value of cookie `name` across all `Cookie` headers
pub fn parse_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
