//! Authentication test helpers
//!
//! Builds the full router over an in-memory store and drives it with
//! `tower::ServiceExt::oneshot`, so no socket or database is needed.

use axum::body::{to_bytes, Body};
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use play4good::backend::auth::memory::MemoryAuthStore;
use play4good::backend::auth::tokens::TokenPolicy;
use play4good::backend::routes::create_router;
use play4good::backend::server::{AppState, ServerConfig};

pub const TEST_SECRET: &str = "integration-test-secret";
pub const TEST_PASSWORD: &str = "password123";

/// Router plus handles on its state for assertions
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub store: Arc<MemoryAuthStore>,
}

/// Test user credentials
pub struct TestUser {
    pub id: i64,
    pub email: String,
    pub password: String,
    pub token: String,
}

/// Decoded response
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestResponse {
    pub fn set_cookie(&self) -> Option<&str> {
        self.headers.get(SET_COOKIE).and_then(|v| v.to_str().ok())
    }
}

/// Config used by every test app: cheapest bcrypt cost
pub fn test_config(policy: TokenPolicy) -> ServerConfig {
    let mut config = ServerConfig::new(TEST_SECRET);
    config.bcrypt_cost = 4;
    config.token_policy = policy;
    config
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_policy(TokenPolicy::Reuse)
    }

    pub fn with_policy(policy: TokenPolicy) -> Self {
        let config = test_config(policy);
        let store = Arc::new(MemoryAuthStore::new());
        let state = AppState::new(&config, store.clone(), store.clone())
            .expect("Failed to build test state");
        let router = create_router(state.clone(), config.cors_origin.clone());
        Self { router, state, store }
    }

    /// Send one request through a clone of the router
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        send(&self.router, request).await
    }

    /// Sign up `email` (username taken from the local part) and return the account
    pub async fn signup(&self, email: &str) -> TestUser {
        let response = self
            .send(json_request(Method::POST, "/api/signup", signup_body(email)))
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "signup failed: {}", response.body);
        TestUser {
            id: response.body["id"].as_i64().expect("id in signup response"),
            email: email.to_string(),
            password: TEST_PASSWORD.to_string(),
            token: response.body["token"].as_str().expect("token in signup response").to_string(),
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> TestResponse {
        self.send(json_request(
            Method::POST,
            "/api/login",
            json!({ "email": email, "password": password }),
        ))
        .await
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Send one request through a clone of `router`
pub async fn send(router: &Router, request: Request<Body>) -> TestResponse {
    let response = router
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible");
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    TestResponse { status, headers, body }
}

pub fn signup_body(email: &str) -> Value {
    let username = email.split('@').next().unwrap_or("user");
    json!({
        "username": username,
        "email": email,
        "password": TEST_PASSWORD,
        "first_name": "Test",
        "last_name": "User",
    })
}

pub fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("valid request")
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("valid request")
}

/// Attach `Authorization: Bearer <token>`
pub fn with_bearer(mut request: Request<Body>, token: &str) -> Request<Body> {
    request
        .headers_mut()
        .insert(AUTHORIZATION, auth_header(token).parse().expect("valid header"));
    request
}

/// Attach `Cookie: token=<token>`
pub fn with_cookie(mut request: Request<Body>, token: &str) -> Request<Body> {
    request
        .headers_mut()
        .insert(COOKIE, format!("token={}", token).parse().expect("valid header"));
    request
}

/// Create authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}
