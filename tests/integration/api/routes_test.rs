//! Router-level integration tests
//!
//! Healthcheck, the JSON 404 fallback, CORS and 500 redaction.

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_REQUEST_METHOD,
    ORIGIN,
};
use axum::http::{Method, Request, StatusCode};
use serde_json::json;
use std::sync::Arc;

use play4good::backend::auth::memory::MemoryAuthStore;
use play4good::backend::auth::tokens::TokenPolicy;
use play4good::backend::auth::users::{
    NewUser, ProfileUpdate, StoreError, User, UserId, UserStore,
};
use play4good::backend::routes::create_router;
use play4good::backend::server::AppState;

use crate::common::{empty_request, json_request, send, test_config, TestApp};
use crate::{assert_contains, assert_status};

#[tokio::test]
async fn test_healthcheck() {
    let app = TestApp::new();
    let response = app.send(empty_request(Method::GET, "/api/healthcheck")).await;
    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body["message"], "The Play4Good API is working fine");
}

#[tokio::test]
async fn test_unknown_route() {
    let app = TestApp::new();
    let response = app.send(empty_request(Method::GET, "/api/nowhere")).await;
    assert_status!(response, StatusCode::NOT_FOUND);
    assert_eq!(response.body["status"], "failed");
    assert_contains!(response.body["message"].as_str().unwrap(), "/api/nowhere");
}

#[tokio::test]
async fn test_cors_preflight_allows_frontend_origin() {
    let app = TestApp::new();
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/login")
        .header(ORIGIN, "http://localhost:3000")
        .header(ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();

    let response = app.send(request).await;
    assert!(response.status.is_success());
    assert_eq!(
        response.headers.get(ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://localhost:3000"
    );
    assert_eq!(
        response.headers.get(ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
        "true"
    );
}

#[tokio::test]
async fn test_cors_never_echoes_other_origins() {
    let app = TestApp::new();
    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/healthcheck")
        .header(ORIGIN, "http://evil.example.com")
        .body(Body::empty())
        .unwrap();

    let response = app.send(request).await;
    let allowed = response
        .headers
        .get(ACCESS_CONTROL_ALLOW_ORIGIN)
        .and_then(|v| v.to_str().ok());
    assert_ne!(allowed, Some("http://evil.example.com"));
}

/// User store whose backend is always down
struct UnavailableStore;

const STORE_DETAIL: &str = "connection refused at 10.0.0.5:5432";

#[async_trait]
impl UserStore for UnavailableStore {
    async fn find_by_email(&self, _email: &str) -> Result<Option<User>, StoreError> {
        Err(StoreError::Unavailable(STORE_DETAIL.to_string()))
    }

    async fn find_by_id(&self, _id: UserId) -> Result<Option<User>, StoreError> {
        Err(StoreError::Unavailable(STORE_DETAIL.to_string()))
    }

    async fn create(&self, _user: NewUser) -> Result<User, StoreError> {
        Err(StoreError::Unavailable(STORE_DETAIL.to_string()))
    }

    async fn update_profile(
        &self,
        _id: UserId,
        _update: ProfileUpdate,
    ) -> Result<User, StoreError> {
        Err(StoreError::Unavailable(STORE_DETAIL.to_string()))
    }

    async fn delete(&self, _id: UserId) -> Result<(), StoreError> {
        Err(StoreError::Unavailable(STORE_DETAIL.to_string()))
    }
}

#[tokio::test]
async fn test_store_failure_is_redacted() {
    let config = test_config(TokenPolicy::Reuse);
    let state = AppState::new(
        &config,
        Arc::new(UnavailableStore),
        Arc::new(MemoryAuthStore::new()),
    )
    .unwrap();
    let router = create_router(state, config.cors_origin.clone());

    let response = send(
        &router,
        json_request(
            Method::POST,
            "/api/login",
            json!({ "email": "a@example.com", "password": "password123" }),
        ),
    )
    .await;

    assert_status!(response, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["error"], "Internal server error");
    assert!(!response.body.to_string().contains("10.0.0.5"));
}
