//! User profile API integration tests
//!
//! Public reads, owner-only updates and account deletion.

use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::assert_status;
use crate::common::{empty_request, json_request, with_bearer, with_cookie, TestApp};

#[tokio::test]
async fn test_get_user_is_public() {
    let app = TestApp::new();
    let user = app.signup("visible@example.com").await;

    let response = app
        .send(empty_request(Method::GET, &format!("/api/users/{}", user.id)))
        .await;
    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body["username"], "visible");
    assert!(response.body.get("token").is_none());

    let missing = app.send(empty_request(Method::GET, "/api/users/4242")).await;
    assert_status!(missing, StatusCode::NOT_FOUND);

    let bad_id = app.send(empty_request(Method::GET, "/api/users/abc")).await;
    assert_status!(bad_id, StatusCode::BAD_REQUEST);
    assert_eq!(bad_id.body["field"], "id");
}

#[tokio::test]
async fn test_update_own_profile() {
    let app = TestApp::new();
    let user = app.signup("editor@example.com").await;

    let request = json_request(
        Method::PUT,
        &format!("/api/users/{}", user.id),
        json!({ "first_name": "Grace", "avatar_url": "https://img.example.com/g.png" }),
    );
    let response = app.send(with_bearer(request, &user.token)).await;

    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body["first_name"], "Grace");
    assert_eq!(response.body["last_name"], "User");
    assert_eq!(response.body["avatarUrl"], "https://img.example.com/g.png");
}

#[tokio::test]
async fn test_update_requires_session() {
    let app = TestApp::new();
    let user = app.signup("anon@example.com").await;

    let request = json_request(
        Method::PUT,
        &format!("/api/users/{}", user.id),
        json!({ "first_name": "Nobody" }),
    );
    let response = app.send(request).await;
    assert_status!(response, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_update_other_user_is_forbidden() {
    let app = TestApp::new();
    let owner = app.signup("owner@example.com").await;
    let intruder = app.signup("intruder@example.com").await;

    let request = json_request(
        Method::PUT,
        &format!("/api/users/{}", owner.id),
        json!({ "first_name": "Mallory" }),
    );
    let response = app.send(with_cookie(request, &intruder.token)).await;
    assert_status!(response, StatusCode::FORBIDDEN);

    let unchanged = app
        .send(empty_request(Method::GET, &format!("/api/users/{}", owner.id)))
        .await;
    assert_eq!(unchanged.body["first_name"], "Test");
}

#[tokio::test]
async fn test_update_rejects_empty_and_invalid_bodies() {
    let app = TestApp::new();
    let user = app.signup("picky@example.com").await;
    let uri = format!("/api/users/{}", user.id);

    let empty = app
        .send(with_bearer(json_request(Method::PUT, &uri, json!({})), &user.token))
        .await;
    assert_status!(empty, StatusCode::BAD_REQUEST);

    let bad_email = app
        .send(with_bearer(
            json_request(Method::PUT, &uri, json!({ "email": "nope" })),
            &user.token,
        ))
        .await;
    assert_status!(bad_email, StatusCode::BAD_REQUEST);
    assert_eq!(bad_email.body["field"], "email");
}

#[tokio::test]
async fn test_update_to_taken_username_conflicts() {
    let app = TestApp::new();
    app.signup("taken@example.com").await;
    let user = app.signup("mover@example.com").await;

    let request = json_request(
        Method::PUT,
        &format!("/api/users/{}", user.id),
        json!({ "username": "taken" }),
    );
    let response = app.send(with_bearer(request, &user.token)).await;
    assert_status!(response, StatusCode::CONFLICT);
    assert_eq!(response.body["error"], "Username already taken");
}

#[tokio::test]
async fn test_delete_account() {
    let app = TestApp::new();
    let user = app.signup("leaving@example.com").await;
    let other = app.signup("staying@example.com").await;
    let uri = format!("/api/users/{}", user.id);

    let forbidden = app
        .send(with_bearer(empty_request(Method::DELETE, &uri), &other.token))
        .await;
    assert_status!(forbidden, StatusCode::FORBIDDEN);

    let response = app
        .send(with_bearer(empty_request(Method::DELETE, &uri), &user.token))
        .await;
    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body["message"], "User deleted successfully");
    assert!(response.set_cookie().unwrap().contains("Max-Age=0"));
    assert_eq!(app.store.user_count().await, 1);

    // The token still verifies, but the account behind it is gone
    let me = app
        .send(with_bearer(empty_request(Method::GET, "/api/me"), &user.token))
        .await;
    assert_status!(me, StatusCode::NOT_FOUND);

    // The credentials went with the account
    let again = app.login(&user.email, &user.password).await;
    assert_status!(again, StatusCode::UNAUTHORIZED);
}
