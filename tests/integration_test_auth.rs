mod common;

use axum::http::{header, StatusCode};
use common::{parse_body, TestApp, ADMIN_PASSWORD};
use serde_json::json;

#[tokio::test]
async fn test_login_with_default_password() {
    let app = TestApp::new().await;

    let status = parse_body(app.get("/api/v1/auth/session", None).await).await;
    assert_eq!(status["authenticated"], false);

    let cookie = app.login(ADMIN_PASSWORD).await;
    let status = parse_body(app.get("/api/v1/auth/session", Some(&cookie)).await).await;
    assert_eq!(status["authenticated"], true);
}

#[tokio::test]
async fn test_wrong_password_is_field_error() {
    let app = TestApp::new().await;

    let response = app.post_json("/api/v1/auth/login", None, json!({ "password": "9999" })).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(response.headers().get(header::SET_COOKIE).is_none());

    let body = parse_body(response).await;
    assert_eq!(body["field"], "password");
    assert!(!body.to_string().contains("9999"));
}

#[tokio::test]
async fn test_logout_clears_session() {
    let app = TestApp::new().await;
    let cookie = app.login(ADMIN_PASSWORD).await;

    let response = app.post_json("/api/v1/auth/logout", Some(&cookie), json!({})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let status = parse_body(app.get("/api/v1/auth/session", Some(&cookie)).await).await;
    assert_eq!(status["authenticated"], false);

    let response = app.post_json("/api/v1/events", Some(&cookie), json!({
        "name": "After Logout", "event_date": "2026-01-01", "location": "x"
    })).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_change_password() {
    let app = TestApp::new().await;
    let cookie = app.login(ADMIN_PASSWORD).await;

    let response = app.post_json("/api/v1/auth/password", Some(&cookie), json!({
        "current_password": ADMIN_PASSWORD, "new_password": "race2026", "confirm_password": "race2027"
    })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(parse_body(response).await["field"], "confirm_password");

    let response = app.post_json("/api/v1/auth/password", Some(&cookie), json!({
        "current_password": ADMIN_PASSWORD, "new_password": "abc", "confirm_password": "abc"
    })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(parse_body(response).await["field"], "new_password");

    let response = app.post_json("/api/v1/auth/password", Some(&cookie), json!({
        "current_password": "nope", "new_password": "race2026", "confirm_password": "race2026"
    })).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(parse_body(response).await["field"], "current_password");

    let response = app.post_json("/api/v1/auth/password", Some(&cookie), json!({
        "current_password": ADMIN_PASSWORD, "new_password": "race2026", "confirm_password": "race2026"
    })).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.post_json("/api/v1/auth/login", None, json!({ "password": ADMIN_PASSWORD })).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    app.login("race2026").await;
}

#[tokio::test]
async fn test_change_password_requires_session() {
    let app = TestApp::new().await;

    let response = app.post_json("/api/v1/auth/password", None, json!({
        "current_password": ADMIN_PASSWORD, "new_password": "race2026", "confirm_password": "race2026"
    })).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
