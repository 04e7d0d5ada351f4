//! Integration tests for the admin login and dashboard data endpoints.

mod common;

use axum::http::{Method, StatusCode};
use common::{
    create_test_app, get_request, get_request_with_auth, json_request, parse_response_body,
    test_config, ADMIN_HASH, UNREACHABLE_URL,
};
use serde_json::json;
use tower::ServiceExt;

fn app() -> axum::Router {
    create_test_app(test_config(UNREACHABLE_URL, UNREACHABLE_URL))
}

#[tokio::test]
async fn test_login_success_returns_secret_as_token() {
    let request = json_request(Method::POST, "/api/admin/login", json!({ "hash": ADMIN_HASH }));
    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["token"], ADMIN_HASH);
}

#[tokio::test]
async fn test_login_wrong_hash() {
    let request = json_request(Method::POST, "/api/admin/login", json!({ "hash": "nope" }));
    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = parse_response_body(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Invalid access hash.");
}

#[tokio::test]
async fn test_parties_require_token() {
    let response = app()
        .oneshot(get_request("/api/admin/parties"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app()
        .oneshot(get_request_with_auth("/api/admin/parties", "not-the-secret"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = parse_response_body(response).await;
    assert_eq!(body["code"], "AUTH_ERROR");
}

#[tokio::test]
async fn test_parties_with_token() {
    let response = app()
        .oneshot(get_request_with_auth("/api/admin/parties", ADMIN_HASH))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert_eq!(body["data"]["parties"].as_array().unwrap().len(), 2);
    assert_eq!(body["data"]["summary"]["total_parties"], 2);
    assert_eq!(body["data"]["summary"]["active_parties"], 2);
    assert_eq!(body["data"]["summary"]["finished_parties"], 0);
    assert_eq!(body["data"]["summary"]["total_profit"], 64400.0);
}
