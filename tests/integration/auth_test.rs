//! Integration tests for credential issuance and the authorization gate.

mod helpers;

use axum::http::StatusCode;
use chrono::Duration;

#[tokio::test]
async fn test_login_success() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("testuser", "password123", "READ_USER")
        .await;

    let response = app
        .request(
            "POST",
            "/auth/get-token",
            Some(serde_json::json!({
                "userName": "testuser",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "authenticated");
    assert!(response.body["accessToken"].as_str().is_some());
}

#[tokio::test]
async fn test_login_invalid_password() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("testuser2", "password123", "READ_USER")
        .await;

    let response = app
        .request(
            "POST",
            "/auth/get-token",
            Some(serde_json::json!({
                "userName": "testuser2",
                "password": "wrongpassword",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["status"], "unauthenticated");
    assert!(response.body.get("accessToken").is_none());
}

#[tokio::test]
async fn test_login_nonexistent_user_looks_like_wrong_password() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("realuser", "password123", "READ_USER")
        .await;

    let unknown = app
        .request(
            "POST",
            "/auth/get-token",
            Some(serde_json::json!({ "userName": "nobody", "password": "password123" })),
            None,
        )
        .await;
    let wrong = app
        .request(
            "POST",
            "/auth/get-token",
            Some(serde_json::json!({ "userName": "realuser", "password": "nope" })),
            None,
        )
        .await;

    assert_eq!(unknown.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown.status, wrong.status);
    assert_eq!(unknown.body, wrong.body);
}

#[tokio::test]
async fn test_login_with_incomplete_body_is_unauthenticated() {
    let app = helpers::TestApp::new().await;

    for body in [
        Some(serde_json::json!({ "userName": "someone" })),
        Some(serde_json::json!({ "password": "password123" })),
        Some(serde_json::json!({ "userName": 7, "password": "password123" })),
        None,
    ] {
        let response = app.request("POST", "/auth/get-token", body.clone(), None).await;

        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{body:?}");
        assert_eq!(response.body, serde_json::json!({ "status": "unauthenticated" }));
    }
}

#[tokio::test]
async fn test_read_token_grants_read_only() {
    let app = helpers::TestApp::new().await;
    let token = app.token_with("reader", "READ_USER").await;

    let list = app.request("GET", "/api/users", None, Some(&token)).await;
    assert_eq!(list.status, StatusCode::OK);

    let create = app
        .request(
            "POST",
            "/api/users",
            Some(serde_json::json!({
                "name": "New",
                "login": "newbie",
                "password": "secret",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(create.status, StatusCode::FORBIDDEN);
    assert_eq!(create.body["error"], "FORBIDDEN");
}

#[tokio::test]
async fn test_missing_and_empty_token_rejected() {
    let app = helpers::TestApp::new().await;

    let missing = app.request("GET", "/api/users", None, None).await;
    assert_eq!(missing.status, StatusCode::UNAUTHORIZED);

    let empty = app.request("GET", "/api/users", None, Some("")).await;
    assert_eq!(empty.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_token_rejected() {
    let app = helpers::TestApp::new().await;
    let token = app.forge_token("ghost", "READ_USER,WRITE_USER", Duration::seconds(-1));

    let response = app.request("GET", "/api/users", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Unauthorized");
}

#[tokio::test]
async fn test_tampered_token_rejected() {
    let app = helpers::TestApp::new().await;
    let token = app.token_with("reader", "READ_USER").await;

    // Swap in a payload claiming WRITE_USER while keeping the old signature.
    let forged = app.forge_token("reader", "READ_USER,WRITE_USER", Duration::minutes(5));
    let original: Vec<&str> = token.split('.').collect();
    let forged_parts: Vec<&str> = forged.split('.').collect();
    let tampered = format!("{}.{}.{}", original[0], forged_parts[1], original[2]);

    let response = app
        .request(
            "POST",
            "/api/users",
            Some(serde_json::json!({
                "name": "Evil",
                "login": "evil",
                "password": "secret",
            })),
            Some(&tampered),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(app.user_repo.len(), 1);
}

#[tokio::test]
async fn test_token_without_permissions_is_forbidden() {
    let app = helpers::TestApp::new().await;
    let token = app.token_with("nobody", "").await;

    let response = app.request("GET", "/api/users", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_health_needs_no_token() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
}
