//! Integration tests for the user record endpoints.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

async fn admin(app: &helpers::TestApp) -> String {
    app.token_with("admin", "READ_USER,WRITE_USER").await
}

#[tokio::test]
async fn test_create_and_get_user() {
    let app = helpers::TestApp::new().await;
    let token = admin(&app).await;

    let created = app
        .request(
            "POST",
            "/api/users",
            Some(json!({
                "name": "Ana",
                "login": "ana",
                "password": "s3cret",
                "email": "ana@example.com",
                "permissions": "WRITE_USER, READ_USER",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["login"], "ana");
    assert_eq!(created.body["permissions"], "READ_USER,WRITE_USER");
    assert!(created.body.get("passwordHash").is_none());
    assert!(created.body.get("password_hash").is_none());

    let id = created.body["id"].as_str().unwrap();
    let fetched = app
        .request("GET", &format!("/api/users/{id}"), None, Some(&token))
        .await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["email"], "ana@example.com");

    // The new account can log in with the password it was created with.
    let ana_token = app.login("ana", "s3cret").await;
    assert!(!ana_token.is_empty());
}

#[tokio::test]
async fn test_create_duplicate_login_conflicts() {
    let app = helpers::TestApp::new().await;
    let token = admin(&app).await;
    let body = json!({ "name": "Bob", "login": "bob", "password": "pw" });

    let first = app
        .request("POST", "/api/users", Some(body.clone()), Some(&token))
        .await;
    assert_eq!(first.status, StatusCode::CREATED);

    let second = app
        .request("POST", "/api/users", Some(body), Some(&token))
        .await;
    assert_eq!(second.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_create_invalid_body_is_bad_request() {
    let app = helpers::TestApp::new().await;
    let token = admin(&app).await;

    let response = app
        .request(
            "POST",
            "/api/users",
            Some(json!({ "name": "X", "login": "", "password": "pw" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_get_unknown_user_is_not_found() {
    let app = helpers::TestApp::new().await;
    let token = admin(&app).await;

    let response = app
        .request(
            "GET",
            "/api/users/6c3f6e02-8d1a-4f3e-9d7b-1f0a2b3c4d5e",
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_merges_absent_fields() {
    let app = helpers::TestApp::new().await;
    let token = admin(&app).await;
    let id = app
        .create_test_user("carla", "oldpass", "READ_USER")
        .await;

    let response = app
        .request(
            "PUT",
            "/api/users",
            Some(json!({ "id": id, "name": "Carla B", "password": "newpass" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["name"], "Carla B");
    assert_eq!(response.body["login"], "carla");
    assert_eq!(response.body["email"], "carla@test.com");
    assert_eq!(response.body["permissions"], "READ_USER");

    let old = app
        .request(
            "POST",
            "/auth/get-token",
            Some(json!({ "userName": "carla", "password": "oldpass" })),
            None,
        )
        .await;
    assert_eq!(old.status, StatusCode::UNAUTHORIZED);
    app.login("carla", "newpass").await;
}

#[tokio::test]
async fn test_update_unknown_user_is_not_found() {
    let app = helpers::TestApp::new().await;
    let token = admin(&app).await;

    let response = app
        .request(
            "PUT",
            "/api/users",
            Some(json!({ "id": "6c3f6e02-8d1a-4f3e-9d7b-1f0a2b3c4d5e", "name": "Nobody" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_user() {
    let app = helpers::TestApp::new().await;
    let token = admin(&app).await;
    let id = app.create_test_user("dave", "pw", "READ_USER").await;

    let deleted = app
        .request("DELETE", &format!("/api/users/{id}"), None, Some(&token))
        .await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.body["message"], "OK");
    assert_eq!(deleted.body["error"], false);
    assert!(deleted.body["date"].is_string());

    let again = app
        .request("DELETE", &format!("/api/users/{id}"), None, Some(&token))
        .await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
    assert_eq!(again.body["message"], "User not found");
}

#[tokio::test]
async fn test_list_filters_and_paginates() {
    let app = helpers::TestApp::new().await;
    let token = admin(&app).await;
    for login in ["anabel", "bruno", "ana", "carla"] {
        app.create_test_user(login, "pw", "READ_USER").await;
    }

    let filtered = app
        .request("GET", "/api/users?login=ANA", None, Some(&token))
        .await;
    assert_eq!(filtered.status, StatusCode::OK);
    let logins: Vec<&str> = filtered.body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["login"].as_str().unwrap())
        .collect();
    assert_eq!(logins, ["ana", "anabel"]);

    // admin + four seeded users, ordered by login
    let page = app
        .request("GET", "/api/users?page=1&pageSize=2", None, Some(&token))
        .await;
    assert_eq!(page.status, StatusCode::OK);
    assert_eq!(page.body["totalItems"], 5);
    assert_eq!(page.body["totalPages"], 3);
    assert_eq!(page.body["pageSize"], 2);
    assert_eq!(page.body["items"][0]["login"], "anabel");
    assert_eq!(page.body["items"][1]["login"], "bruno");
}

#[tokio::test]
async fn test_write_token_without_read_cannot_list() {
    let app = helpers::TestApp::new().await;
    let token = app.token_with("writer", "WRITE_USER").await;

    let list = app.request("GET", "/api/users", None, Some(&token)).await;
    assert_eq!(list.status, StatusCode::FORBIDDEN);

    let create = app
        .request(
            "POST",
            "/api/users",
            Some(json!({ "name": "Eve", "login": "eve", "password": "pw" })),
            Some(&token),
        )
        .await;
    assert_eq!(create.status, StatusCode::CREATED);
}
