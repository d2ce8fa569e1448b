//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::Duration;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use userhub_auth::jwt::{JwtEncoder, SigningKey};
use userhub_auth::password::PasswordHasher;
use userhub_auth::permission::PermissionSet;
use userhub_core::config::{AppConfig, AuthConfig, LoggingConfig, PasswordConfig, ServerConfig};
use userhub_database::{MemoryUserRepository, UserRepository};
use userhub_entity::NewUser;

/// Secret shared by the app under test and tokens forged in tests.
pub const TEST_SECRET: &str = "integration-test-secret-0123456789abcdef";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Backing store, for seeding and direct inspection
    pub user_repo: Arc<MemoryUserRepository>,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application with a cheap Argon2 work factor
    pub async fn new() -> Self {
        let mut auth = AuthConfig::with_secret(TEST_SECRET);
        auth.password = PasswordConfig {
            memory_kib: 1024,
            iterations: 1,
            parallelism: 1,
        };
        let config = AppConfig {
            server: ServerConfig::default(),
            auth,
            logging: LoggingConfig::default(),
            bootstrap: None,
        };

        let user_repo = Arc::new(MemoryUserRepository::new());
        let state = userhub_api::build_state(
            config.clone(),
            Arc::clone(&user_repo) as Arc<dyn UserRepository>,
        )
        .expect("Failed to build app state");

        Self {
            router: userhub_api::build_app(state),
            user_repo,
            config,
        }
    }

    /// Create a test user and return their ID
    pub async fn create_test_user(&self, login: &str, password: &str, permissions: &str) -> Uuid {
        let hasher =
            PasswordHasher::new(&self.config.auth.password).expect("Failed to build hasher");
        let hash = hasher
            .hash_password(password)
            .expect("Failed to hash password");

        self.user_repo
            .create(NewUser {
                name: format!("{login} test"),
                login: login.to_string(),
                email: Some(format!("{login}@test.com")),
                password_hash: hash,
                permissions: PermissionSet::decode(permissions).encode(),
            })
            .await
            .expect("Failed to create test user")
            .id
    }

    /// Login and return the access token
    pub async fn login(&self, login: &str, password: &str) -> String {
        let body = serde_json::json!({
            "userName": login,
            "password": password,
        });

        let response = self
            .request("POST", "/auth/get-token", Some(body), None)
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response
            .body
            .get("accessToken")
            .and_then(|v| v.as_str())
            .expect("No accessToken in login response")
            .to_string()
    }

    /// Create a user with `permissions` and log them in
    pub async fn token_with(&self, login: &str, permissions: &str) -> String {
        self.create_test_user(login, "password123", permissions)
            .await;
        self.login(login, "password123").await
    }

    /// Sign a token directly with the app's key and an arbitrary lifetime
    pub fn forge_token(&self, subject: &str, permissions: &str, ttl: Duration) -> String {
        let key = Arc::new(SigningKey::from_config(&self.config.auth).expect("Bad test key"));
        JwtEncoder::new(key, 5)
            .expect("Bad test TTL")
            .issue_with_ttl(subject, &PermissionSet::decode(permissions), ttl)
            .expect("Failed to sign token")
            .token
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
