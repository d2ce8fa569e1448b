//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use userhub_entity::User;

/// Login outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// `"authenticated"` or `"unauthenticated"`.
    pub status: String,
    /// Signed access token, present only on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

impl LoginResponse {
    /// Successful login carrying `token`.
    pub fn authenticated(token: String) -> Self {
        Self {
            status: "authenticated".to_string(),
            access_token: Some(token),
        }
    }

    /// Rejected login. Carries no token.
    pub fn unauthenticated() -> Self {
        Self {
            status: "unauthenticated".to_string(),
            access_token: None,
        }
    }
}

/// User record as exposed over HTTP. Never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// User ID.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Login name.
    pub login: String,
    /// Email address.
    pub email: Option<String>,
    /// Comma-separated permission names.
    pub permissions: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last update time.
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            login: user.login,
            email: user.email,
            permissions: user.permissions,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Acknowledgement for operations without a body of their own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Status message.
    pub message: String,
    /// Server time of the acknowledgement.
    pub date: DateTime<Utc>,
    /// Always `false` for successful operations.
    pub error: bool,
}

impl MessageResponse {
    /// `{ "message": "OK", "error": false }` stamped with the current time.
    pub fn ok() -> Self {
        Self {
            message: "OK".to_string(),
            date: Utc::now(),
            error: false,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Server version.
    pub version: String,
}
