//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use userhub_service::{CreateUserInput, UpdateUserInput};

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Login name.
    pub user_name: String,
    /// Plaintext password.
    pub password: String,
}

/// Create user request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// Display name.
    #[validate(length(min = 1, max = 200, message = "Name is required"))]
    pub name: String,
    /// Login name.
    #[validate(length(min = 1, max = 100, message = "Login is required"))]
    pub login: String,
    /// Plaintext password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Email address.
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    /// Comma-separated permission names.
    pub permissions: Option<String>,
}

impl From<CreateUserRequest> for CreateUserInput {
    fn from(req: CreateUserRequest) -> Self {
        Self {
            name: req.name,
            login: req.login,
            password: req.password,
            email: req.email,
            permissions: req.permissions,
        }
    }
}

/// Update user request. Absent fields keep their stored value.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateUserRequest {
    /// Target user.
    pub id: Uuid,
    /// New display name.
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    /// New login.
    #[validate(length(min = 1, max = 100))]
    pub login: Option<String>,
    /// New plaintext password.
    #[validate(length(min = 1))]
    pub password: Option<String>,
    /// New email address.
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    /// New comma-separated permission names.
    pub permissions: Option<String>,
}

impl UpdateUserRequest {
    /// Splits the request into the target id and the service input.
    pub fn into_parts(self) -> (Uuid, UpdateUserInput) {
        (
            self.id,
            UpdateUserInput {
                name: self.name,
                login: self.login,
                password: self.password,
                email: self.email,
                permissions: self.permissions,
            },
        )
    }
}
