//! Authentication and authorization failures.

use thiserror::Error;

use userhub_core::error::AppError;

/// Why a login or a protected call was rejected.
///
/// None of these are retried; the caller must obtain a fresh credential.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Unknown login or wrong password. The two are deliberately indistinguishable.
    #[error("invalid credentials")]
    InvalidCredentials,
    /// The token is not a well-formed three-part signed string.
    #[error("malformed token")]
    Malformed,
    /// The token signature does not match its contents.
    #[error("invalid token signature")]
    InvalidSignature,
    /// The token is past its expiry time.
    #[error("token expired")]
    Expired,
    /// The token is valid but lacks the required permission.
    #[error("permission denied")]
    Forbidden,
    /// The signing key or hashing parameters are missing or invalid.
    #[error("auth configuration error: {0}")]
    Configuration(String),
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Forbidden => AppError::authorization("Access denied"),
            AuthError::Configuration(message) => AppError::configuration(message),
            _ => AppError::authentication("Unauthorized"),
        }
    }
}
