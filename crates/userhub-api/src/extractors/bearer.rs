//! `BearerToken` extractor: pulls the raw credential from the Authorization header.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use tracing::debug;

use userhub_core::error::AppError;

use crate::error::ApiError;

/// The unverified token presented by the caller.
///
/// Validation is left to the authorization gate, which every protected
/// handler calls with the permission it requires.
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

impl BearerToken {
    /// Returns the raw token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                debug!("Missing Authorization header");
                AppError::authentication("Unauthorized")
            })?;

        let token = header.strip_prefix("Bearer ").ok_or_else(|| {
            debug!("Invalid Authorization header format");
            AppError::authentication("Unauthorized")
        })?;

        Ok(Self(token.trim().to_string()))
    }
}
