//! Token issuance.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Header, encode};
use tracing::debug;

use userhub_core::config::AuthConfig;

use super::claims::Claims;
use super::key::SigningKey;
use crate::error::AuthError;
use crate::permission::PermissionSet;

/// Creates signed, time-bounded access tokens.
#[derive(Debug, Clone)]
pub struct JwtEncoder {
    /// Shared signing key.
    key: Arc<SigningKey>,
    /// Default token lifetime.
    ttl: Duration,
}

/// A freshly issued token and its expiry.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// Compact `header.payload.signature` string.
    pub token: String,
    /// When the token stops being accepted.
    pub expires_at: DateTime<Utc>,
}

impl JwtEncoder {
    /// Creates an encoder with an explicit default TTL.
    ///
    /// The TTL must be positive and representable as a duration.
    pub fn new(key: Arc<SigningKey>, ttl_minutes: u64) -> Result<Self, AuthError> {
        let ttl = i64::try_from(ttl_minutes)
            .ok()
            .filter(|m| *m > 0)
            .and_then(Duration::try_minutes)
            .filter(|ttl| Utc::now().checked_add_signed(*ttl).is_some())
            .ok_or_else(|| {
                AuthError::Configuration(format!(
                    "auth.token_ttl_minutes must be a positive number of minutes, got {ttl_minutes}"
                ))
            })?;

        Ok(Self { key, ttl })
    }

    /// Creates an encoder using the configured TTL.
    pub fn from_config(key: Arc<SigningKey>, config: &AuthConfig) -> Result<Self, AuthError> {
        Self::new(key, config.token_ttl_minutes)
    }

    /// Default token lifetime.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issues a token for `subject` carrying `permissions`, valid for the default TTL.
    pub fn issue(
        &self,
        subject: &str,
        permissions: &PermissionSet,
    ) -> Result<IssuedToken, AuthError> {
        self.issue_with_ttl(subject, permissions, self.ttl)
    }

    /// Issues a token valid for `ttl` from now.
    pub fn issue_with_ttl(
        &self,
        subject: &str,
        permissions: &PermissionSet,
        ttl: Duration,
    ) -> Result<IssuedToken, AuthError> {
        let now = Utc::now();
        let exp = now
            .checked_add_signed(ttl)
            .ok_or_else(|| AuthError::Configuration(format!("Token lifetime out of range: {ttl}")))?;

        let claims = Claims {
            subject: subject.to_string(),
            permissions: permissions.to_vec(),
            issued_at: now.timestamp(),
            expires_at: exp.timestamp(),
        };

        let token = encode(
            &Header::new(self.key.algorithm()),
            &claims,
            self.key.encoding_key(),
        )
        .map_err(|e| AuthError::Configuration(format!("Failed to sign token: {e}")))?;

        debug!(
            subject = %subject,
            permissions = %permissions,
            expires_at = %exp,
            "Token issued"
        );

        Ok(IssuedToken {
            token,
            expires_at: exp,
        })
    }
}
