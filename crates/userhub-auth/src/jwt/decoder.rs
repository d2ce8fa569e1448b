//! Token validation.

use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use jsonwebtoken::{Validation, decode, decode_header};
use tracing::debug;

use userhub_core::config::AuthConfig;

use super::claims::Claims;
use super::key::SigningKey;
use crate::error::AuthError;

/// Verifies token structure, signature, and expiry.
///
/// Checks run in a fixed order and the first failure wins:
/// 1. Structure (three segments, decodable header and claims) → `Malformed`
/// 2. Signature → `InvalidSignature`
/// 3. Expiry → `Expired`
#[derive(Clone)]
pub struct JwtDecoder {
    /// Shared signing key.
    key: Arc<SigningKey>,
    /// Signature-only validation; expiry is checked separately.
    validation: Validation,
    /// Clock-skew tolerance in seconds.
    leeway: i64,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("algorithm", &self.key.algorithm())
            .field("leeway", &self.leeway)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a decoder with an explicit expiry leeway.
    pub fn new(key: Arc<SigningKey>, leeway_seconds: u64) -> Result<Self, AuthError> {
        let leeway = i64::try_from(leeway_seconds).map_err(|_| {
            AuthError::Configuration(format!(
                "auth.leeway_seconds is out of range: {leeway_seconds}"
            ))
        })?;

        let mut validation = Validation::new(key.algorithm());
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        Ok(Self {
            key,
            validation,
            leeway,
        })
    }

    /// Creates a decoder using the configured leeway.
    pub fn from_config(key: Arc<SigningKey>, config: &AuthConfig) -> Result<Self, AuthError> {
        Self::new(key, config.leeway_seconds)
    }

    /// Decodes and validates a token at the current time.
    pub fn decode(&self, token: &str) -> Result<Claims, AuthError> {
        self.decode_at(token, Utc::now().timestamp())
    }

    /// Decodes and validates a token as of `now` (seconds since epoch).
    pub fn decode_at(&self, token: &str, now: i64) -> Result<Claims, AuthError> {
        let claims = parse_unverified(token)?;

        decode::<Claims>(token, self.key.decoding_key(), &self.validation).map_err(|e| {
            debug!(error = %e, "Token signature rejected");
            AuthError::InvalidSignature
        })?;

        if claims.is_expired_at(now, self.leeway) {
            return Err(AuthError::Expired);
        }

        Ok(claims)
    }
}

/// Splits the token and decodes header and claims without checking the signature.
fn parse_unverified(token: &str) -> Result<Claims, AuthError> {
    let mut segments = token.split('.');
    let (Some(header), Some(payload), Some(signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(AuthError::Malformed);
    };

    if header.is_empty() || payload.is_empty() || signature.is_empty() {
        return Err(AuthError::Malformed);
    }

    decode_header(token).map_err(|_| AuthError::Malformed)?;

    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|_| AuthError::Malformed)?;

    serde_json::from_slice(&bytes).map_err(|_| AuthError::Malformed)
}
