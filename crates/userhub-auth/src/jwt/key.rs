//! Process-wide signing key.

use std::fmt;

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey};

use userhub_core::config::AuthConfig;

use crate::error::AuthError;

/// Minimum secret length in bytes for HMAC-SHA256.
pub const MIN_SECRET_BYTES: usize = 32;

/// HMAC key material used to sign and verify tokens.
///
/// Built once at startup and shared read-only behind an `Arc`.
#[derive(Clone)]
pub struct SigningKey {
    encoding: EncodingKey,
    decoding: DecodingKey,
    algorithm: Algorithm,
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey")
            .field("algorithm", &self.algorithm)
            .finish_non_exhaustive()
    }
}

impl SigningKey {
    /// Builds the key from raw secret bytes.
    pub fn from_secret(secret: &[u8]) -> Result<Self, AuthError> {
        if secret.iter().all(u8::is_ascii_whitespace) {
            return Err(AuthError::Configuration("auth.jwt_secret is not set".into()));
        }
        if secret.len() < MIN_SECRET_BYTES {
            return Err(AuthError::Configuration(format!(
                "auth.jwt_secret must be at least {MIN_SECRET_BYTES} bytes"
            )));
        }

        Ok(Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        })
    }

    /// Builds the key from auth configuration.
    pub fn from_config(config: &AuthConfig) -> Result<Self, AuthError> {
        Self::from_secret(config.jwt_secret.as_bytes())
    }

    /// Key used for signing.
    pub fn encoding_key(&self) -> &EncodingKey {
        &self.encoding
    }

    /// Key used for verification.
    pub fn decoding_key(&self) -> &DecodingKey {
        &self.decoding
    }

    /// Signature algorithm.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }
}
