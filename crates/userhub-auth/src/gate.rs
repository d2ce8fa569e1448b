//! Authorization gate evaluated at the top of every protected operation.

use std::sync::Arc;

use tracing::debug;

use crate::error::AuthError;
use crate::identity::Identity;
use crate::jwt::decoder::JwtDecoder;

/// Checks a presented token against the single permission an operation requires.
///
/// Stateless: every call is evaluated on its own, using only the token and the clock.
#[derive(Debug, Clone)]
pub struct AuthorizationGate {
    decoder: Arc<JwtDecoder>,
}

impl AuthorizationGate {
    /// Creates a gate over the given token validator.
    pub fn new(decoder: Arc<JwtDecoder>) -> Self {
        Self { decoder }
    }

    /// Validates `token` and requires `permission` to be among its grants.
    ///
    /// On success returns the caller's identity for the downstream operation.
    pub fn authorize(&self, token: &str, permission: &str) -> Result<Identity, AuthError> {
        let claims = self.decoder.decode(token).inspect_err(|e| {
            debug!(reason = %e, permission = %permission, "Token rejected");
        })?;

        let identity = claims.into_identity();
        Self::require(&identity, permission)?;

        Ok(identity)
    }

    /// Requires an already-authenticated identity to hold `permission`.
    pub fn require(identity: &Identity, permission: &str) -> Result<(), AuthError> {
        if identity.has_permission(permission) {
            Ok(())
        } else {
            debug!(
                subject = %identity.subject,
                permission = %permission,
                "Permission missing"
            );
            Err(AuthError::Forbidden)
        }
    }
}
