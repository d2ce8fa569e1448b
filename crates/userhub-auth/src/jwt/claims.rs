//! Claims payload carried inside every token.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::identity::Identity;
use crate::permission::PermissionSet;

/// Token payload. Serialized field names are part of the wire format:
/// `subject`, `permissions`, `issuedAt`, `expiresAt` (seconds since epoch).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    /// Login of the authenticated user.
    pub subject: String,
    /// Granted permission names.
    pub permissions: Vec<String>,
    /// Issued-at timestamp.
    pub issued_at: i64,
    /// Expiration timestamp.
    pub expires_at: i64,
}

impl Claims {
    /// Checks whether the token is expired at `now` (seconds), allowing `leeway` seconds of skew.
    pub fn is_expired_at(&self, now: i64, leeway: i64) -> bool {
        now >= self.expires_at.saturating_add(leeway)
    }

    /// Returns the remaining TTL in seconds (0 if expired).
    pub fn remaining_ttl_seconds(&self) -> u64 {
        let remaining = self.expires_at - Utc::now().timestamp();
        if remaining > 0 { remaining as u64 } else { 0 }
    }

    /// Converts the claims into the identity handed to downstream operations.
    pub fn into_identity(self) -> Identity {
        Identity {
            subject: self.subject,
            permissions: self.permissions.into_iter().collect::<PermissionSet>(),
        }
    }
}
