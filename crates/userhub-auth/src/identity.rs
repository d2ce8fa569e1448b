//! The authorized caller handed to downstream operations.

use crate::permission::PermissionSet;

/// Subject and permissions recovered from a verified credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Login of the authenticated user.
    pub subject: String,
    /// Permissions granted at issuance.
    pub permissions: PermissionSet,
}

impl Identity {
    /// Returns `true` if this identity holds `permission`.
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.contains(permission)
    }
}
