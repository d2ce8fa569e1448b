//! Partial update of a user record.
//!
//! Every field is optional. Applying a patch keeps the stored value for each
//! field the patch leaves out.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::model::User;

/// A set of optional field replacements for a [`User`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserPatch {
    /// New display name.
    pub name: Option<String>,
    /// New login.
    pub login: Option<String>,
    /// New email address.
    pub email: Option<String>,
    /// New password hash (callers hash before building the patch).
    pub password_hash: Option<String>,
    /// New normalized permission string.
    pub permissions: Option<String>,
}

impl UserPatch {
    /// Returns `true` when no field is present.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.login.is_none()
            && self.email.is_none()
            && self.password_hash.is_none()
            && self.permissions.is_none()
    }

    /// Merges the present fields into `user`, leaving the rest untouched.
    pub fn apply(self, user: &mut User) {
        if self.is_empty() {
            return;
        }
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(login) = self.login {
            user.login = login;
        }
        if let Some(email) = self.email {
            user.email = Some(email);
        }
        if let Some(password_hash) = self.password_hash {
            user.password_hash = password_hash;
        }
        if let Some(permissions) = self.permissions {
            user.permissions = permissions;
        }
        user.updated_at = Utc::now();
    }
}
