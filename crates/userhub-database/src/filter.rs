//! Dynamic filter for user listings.

use serde::{Deserialize, Serialize};

use userhub_entity::User;

/// Optional criteria for listing users.
///
/// Each present criterion is a case-insensitive substring match on the
/// corresponding field; absent criteria match everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserFilter {
    /// Substring of the login.
    pub login: Option<String>,
    /// Substring of the email address.
    pub email: Option<String>,
    /// Substring of the display name.
    pub name: Option<String>,
}

impl UserFilter {
    /// Returns `true` if `user` satisfies every present criterion.
    pub fn matches(&self, user: &User) -> bool {
        contains(Some(&user.login), self.login.as_deref())
            && contains(user.email.as_ref(), self.email.as_deref())
            && contains(Some(&user.name), self.name.as_deref())
    }
}

fn contains(value: Option<&String>, needle: Option<&str>) -> bool {
    let Some(needle) = needle.map(str::trim).filter(|n| !n.is_empty()) else {
        return true;
    };
    value
        .map(|v| v.to_lowercase().contains(&needle.to_lowercase()))
        .unwrap_or(false)
}
