//! Initial account seeded at startup.

use serde::{Deserialize, Serialize};

/// An account inserted into the user store when the server starts, so that a
/// fresh deployment can obtain its first token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BootstrapConfig {
    /// Login name.
    pub login: String,
    /// Plaintext password; hashed before it is stored.
    pub password: String,
    /// Display name.
    #[serde(default = "default_name")]
    pub name: String,
    /// Comma-separated permission names.
    #[serde(default = "default_permissions")]
    pub permissions: String,
}

fn default_name() -> String {
    "Administrator".to_string()
}

fn default_permissions() -> String {
    "READ_USER,WRITE_USER".to_string()
}
