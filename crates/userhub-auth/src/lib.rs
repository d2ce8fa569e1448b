//! # userhub-auth
//!
//! Credential issuance and authorization enforcement for UserHub.
//!
//! ## Modules
//!
//! - `password`: Argon2id hashing and fail-closed verification
//! - `permission`: permission names and the delimited permission-set codec
//! - `jwt`: signing key, claims, token issuer and validator
//! - `gate`: per-call authorization check against a required permission
//!
//! Everything here is stateless apart from the process-wide [`SigningKey`],
//! which is read-only after startup and shared behind an `Arc`.

pub mod error;
pub mod gate;
pub mod identity;
pub mod jwt;
pub mod password;
pub mod permission;

pub use error::AuthError;
pub use gate::AuthorizationGate;
pub use identity::Identity;
pub use jwt::{Claims, IssuedToken, JwtDecoder, JwtEncoder, SigningKey};
pub use password::PasswordHasher;
pub use permission::PermissionSet;
