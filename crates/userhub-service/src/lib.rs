//! # userhub-service
//!
//! Business operations sitting between the HTTP handlers and the
//! credential/persistence crates.

pub mod auth;
pub mod user;

pub use auth::AuthService;
pub use user::{CreateUserInput, UpdateUserInput, UserService};
