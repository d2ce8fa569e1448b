//! # userhub-entity
//!
//! Domain records owned by the persistence layer.

pub mod user;

pub use user::{NewUser, User, UserPatch};
