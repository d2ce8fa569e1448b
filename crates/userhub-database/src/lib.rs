//! # userhub-database
//!
//! Persistence seam for user records. Handlers and services depend on the
//! [`UserRepository`] trait; [`MemoryUserRepository`] is the bundled backend.

pub mod filter;
pub mod repositories;

pub use filter::UserFilter;
pub use repositories::user::{MemoryUserRepository, UserRepository};
