//! User record management.

pub mod service;

pub use service::{CreateUserInput, UpdateUserInput, UserService};
