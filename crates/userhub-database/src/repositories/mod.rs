//! Repository implementations.

pub mod user;
