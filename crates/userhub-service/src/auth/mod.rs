//! Login flow.

pub mod service;

pub use service::AuthService;
