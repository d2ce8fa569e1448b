//! # userhub-api
//!
//! HTTP API layer for UserHub built on Axum.
//!
//! Provides the login endpoint, the user-record endpoints guarded by the
//! authorization gate, the health check, CORS and request logging, DTOs, and
//! error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, build_state, run_server};
pub use state::AppState;
