//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use userhub_auth::gate::AuthorizationGate;
use userhub_core::config::AppConfig;
use userhub_service::{AuthService, UserService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Per-call token and permission check
    pub gate: Arc<AuthorizationGate>,
    /// Login flow
    pub auth_service: Arc<AuthService>,
    /// User record operations
    pub user_service: Arc<UserService>,
}
