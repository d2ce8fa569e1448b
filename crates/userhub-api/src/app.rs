//! Application builder: wires router, middleware and state into an Axum app.

use std::sync::Arc;

use axum::Router;

use userhub_auth::gate::AuthorizationGate;
use userhub_auth::jwt::{JwtDecoder, JwtEncoder, SigningKey};
use userhub_auth::password::PasswordHasher;
use userhub_core::config::AppConfig;
use userhub_core::error::AppError;
use userhub_database::{MemoryUserRepository, UserRepository};
use userhub_service::{AuthService, UserService};

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Constructs the shared state from configuration over the given repository.
///
/// Fails with a `Configuration` error if the signing secret, the token
/// lifetime, the leeway or the password work factor is unusable.
pub fn build_state(
    config: AppConfig,
    user_repo: Arc<dyn UserRepository>,
) -> Result<AppState, AppError> {
    let signing_key = Arc::new(SigningKey::from_config(&config.auth)?);
    let password_hasher = Arc::new(PasswordHasher::new(&config.auth.password)?);

    let jwt_encoder = Arc::new(JwtEncoder::from_config(
        Arc::clone(&signing_key),
        &config.auth,
    )?);
    let jwt_decoder = Arc::new(JwtDecoder::from_config(
        Arc::clone(&signing_key),
        &config.auth,
    )?);
    let gate = Arc::new(AuthorizationGate::new(jwt_decoder));

    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        jwt_encoder,
    ));
    let user_service = Arc::new(UserService::new(user_repo, password_hasher));

    Ok(AppState {
        config: Arc::new(config),
        gate,
        auth_service,
        user_service,
    })
}

/// Runs the UserHub server with the given configuration.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting UserHub server...");

    let user_repo: Arc<dyn UserRepository> = Arc::new(MemoryUserRepository::new());
    let state = build_state(config, user_repo)?;

    if let Some(bootstrap) = state.config.bootstrap.as_ref() {
        if state.user_service.bootstrap(bootstrap).await? {
            tracing::info!(login = %bootstrap.login, "Bootstrap account created");
        }
    }

    let addr = format!("{}:{}", state.config.server.host, state.config.server.port);
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("UserHub server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("UserHub server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
