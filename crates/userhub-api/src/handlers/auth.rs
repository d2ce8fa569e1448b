//! Login handler.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::debug;

use userhub_core::error::ErrorKind;

use crate::dto::request::LoginRequest;
use crate::dto::response::LoginResponse;
use crate::error::ApiResult;
use crate::state::AppState;

/// POST /auth/get-token
///
/// Answers `401 {"status":"unauthenticated"}` for any credential mismatch,
/// without saying whether the login exists. A body that does not carry both
/// credentials gets the same answer.
pub async fn get_token(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Response> {
    let req = match body {
        Ok(Json(req)) => req,
        Err(rejection) => {
            debug!(reason = %rejection.body_text(), "Login body rejected");
            return Ok(unauthenticated());
        }
    };

    match state.auth_service.login(&req.user_name, &req.password).await {
        Ok(issued) => Ok(Json(LoginResponse::authenticated(issued.token)).into_response()),
        Err(e) if e.kind == ErrorKind::Authentication => Ok(unauthenticated()),
        Err(e) => Err(e.into()),
    }
}

fn unauthenticated() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(LoginResponse::unauthenticated()),
    )
        .into_response()
}
