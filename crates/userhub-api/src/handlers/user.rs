//! User record handlers.
//!
//! Every handler runs the authorization gate with its required permission
//! before reading any input.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use userhub_auth::permission::{READ_USER, WRITE_USER};
use userhub_core::types::pagination::PageResponse;

use crate::dto::request::{CreateUserRequest, UpdateUserRequest};
use crate::dto::response::{MessageResponse, UserResponse};
use crate::error::{ApiResult, validation_error};
use crate::extractors::{BearerToken, UserListParams, accept};
use crate::state::AppState;

/// GET /api/users
pub async fn list_users(
    State(state): State<AppState>,
    token: BearerToken,
    query: Result<Query<UserListParams>, QueryRejection>,
) -> ApiResult<Json<PageResponse<UserResponse>>> {
    state.gate.authorize(token.as_str(), READ_USER)?;
    let Query(params) = accept(query)?;

    let page = state
        .user_service
        .list(&params.filter(), &params.page_request())
        .await?;
    Ok(Json(page.map(UserResponse::from)))
}

/// GET /api/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    token: BearerToken,
    id: Result<Path<Uuid>, PathRejection>,
) -> ApiResult<Json<UserResponse>> {
    state.gate.authorize(token.as_str(), READ_USER)?;
    let Path(id) = accept(id)?;

    let user = state.user_service.get(id).await?;
    Ok(Json(user.into()))
}

/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    token: BearerToken,
    body: Result<Json<CreateUserRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let caller = state.gate.authorize(token.as_str(), WRITE_USER)?;
    let Json(req) = accept(body)?;
    req.validate().map_err(validation_error)?;

    let user = state.user_service.create(&caller, req.into()).await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

/// PUT /api/users
pub async fn update_user(
    State(state): State<AppState>,
    token: BearerToken,
    body: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> ApiResult<Json<UserResponse>> {
    let caller = state.gate.authorize(token.as_str(), WRITE_USER)?;
    let Json(req) = accept(body)?;
    req.validate().map_err(validation_error)?;

    let (id, input) = req.into_parts();
    let user = state.user_service.update(&caller, id, input).await?;
    Ok(Json(user.into()))
}

/// DELETE /api/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    token: BearerToken,
    id: Result<Path<Uuid>, PathRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let caller = state.gate.authorize(token.as_str(), WRITE_USER)?;
    let Path(id) = accept(id)?;

    state.user_service.delete(&caller, id).await?;
    Ok(Json(MessageResponse::ok()))
}
