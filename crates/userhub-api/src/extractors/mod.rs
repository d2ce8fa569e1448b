//! Custom Axum extractors.

pub mod bearer;
pub mod pagination;

pub use bearer::BearerToken;
pub use pagination::UserListParams;

use userhub_core::error::AppError;

/// Turns a deferred extractor rejection into a `Validation` error.
///
/// Handlers take their body, path and query as `Result<_, Rejection>` so that
/// the authorization gate runs before any input is looked at.
pub fn accept<T, R: std::fmt::Display>(input: Result<T, R>) -> Result<T, AppError> {
    input.map_err(|rejection| AppError::validation(rejection.to_string()))
}
