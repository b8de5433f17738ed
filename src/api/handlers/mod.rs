//! HTTP handlers and the shared error boundary.

pub mod health;
pub mod root;
pub mod users;

use crate::users::UsersService;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::error;

/// Users service shared by every request through an `Extension` layer.
pub type SharedUsersService = Arc<dyn UsersService>;

/// Fault boundary for failures handlers do not handle themselves.
///
/// The error chain is logged and the caller gets an empty
/// `500 Internal Server Error`.
#[derive(Debug)]
pub struct ApiError(anyhow::Error);

impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("Request failed: {:#}", self.0);

        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}
