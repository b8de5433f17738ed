use super::{ApiError, SharedUsersService};
use crate::users::User;
use axum::{
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use tracing::{debug, instrument};

#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "Users known upstream", body = [User], content_type = "application/json"),
        (status = 404, description = "Upstream has no users"),
        (status = 500, description = "Upstream failed or sent an invalid payload"),
    ),
    tag = "users"
)]
// axum handler for the user list; an empty list is reported as 404
#[instrument(skip(service))]
pub async fn list_users(
    Extension(service): Extension<SharedUsersService>,
) -> Result<Response, ApiError> {
    let users = service.fetch_all().await?;

    if users.is_empty() {
        debug!("No users found");

        return Ok(StatusCode::NOT_FOUND.into_response());
    }

    debug!("Returning {} users", users.len());

    Ok((StatusCode::OK, Json(users)).into_response())
}
