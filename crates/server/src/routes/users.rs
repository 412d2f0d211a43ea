use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use service::users::domain::{CreateUserInput, User};

use crate::errors::ApiError;
use crate::state::ServerState;

#[utoipa::path(
    get, path = "/users", tag = "users",
    responses(
        (status = 200, description = "All stored users in storage order"),
        (status = 500, description = "Storage unreachable")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.users.list().await?;
    info!(count = users.len(), "list users");
    Ok(Json(users))
}

#[utoipa::path(
    post, path = "/users", tag = "users",
    request_body = crate::openapi::CreateUserRequest,
    responses(
        (status = 201, description = "Registered; the body is intentionally empty"),
        (status = 400, description = "Missing required field, or the write was rolled back")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<CreateUserInput>,
) -> Result<StatusCode, ApiError> {
    let created = state.users.create(input).await?;
    info!(id = created.id, "created user");
    Ok(StatusCode::CREATED)
}
