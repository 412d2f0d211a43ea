use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use service::books::domain::{Book, CreateBookInput, UpdateBookInput};

use crate::errors::ApiError;
use crate::state::ServerState;

#[utoipa::path(
    get, path = "/books", tag = "books",
    responses(
        (status = 200, description = "All stored books in storage order"),
        (status = 500, description = "Storage unreachable")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Book>>, ApiError> {
    let books = state.books.list().await?;
    info!(count = books.len(), "list books");
    Ok(Json(books))
}

#[utoipa::path(
    get, path = "/books/{id}", tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "The requested book"),
        (status = 404, description = "No book with this id")
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<Book>, ApiError> {
    let book = state.books.get(id).await?;
    Ok(Json(book))
}

#[utoipa::path(
    post, path = "/books", tag = "books",
    request_body = crate::openapi::CreateBookRequest,
    responses(
        (status = 201, description = "Created; the stored book including its id"),
        (status = 400, description = "Missing required field, or the write was rolled back")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<CreateBookInput>,
) -> Result<(StatusCode, Json<Book>), ApiError> {
    let created = state.books.create(input).await?;
    info!(id = created.id, title = %created.title, "created book");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put, path = "/books/{id}", tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    request_body = crate::openapi::UpdateBookRequest,
    responses(
        (status = 200, description = "The updated book; omitted fields keep their values"),
        (status = 400, description = "The write was rolled back"),
        (status = 404, description = "No book with this id")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(changes): Json<UpdateBookInput>,
) -> Result<Json<Book>, ApiError> {
    let updated = state.books.update(id, changes).await?;
    info!(id = updated.id, "updated book");
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/books/{id}", tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 400, description = "The delete was rolled back"),
        (status = 404, description = "No book with this id")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    state.books.delete(id).await?;
    info!(id, "deleted book");
    Ok(StatusCode::NO_CONTENT)
}
