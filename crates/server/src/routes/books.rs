use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use models::book;
use service::book::BookInput;
use tracing::info;

use crate::{errors::JsonApiError, state::ServerState};

#[utoipa::path(
    get, path = "/books", tag = "books",
    responses(
        (status = 200, description = "All books", body = [crate::openapi::BookDoc]),
        (status = 500, description = "Store Failure")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<book::Model>>, JsonApiError> {
    let books = state.books.list().await?;
    info!(count = books.len(), "list books");
    Ok(Json(books))
}

#[utoipa::path(
    get, path = "/books/{id}", tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::BookDoc),
        (status = 400, description = "Invalid Id"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<book::Model>, JsonApiError> {
    let Path(id) = id?;
    match state.books.get(id).await? {
        Some(m) => Ok(Json(m)),
        None => Err(JsonApiError::not_found()),
    }
}

#[utoipa::path(
    post, path = "/books", tag = "books",
    request_body = crate::openapi::BookInputDoc,
    responses(
        (status = 201, description = "Created; Location points at GET /books/{id}", body = crate::openapi::BookDoc),
        (status = 400, description = "Invalid book data"),
        (status = 500, description = "Store Failure")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    input: Result<Json<BookInput>, JsonRejection>,
) -> Result<impl IntoResponse, JsonApiError> {
    let Json(input) = input?;
    let created = state.books.create(input).await?;
    info!(id = created.id, name = %created.name, "created book");
    let location = format!("/books/{}", created.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(created)))
}

#[utoipa::path(
    put, path = "/books/{id}", tag = "books",
    params(("id" = i32, Path, description = "Book ID, must equal the body id")),
    request_body = crate::openapi::BookInputDoc,
    responses(
        (status = 204, description = "Updated"),
        (status = 400, description = "Invalid book data"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Store Failure")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
    input: Result<Json<BookInput>, JsonRejection>,
) -> Result<StatusCode, JsonApiError> {
    let Path(id) = id?;
    let Json(input) = input?;
    state.books.update(id, input).await?;
    info!(id, "updated book");
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete, path = "/books/{id}", tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Store Failure")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, JsonApiError> {
    let Path(id) = id?;
    state.books.delete(id).await?;
    info!(id, "deleted book");
    Ok(StatusCode::NO_CONTENT)
}
