//! Book (library) endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::book::{Book, CreatedResponse, MessageResponse},
    AppState,
};

use super::{BookBody, BookId};

/// List all books
#[utoipa::path(
    get,
    path = "/library",
    tag = "library",
    responses(
        (status = 200, description = "All books", body = Vec<Book>),
        (status = 500, description = "Storage error", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.catalog.list_books().await?;
    Ok(Json(books))
}

/// Get book by ID
#[utoipa::path(
    get,
    path = "/library/{id}",
    tag = "library",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(State(state): State<AppState>, BookId(id): BookId) -> AppResult<Json<Book>> {
    let book = state.services.catalog.get_book(id).await?;
    Ok(Json(book))
}

/// Add a book
#[utoipa::path(
    post,
    path = "/library",
    tag = "library",
    request_body = crate::models::book::BookPayload,
    responses(
        (status = 201, description = "Book added", body = CreatedResponse),
        (status = 400, description = "Missing or invalid field", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    BookBody(payload): BookBody,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let id = state.services.catalog.create_book(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Book added successfully".to_string(),
            id,
        }),
    ))
}

/// Replace all fields of a book
#[utoipa::path(
    put,
    path = "/library/{id}",
    tag = "library",
    params(("id" = i64, Path, description = "Book ID")),
    request_body = crate::models::book::BookPayload,
    responses(
        (status = 200, description = "Book updated", body = MessageResponse),
        (status = 400, description = "Missing or invalid field", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    BookId(id): BookId,
    BookBody(payload): BookBody,
) -> AppResult<Json<MessageResponse>> {
    state.services.catalog.update_book(id, payload).await?;
    Ok(Json(MessageResponse::new("Book updated successfully")))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/library/{id}",
    tag = "library",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book deleted", body = MessageResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    BookId(id): BookId,
) -> AppResult<Json<MessageResponse>> {
    state.services.catalog.delete_book(id).await?;
    Ok(Json(MessageResponse::new("Book deleted successfully")))
}
