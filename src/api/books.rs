//! Book catalog endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use super::{ApiJson, ApiQuery, DataResponse};
use crate::{
    error::{AppResult, ErrorResponse},
    models::{
        book::{Book, BookSearchQuery, BookSearchResponse, CreateBook, UpdateBook},
        MessageResponse,
    },
    AppState,
};

/// Body returned after a book is created
#[derive(Serialize, ToSchema)]
pub struct BookCreated {
    pub message: String,
    pub book_id: String,
    pub book_name: String,
}

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "All books, wrapped in `data`", body = Vec<Book>),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> AppResult<Json<DataResponse<Book>>> {
    let books = state.services.books.list().await?;
    Ok(Json(books.into()))
}

/// Search books by keyword and price range
#[utoipa::path(
    get,
    path = "/books/search",
    tag = "books",
    params(BookSearchQuery),
    responses(
        (status = 200, description = "Matching books", body = BookSearchResponse),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
pub async fn search_books(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<BookSearchQuery>,
) -> AppResult<Json<BookSearchResponse>> {
    let response = state.services.books.search(&query).await?;
    Ok(Json(response))
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = BookCreated),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 409, description = "Book id already exists", body = ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    ApiJson(data): ApiJson<CreateBook>,
) -> AppResult<(StatusCode, Json<BookCreated>)> {
    let created = state.services.books.create(data).await?;
    Ok((
        StatusCode::CREATED,
        Json(BookCreated {
            message: "Book added successfully".to_string(),
            book_id: created.book_id,
            book_name: created.book_name,
        }),
    ))
}

/// Replace an existing book
#[utoipa::path(
    put,
    path = "/books/{book_id}",
    tag = "books",
    params(("book_id" = String, Path, description = "Book ID")),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book updated", body = MessageResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
    ApiJson(data): ApiJson<UpdateBook>,
) -> AppResult<Json<MessageResponse>> {
    state.services.books.update(&book_id, &data).await?;
    Ok(Json(MessageResponse::new("Book updated successfully")))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{book_id}",
    tag = "books",
    params(("book_id" = String, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book deleted", body = MessageResponse),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.services.books.delete(&book_id).await?;
    Ok(Json(MessageResponse::new("Book deleted successfully")))
}
