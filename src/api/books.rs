//! Book endpoints

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::{
    models::{dto::BookDto, BookQuery},
    AppState,
};

/// Get a book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = crate::models::Book),
        (status = 400, description = "Invalid ID or book not found", body = String)
    )
)]
pub async fn get_book(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.services.books.find_by_id(&id).await {
        Ok(book) => Json(book).into_response(),
        Err(e) => bad_request(e.to_string()),
    }
}

/// List books, optionally filtered by a title keyword
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(BookQuery),
    responses(
        (status = 200, description = "One page of books", body = crate::models::Page),
        (status = 400, description = "Search failed", body = String)
    )
)]
pub async fn get_book_list(State(state): State<AppState>, Query(query): Query<BookQuery>) -> Response {
    let books = &state.services.books;
    let page = query.page.as_deref();
    let size = query.size.as_deref();

    let result = match query.query.as_deref() {
        Some(title) if !title.is_empty() => books.find_books_by_title(title, page, size).await,
        _ => books.find_all_books_by_page(page, size).await,
    };

    match result {
        Ok(page) => Json(page).into_response(),
        Err(e) => bad_request(e.to_string()),
    }
}

/// Register a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = BookDto,
    responses(
        (status = 200, description = "Book created", body = crate::models::Book),
        (status = 400, description = "Field errors, or {\"error\": message} when the write failed")
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    payload: Result<Json<BookDto>, JsonRejection>,
) -> Response {
    let Json(dto) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return bad_request(rejection.body_text()),
    };

    match state.services.books.create_book(&dto).await {
        Ok(book) => Json(book).into_response(),
        Err(errors) => bad_request(errors),
    }
}

/// Replace an existing book
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book ID")
    ),
    request_body = BookDto,
    responses(
        (status = 200, description = "Book updated", body = crate::models::Book),
        (status = 400, description = "Field errors, or {\"error\": message} when the write failed")
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<BookDto>, JsonRejection>,
) -> Response {
    let Json(dto) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return bad_request(rejection.body_text()),
    };

    match state.services.books.update_book(&dto, &id).await {
        Ok(book) => Json(book).into_response(),
        Err(errors) => bad_request(errors),
    }
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "The deleted book", body = crate::models::Book),
        (status = 400, description = "{\"error\": message} when the delete failed")
    )
)]
pub async fn delete_book(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.services.books.delete_book(&id).await {
        Ok(book) => Json(book).into_response(),
        Err(errors) => bad_request(errors),
    }
}

fn bad_request<T: Serialize>(body: T) -> Response {
    (StatusCode::BAD_REQUEST, Json(body)).into_response()
}
