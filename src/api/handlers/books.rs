use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};

use crate::api::errors::ApiError;
use crate::domain::book::{Book, BookInput};
use crate::domain::clients::DynBookClient;

/// Get a single book by id
///
/// GET {prefix}/:id
pub async fn get_book_by_id(
    State(client): State<DynBookClient>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Book>, ApiError> {
    let Path(id) = id?;
    let book = client.find_by_id(id).await?;
    Ok(Json(book))
}

/// List all books
///
/// GET {prefix} and GET {prefix}/
pub async fn get_all_books(
    State(client): State<DynBookClient>,
) -> Result<Json<Vec<Book>>, ApiError> {
    let books = client.find_all().await?;
    Ok(Json(books))
}

/// List all books with the given title
///
/// GET {prefix}/title/:title
pub async fn get_books_by_title(
    State(client): State<DynBookClient>,
    Path(title): Path<String>,
) -> Result<Json<Vec<Book>>, ApiError> {
    let books = client.find_by_title(&title).await?;
    Ok(Json(books))
}

/// List all books by the given author
///
/// GET {prefix}/author/:author
pub async fn get_books_by_author(
    State(client): State<DynBookClient>,
    Path(author): Path<String>,
) -> Result<Json<Vec<Book>>, ApiError> {
    let books = client.find_by_author(&author).await?;
    Ok(Json(books))
}

/// Create a new book
///
/// POST {prefix}/new
pub async fn create_book(
    State(client): State<DynBookClient>,
    body: Result<Json<BookInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Book>), ApiError> {
    let Json(input) = body?;
    let book = client.create(input).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// Update the book with the given id
///
/// PUT {prefix}/:id
pub async fn update_book(
    State(client): State<DynBookClient>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<BookInput>, JsonRejection>,
) -> Result<Json<Book>, ApiError> {
    let Path(id) = id?;
    let Json(input) = body?;
    let book = client.update(id, input).await?;
    Ok(Json(book))
}

/// Delete the book with the given id
///
/// DELETE {prefix}/:id
pub async fn delete_book(
    State(client): State<DynBookClient>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Book>, ApiError> {
    let Path(id) = id?;
    let book = client.delete(id).await?;
    Ok(Json(book))
}
